use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn grafo() -> Command {
    cargo_bin_cmd!("grafo")
}

/// Undirected neighborhood adjacency fixture
pub fn write_neighborhood_edges(dir: &Path) -> PathBuf {
    let path = dir.join("adjacency.csv");
    fs::write(
        &path,
        "origin,destination,weight\n\
         Boa Vista,Derby,1.0\n\
         Derby,Gracas,1.0\n\
         Gracas,Aflitos,1.0\n\
         Boa Vista,Soledade,1.0\n",
    )
    .expect("failed to write adjacency fixture");
    path
}

/// Directed route fixture with price weights
#[allow(dead_code)]
pub fn write_route_edges(dir: &Path) -> PathBuf {
    let path = dir.join("routes.csv");
    fs::write(
        &path,
        "origin,destination,weight\n\
         Lisbon,Madrid,40.0\n\
         Lisbon,Paris,120.0\n\
         Madrid,Paris,50.0\n\
         Paris,Berlin,60.0\n\
         Madrid,Rome,110.0\n",
    )
    .expect("failed to write routes fixture");
    path
}

/// Directed fixture containing a negative cycle
#[allow(dead_code)]
pub fn write_negative_cycle_edges(dir: &Path) -> PathBuf {
    let path = dir.join("negative.csv");
    fs::write(
        &path,
        "origin,destination,weight\n\
         A,B,1.0\n\
         B,C,1.0\n\
         C,A,-5.0\n\
         C,D,1.0\n",
    )
    .expect("failed to write negative-cycle fixture");
    path
}

/// Wide membership fixture: headers are regions, cells are nodes
#[allow(dead_code)]
pub fn write_membership(dir: &Path) -> PathBuf {
    let path = dir.join("regions.csv");
    fs::write(
        &path,
        "center,north\n\
         Boa Vista,Gracas\n\
         Derby,Aflitos\n\
         Soledade,\n",
    )
    .expect("failed to write membership fixture");
    path
}
