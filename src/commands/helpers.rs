//! Shared command helpers: dataset resolution and graph loading

use std::path::PathBuf;

use grafo_core::config::ProjectConfig;
use grafo_core::dataset::{self, Membership};
use grafo_core::error::{GrafoError, Result};
use grafo_core::graph::Graph;

use crate::cli::Cli;

/// A fully loaded project: the graph plus optional membership data
pub struct Project {
    pub graph: Graph,
    pub membership: Option<Vec<Membership>>,
    pub output_dir: PathBuf,
}

/// Resolve CLI flags against the config file and load the datasets.
/// Flags win over config values.
pub fn load_project(cli: &Cli) -> Result<Project> {
    let config = ProjectConfig::load(cli.config.as_deref())?;

    let edges = cli
        .edges
        .clone()
        .or_else(|| config.edges.clone())
        .ok_or_else(|| {
            GrafoError::UsageError(
                "no edge dataset: pass --edges or set `edges` in grafo.toml".to_string(),
            )
        })?;
    let directed = cli.directed || config.directed;

    let graph = dataset::load_edges(&edges, directed)?;

    let membership = cli
        .membership
        .clone()
        .or_else(|| config.membership.clone())
        .map(|path| dataset::load_membership(&path))
        .transpose()?;

    Ok(Project {
        graph,
        membership,
        output_dir: config.output_dir,
    })
}

/// Render an `f64` distance for human output; infinities read as
/// "unreachable"
pub fn format_distance(distance: f64) -> String {
    if distance.is_infinite() {
        "unreachable".to_string()
    } else {
        format!("{}", distance)
    }
}
