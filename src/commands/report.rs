//! `grafo report` command - run the analysis battery and write files
//!
//! Writes to the output directory:
//! - `global.json`: whole-graph order/size/density
//! - `degrees.csv`: per-node degree table
//! - `ego.csv`: per-node ego-subnetwork metrics
//! - `regions.json`: induced-subgraph metrics (membership data only)

use std::fs;
use std::path::Path;

use grafo_core::error::{GrafoError, Result};
use grafo_core::metrics::{degree_table, ego_table, graph_metrics, region_metrics};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::Project;

pub fn execute(cli: &Cli, project: &Project, out: Option<&Path>) -> Result<()> {
    let out_dir = out.unwrap_or(&project.output_dir);
    fs::create_dir_all(out_dir).map_err(|e| {
        GrafoError::Other(format!(
            "failed to create output directory {}: {}",
            out_dir.display(),
            e
        ))
    })?;

    let mut written = Vec::new();

    let global_path = out_dir.join("global.json");
    let global = serde_json::to_string_pretty(&graph_metrics(&project.graph))?;
    fs::write(&global_path, global)?;
    written.push(global_path);

    let degrees_path = out_dir.join("degrees.csv");
    let mut writer = csv::Writer::from_path(&degrees_path)?;
    for entry in degree_table(&project.graph) {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    written.push(degrees_path);

    let ego_path = out_dir.join("ego.csv");
    let mut writer = csv::Writer::from_path(&ego_path)?;
    for entry in ego_table(&project.graph) {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    written.push(ego_path);

    if let Some(membership) = &project.membership {
        let regions_path = out_dir.join("regions.json");
        let regions = serde_json::to_string_pretty(&region_metrics(&project.graph, membership))?;
        fs::write(&regions_path, regions)?;
        written.push(regions_path);
    }

    match cli.format {
        OutputFormat::Json => {
            let files: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
            let output = serde_json::json!({ "written": files });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                for path in &written {
                    println!("wrote {}", path.display());
                }
            }
        }
    }

    Ok(())
}
