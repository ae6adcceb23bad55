//! `grafo ego` command - ego-subnetwork metrics

use grafo_core::error::{GrafoError, Result};
use grafo_core::metrics::{ego_metrics, ego_table, EgoMetrics};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::Project;

pub fn execute(cli: &Cli, project: &Project, node: Option<&str>, all: bool) -> Result<()> {
    let table: Vec<EgoMetrics> = match (node, all) {
        (Some(node), _) => vec![ego_metrics(&project.graph, node)?],
        (None, true) => ego_table(&project.graph),
        (None, false) => {
            return Err(GrafoError::UsageError(
                "ego requires a node name or --all".to_string(),
            ));
        }
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        OutputFormat::Human => {
            for ego in &table {
                println!(
                    "{}: degree={} order={} size={} density={:.4}",
                    ego.node, ego.degree, ego.order, ego.size, ego.density
                );
            }
        }
    }

    Ok(())
}
