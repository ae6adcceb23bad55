//! `grafo dfs` command - depth-first traversal and edge classification

use grafo_core::error::Result;
use grafo_core::graph::{dfs, dfs_full, DfsResult, EdgeKind};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::Project;

pub fn execute(cli: &Cli, project: &Project, source: Option<&str>) -> Result<()> {
    let result: DfsResult = match source {
        Some(source) => dfs(&project.graph, source)?,
        None => dfs_full(&project.graph),
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            for node in &result.order {
                let parent = result.parent[node].as_deref().unwrap_or("-");
                println!(
                    "{}\tdiscovered={}\tfinished={}\tparent={}",
                    node, result.discovery_time[node], result.finish_time[node], parent
                );
            }

            let count = |kind: EdgeKind| {
                result
                    .edge_classification
                    .values()
                    .filter(|k| **k == kind)
                    .count()
            };
            println!(
                "edges: tree={} back={} forward={} cross={}",
                count(EdgeKind::TreeEdge),
                count(EdgeKind::BackEdge),
                count(EdgeKind::ForwardEdge),
                count(EdgeKind::CrossEdge)
            );
            println!("cycle detected: {}", result.has_cycle);
        }
    }

    Ok(())
}
