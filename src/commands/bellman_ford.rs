//! `grafo bellman-ford` command - general-weight shortest paths

use grafo_core::error::Result;
use grafo_core::graph::{bellman_ford, bellman_ford_path, bellman_ford_path_length};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{format_distance, Project};

pub fn execute(cli: &Cli, project: &Project, source: &str, target: Option<&str>) -> Result<()> {
    if let Some(target) = target {
        return execute_path(cli, project, source, target);
    }

    let result = bellman_ford(&project.graph, source)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            let mut nodes: Vec<&String> = result.distances.keys().collect();
            nodes.sort_by(|a, b| {
                result.distances[*a]
                    .partial_cmp(&result.distances[*b])
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.cmp(b))
            });
            for node in nodes {
                let predecessor = result.predecessors[node].as_deref().unwrap_or("-");
                println!(
                    "{}\tdistance={}\tpredecessor={}",
                    node,
                    format_distance(result.distances[node]),
                    predecessor
                );
            }
            if result.has_negative_cycle {
                println!("negative cycle: {}", result.negative_cycle.join(" -> "));
            }
        }
    }

    Ok(())
}

fn execute_path(cli: &Cli, project: &Project, source: &str, target: &str) -> Result<()> {
    // Fails with a negative-cycle error before reporting any path
    let path = bellman_ford_path(&project.graph, source, target)?;
    let length = bellman_ford_path_length(&project.graph, source, target)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": source,
                "target": target,
                "found": path.is_some(),
                "path": path,
                "length": if length.is_finite() { Some(length) } else { None },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match path {
            Some(path) => {
                println!("{} (length {})", path.join(" -> "), format_distance(length));
            }
            None => {
                println!("no path from {} to {}", source, target);
            }
        },
    }

    Ok(())
}
