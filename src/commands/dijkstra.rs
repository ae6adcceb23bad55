//! `grafo dijkstra` command - weighted shortest paths

use grafo_core::error::Result;
use grafo_core::graph::{
    dijkstra_path, dijkstra_path_length, single_source_dijkstra, DijkstraOptions,
};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{format_distance, Project};

pub fn execute(
    cli: &Cli,
    project: &Project,
    source: &str,
    target: Option<&str>,
    cutoff: Option<f64>,
) -> Result<()> {
    if let Some(target) = target {
        return execute_path(cli, project, source, target);
    }

    let opts = DijkstraOptions {
        target: None,
        cutoff,
    };
    let result = single_source_dijkstra(&project.graph, source, &opts)?;

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
                println!(
                    "{}\tdistance={}\tpath={}",
                    node,
                    result.distances[node],
                    result.paths[node].join(" -> ")
                );
            }
        }
    }

    Ok(())
}

fn execute_path(cli: &Cli, project: &Project, source: &str, target: &str) -> Result<()> {
    let path = dijkstra_path(&project.graph, source, target)?;
    let length = dijkstra_path_length(&project.graph, source, target)?;

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
