//! `grafo bfs` command - level-order traversal and unweighted paths

use grafo_core::error::Result;
use grafo_core::graph::{bfs, bfs_path};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::Project;

pub fn execute(cli: &Cli, project: &Project, source: &str, target: Option<&str>) -> Result<()> {
    if let Some(target) = target {
        return execute_path(cli, project, source, target);
    }

    let result = bfs(&project.graph, source)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            for node in &result.order {
                let parent = result.parent[node].as_deref().unwrap_or("-");
                println!("{}\tlevel={}\tparent={}", node, result.levels[node], parent);
            }
        }
    }

    Ok(())
}

fn execute_path(cli: &Cli, project: &Project, source: &str, target: &str) -> Result<()> {
    let path = bfs_path(&project.graph, source, target)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": source,
                "target": target,
                "found": path.is_some(),
                "path": path,
                "hops": path.as_ref().map(|p| p.len().saturating_sub(1)),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match path {
            Some(path) => {
                println!("{} ({} hops)", path.join(" -> "), path.len() - 1);
            }
            None => {
                println!("no path from {} to {}", source, target);
            }
        },
    }

    Ok(())
}
