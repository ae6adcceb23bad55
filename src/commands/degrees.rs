//! `grafo degrees` command - degree table and ranking

use grafo_core::error::Result;
use grafo_core::metrics::{degree_table, max_degree};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::Project;

pub fn execute(cli: &Cli, project: &Project) -> Result<()> {
    let mut degrees = degree_table(&project.graph);
    // Highest first; name breaks ties so output is stable
    degrees.sort_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.node.cmp(&b.node)));
    let top = max_degree(&project.graph);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "degrees": degrees,
                "max": top,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for entry in &degrees {
                println!("{}\t{}", entry.node, entry.degree);
            }
            if let Some(top) = top {
                println!("highest degree: {} ({})", top.node, top.degree);
            }
        }
    }

    Ok(())
}
