//! `grafo stats` command - order, size and density

use grafo_core::error::Result;
use grafo_core::metrics::{graph_metrics, region_metrics};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::Project;

pub fn execute(cli: &Cli, project: &Project) -> Result<()> {
    let metrics = graph_metrics(&project.graph);
    let regions = project
        .membership
        .as_ref()
        .map(|m| region_metrics(&project.graph, m));

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "directed": project.graph.is_directed(),
                "graph": metrics,
                "regions": regions,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("nodes: {}", metrics.order);
            println!("edges: {}", metrics.size);
            println!("density: {:.4}", metrics.density);
            if let Some(regions) = regions {
                for region in regions {
                    println!(
                        "region {}: nodes={} edges={} density={:.4}",
                        region.region,
                        region.metrics.order,
                        region.metrics.size,
                        region.metrics.density
                    );
                }
            }
        }
    }

    Ok(())
}
