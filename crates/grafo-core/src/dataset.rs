//! CSV dataset loading and cleaning
//!
//! Two file shapes are supported:
//! - an edge list with `origin,destination,weight` columns (weight
//!   optional, defaulting to 1.0), which builds the graph directly;
//! - a wide membership table whose column headers are region names and
//!   whose cells are node names, melted into `(region, node)` records
//!   with trimming, empty-cell dropping, per-node deduplication and a
//!   final sort by node name.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GrafoError, Result};
use crate::graph::Graph;

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    origin: String,
    destination: String,
    #[serde(default)]
    weight: Option<f64>,
}

/// One melted membership row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Membership {
    pub region: String,
    pub node: String,
}

/// Load an edge-list CSV into a graph.
#[tracing::instrument(skip_all, fields(path = %path.display(), directed))]
pub fn load_edges(path: &Path, directed: bool) -> Result<Graph> {
    if !path.exists() {
        return Err(GrafoError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut graph = Graph::new(directed);
    for record in reader.deserialize() {
        let record: EdgeRecord = record.map_err(|e| GrafoError::InvalidDataset {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if record.origin.is_empty() || record.destination.is_empty() {
            return Err(GrafoError::InvalidDataset {
                path: path.to_path_buf(),
                reason: "empty origin or destination".to_string(),
            });
        }
        graph.add_edge(record.origin, record.destination, record.weight.unwrap_or(1.0));
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "edges loaded"
    );

    Ok(graph)
}

/// Melt a wide region/node membership CSV into clean records.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_membership(path: &Path) -> Result<Vec<Membership>> {
    if !path.exists() {
        return Err(GrafoError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let regions: Vec<String> = reader
        .headers()
        .map_err(|e| GrafoError::InvalidDataset {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut seen_nodes = HashSet::new();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row.map_err(|e| GrafoError::InvalidDataset {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        for (column, cell) in row.iter().enumerate() {
            let node = cell.trim();
            if node.is_empty() {
                continue;
            }
            let Some(region) = regions.get(column) else {
                continue;
            };
            if seen_nodes.insert(node.to_string()) {
                records.push(Membership {
                    region: region.clone(),
                    node: node.to_string(),
                });
            }
        }
    }

    records.sort_by(|a, b| a.node.cmp(&b.node));

    tracing::debug!(nodes = records.len(), regions = regions.len(), "membership loaded");

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_edges_undirected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        fs::write(
            &path,
            "origin,destination,weight\nBoa Vista,Derby,2.5\nDerby,Graças,1.0\n",
        )
        .unwrap();

        let graph = load_edges(&path, false).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.is_directed());
        assert_eq!(graph.neighbors("Derby").len(), 2);
    }

    #[test]
    fn test_load_edges_trims_whitespace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        fs::write(&path, "origin,destination,weight\n A , B ,1.0\n").unwrap();

        let graph = load_edges(&path, true).unwrap();
        assert!(graph.contains("A"));
        assert!(graph.contains("B"));
    }

    #[test]
    fn test_load_edges_defaults_weight() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        fs::write(&path, "origin,destination\nA,B\n").unwrap();

        let graph = load_edges(&path, true).unwrap();
        assert_eq!(graph.neighbors("A"), &[("B".to_string(), 1.0)]);
    }

    #[test]
    fn test_load_edges_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        assert!(matches!(
            load_edges(&path, false),
            Err(GrafoError::DatasetNotFound { .. })
        ));
    }

    #[test]
    fn test_load_edges_rejects_bad_weight() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        fs::write(&path, "origin,destination,weight\nA,B,cheap\n").unwrap();
        assert!(matches!(
            load_edges(&path, false),
            Err(GrafoError::InvalidDataset { .. })
        ));
    }

    #[test]
    fn test_membership_melt_cleans_and_sorts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("regions.csv");
        fs::write(
            &path,
            "North,South\nCasa Forte, Pina \nEspinheiro,Boa Viagem\n,Casa Forte\n",
        )
        .unwrap();

        let records = load_membership(&path).unwrap();
        let nodes: Vec<&str> = records.iter().map(|m| m.node.as_str()).collect();
        // Sorted, trimmed, empty cells dropped, duplicate Casa Forte kept once
        assert_eq!(nodes, vec!["Boa Viagem", "Casa Forte", "Espinheiro", "Pina"]);
        let casa = records.iter().find(|m| m.node == "Casa Forte").unwrap();
        assert_eq!(casa.region, "North");
    }

    #[test]
    fn test_membership_missing_file() {
        let dir = tempdir().unwrap();
        assert!(load_membership(&dir.path().join("regions.csv")).is_err());
    }
}
