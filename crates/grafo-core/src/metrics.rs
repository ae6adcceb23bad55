//! Structural metrics over a loaded graph
//!
//! Order/size/density for the whole graph, per-region induced
//! subgraphs, degree tables and ego-subnetwork summaries. These consume
//! the graph's read interface only.

use std::collections::HashSet;

use serde::Serialize;

use crate::dataset::Membership;
use crate::error::{GrafoError, Result};
use crate::graph::Graph;

/// Order, size and density of a graph or subgraph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphMetrics {
    pub order: usize,
    pub size: usize,
    pub density: f64,
}

/// Degree of a single node (parallel edges counted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeEntry {
    pub node: String,
    pub degree: usize,
}

/// Ego-subnetwork summary for one node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EgoMetrics {
    pub node: String,
    /// Distinct-neighbor degree
    pub degree: usize,
    pub order: usize,
    pub size: usize,
    pub density: f64,
}

/// Metrics of the subgraph induced by one region's members
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionMetrics {
    pub region: String,
    #[serde(flatten)]
    pub metrics: GraphMetrics,
}

fn density(order: usize, size: usize, directed: bool) -> f64 {
    if order <= 1 {
        return 0.0;
    }
    let pairs = (order * (order - 1)) as f64;
    if directed {
        size as f64 / pairs
    } else {
        (2 * size) as f64 / pairs
    }
}

/// Whole-graph order/size/density
pub fn graph_metrics(graph: &Graph) -> GraphMetrics {
    let order = graph.node_count();
    let size = graph.edge_count();
    GraphMetrics {
        order,
        size,
        density: density(order, size, graph.is_directed()),
    }
}

/// Edges of the subgraph induced by `members`.
///
/// Undirected adjacency stores both directions, so each retained edge
/// is seen twice and the count is halved.
fn induced_edge_count(graph: &Graph, members: &HashSet<&str>) -> usize {
    let mut count = 0;
    for node in graph.nodes() {
        if !members.contains(node) {
            continue;
        }
        for (neighbor, _weight) in graph.neighbors(node) {
            if members.contains(neighbor.as_str()) {
                count += 1;
            }
        }
    }
    if graph.is_directed() {
        count
    } else {
        count / 2
    }
}

/// Degree table in node insertion order
pub fn degree_table(graph: &Graph) -> Vec<DegreeEntry> {
    graph
        .nodes()
        .map(|node| DegreeEntry {
            node: node.to_string(),
            degree: graph.neighbors(node).len(),
        })
        .collect()
}

/// The node with the highest degree, ties broken by first insertion
pub fn max_degree(graph: &Graph) -> Option<DegreeEntry> {
    degree_table(graph)
        .into_iter()
        .reduce(|best, entry| if entry.degree > best.degree { entry } else { best })
}

/// Ego-subnetwork metrics for one node
pub fn ego_metrics(graph: &Graph, node: &str) -> Result<EgoMetrics> {
    if !graph.contains(node) {
        return Err(GrafoError::node_not_found(node));
    }

    let neighbors: HashSet<&str> = graph
        .neighbors(node)
        .iter()
        .map(|(n, _)| n.as_str())
        .collect();
    let degree = neighbors.iter().filter(|n| **n != node).count();

    let mut members = neighbors;
    members.insert(node);

    let order = members.len();
    let size = induced_edge_count(graph, &members);

    Ok(EgoMetrics {
        node: node.to_string(),
        degree,
        order,
        size,
        density: density(order, size, graph.is_directed()),
    })
}

/// Ego-subnetwork metrics for every node, in insertion order
pub fn ego_table(graph: &Graph) -> Vec<EgoMetrics> {
    graph
        .nodes()
        .filter_map(|node| ego_metrics(graph, node).ok())
        .collect()
}

/// Induced-subgraph metrics per region, sorted by region name
pub fn region_metrics(graph: &Graph, memberships: &[Membership]) -> Vec<RegionMetrics> {
    let mut regions: Vec<&str> = memberships.iter().map(|m| m.region.as_str()).collect();
    regions.sort_unstable();
    regions.dedup();

    regions
        .into_iter()
        .map(|region| {
            let members: HashSet<&str> = memberships
                .iter()
                .filter(|m| m.region == region)
                .map(|m| m.node.as_str())
                .collect();
            let order = members.len();
            let size = induced_edge_count(graph, &members);
            RegionMetrics {
                region: region.to_string(),
                metrics: GraphMetrics {
                    order,
                    size,
                    density: density(order, size, graph.is_directed()),
                },
            }
        })
        .collect()
}
