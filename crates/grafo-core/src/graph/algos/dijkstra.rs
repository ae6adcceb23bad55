//! Dijkstra shortest paths (non-negative weights)

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::error::{GrafoError, Result};
use crate::graph::Graph;

/// Shortest-path result keyed by reached node.
///
/// Nodes absent from `distances` were not reached (unreachable, beyond
/// the cutoff, or past an early target stop).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShortestPaths {
    /// Finalized distance from the nearest source
    pub distances: HashMap<String, f64>,
    /// Predecessors on shortest paths; more than one entry when several
    /// shortest paths tie
    pub predecessors: HashMap<String, Vec<String>>,
    /// One reconstructed shortest path per node, source first
    pub paths: HashMap<String, Vec<String>>,
}

/// Options for a Dijkstra run
#[derive(Debug, Clone, Default)]
pub struct DijkstraOptions {
    /// Stop as soon as this node is finalized
    pub target: Option<String>,
    /// Skip relaxations that would exceed this total distance
    pub cutoff: Option<f64>,
}

/// Heap entry ordered by distance, then by insertion sequence.
///
/// The sequence number makes pop order deterministic among equal
/// distances (first inserted pops first) and keeps node ids out of the
/// comparison entirely.
#[derive(Debug, Clone)]
struct HeapEntry {
    distance: f64,
    seq: u64,
    node: String,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap()
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

fn dijkstra_core<W>(
    graph: &Graph,
    sources: &[String],
    opts: &DijkstraOptions,
    weight: &W,
) -> Result<ShortestPaths>
where
    W: Fn(&str, &str, f64) -> Option<f64>,
{
    let mut dist: HashMap<String, f64> = HashMap::new();
    let mut seen: HashMap<String, f64> = HashMap::new();
    let mut pred: HashMap<String, Vec<String>> = HashMap::new();
    let mut paths: HashMap<String, Vec<String>> = HashMap::new();
    let mut fringe: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    for source in sources {
        seen.insert(source.clone(), 0.0);
        paths.insert(source.clone(), vec![source.clone()]);
        fringe.push(Reverse(HeapEntry {
            distance: 0.0,
            seq,
            node: source.clone(),
        }));
        seq += 1;
    }

    while let Some(Reverse(HeapEntry { distance, node, .. })) = fringe.pop() {
        if dist.contains_key(&node) {
            continue; // stale entry, already finalized
        }
        dist.insert(node.clone(), distance);
        if opts.target.as_deref() == Some(node.as_str()) {
            break;
        }

        for (neighbor, edge_weight) in graph.neighbors(&node) {
            let Some(cost) = weight(&node, neighbor, *edge_weight) else {
                continue;
            };
            let candidate = distance + cost;
            if let Some(cutoff) = opts.cutoff {
                if candidate > cutoff {
                    continue;
                }
            }

            if let Some(&finalized) = dist.get(neighbor) {
                if candidate < finalized {
                    // A finalized node just got closer, which cannot
                    // happen with non-negative weights
                    return Err(GrafoError::ContradictoryPaths);
                }
                if candidate == finalized {
                    pred.entry(neighbor.clone())
                        .or_default()
                        .push(node.clone());
                }
            } else if seen.get(neighbor).is_none_or(|&s| candidate < s) {
                seen.insert(neighbor.clone(), candidate);
                fringe.push(Reverse(HeapEntry {
                    distance: candidate,
                    seq,
                    node: neighbor.clone(),
                }));
                seq += 1;
                let mut path = paths[&node].clone();
                path.push(neighbor.clone());
                paths.insert(neighbor.clone(), path);
                pred.insert(neighbor.clone(), vec![node.clone()]);
            } else if seen.get(neighbor) == Some(&candidate) {
                pred.entry(neighbor.clone())
                    .or_default()
                    .push(node.clone());
            }
        }
    }

    // Drop tentative entries for nodes that were never finalized
    paths.retain(|node, _| dist.contains_key(node));
    pred.retain(|node, _| dist.contains_key(node));

    Ok(ShortestPaths {
        distances: dist,
        predecessors: pred,
        paths,
    })
}

/// Dijkstra from several sources at once, with a caller-supplied cost
/// function. Returning `None` from the cost function hides that edge.
pub fn multi_source_dijkstra_with<W>(
    graph: &Graph,
    sources: &[String],
    opts: &DijkstraOptions,
    weight: W,
) -> Result<ShortestPaths>
where
    W: Fn(&str, &str, f64) -> Option<f64>,
{
    if sources.is_empty() {
        return Err(GrafoError::UsageError("sources must not be empty".into()));
    }
    for source in sources {
        if !graph.contains(source) {
            return Err(GrafoError::node_not_found(source));
        }
    }

    if let Some(target) = &opts.target {
        if sources.iter().any(|s| s == target) {
            let mut result = ShortestPaths::default();
            result.distances.insert(target.clone(), 0.0);
            result.paths.insert(target.clone(), vec![target.clone()]);
            return Ok(result);
        }
    }

    dijkstra_core(graph, sources, opts, &weight)
}

/// Shortest paths from any of `sources`, using stored edge weights
#[tracing::instrument(skip(graph, opts), fields(sources = sources.len(), target = ?opts.target))]
pub fn multi_source_dijkstra(
    graph: &Graph,
    sources: &[String],
    opts: &DijkstraOptions,
) -> Result<ShortestPaths> {
    multi_source_dijkstra_with(graph, sources, opts, |_, _, w| Some(w))
}

/// Shortest paths from a single source
pub fn single_source_dijkstra(
    graph: &Graph,
    source: &str,
    opts: &DijkstraOptions,
) -> Result<ShortestPaths> {
    multi_source_dijkstra(graph, &[source.to_string()], opts)
}

/// Shortest weighted path from `source` to `target`, or `None` when the
/// target is unreachable
pub fn dijkstra_path(graph: &Graph, source: &str, target: &str) -> Result<Option<Vec<String>>> {
    if !graph.contains(target) {
        return Err(GrafoError::node_not_found(target));
    }
    let opts = DijkstraOptions {
        target: Some(target.to_string()),
        ..Default::default()
    };
    let result = single_source_dijkstra(graph, source, &opts)?;
    Ok(result.paths.get(target).cloned())
}

/// Shortest weighted path length from `source` to `target`;
/// `f64::INFINITY` when the target is unreachable
pub fn dijkstra_path_length(graph: &Graph, source: &str, target: &str) -> Result<f64> {
    if !graph.contains(target) {
        return Err(GrafoError::node_not_found(target));
    }
    let opts = DijkstraOptions {
        target: Some(target.to_string()),
        ..Default::default()
    };
    let result = single_source_dijkstra(graph, source, &opts)?;
    Ok(result
        .distances
        .get(target)
        .copied()
        .unwrap_or(f64::INFINITY))
}

#[cfg(test)]
mod tests;
