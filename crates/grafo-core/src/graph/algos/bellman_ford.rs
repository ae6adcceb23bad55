//! Bellman-Ford shortest paths with negative-cycle detection

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::{GrafoError, Result};
use crate::graph::Graph;

/// Result of a Bellman-Ford run.
///
/// Unreachable nodes keep `f64::INFINITY` in `distances` and `None` in
/// `predecessors`. When a negative cycle is found the distance map is
/// not meaningful for nodes reachable through it.
#[derive(Debug, Clone, Serialize)]
pub struct BellmanFordResult {
    pub distances: HashMap<String, f64>,
    pub predecessors: HashMap<String, Option<String>>,
    pub has_negative_cycle: bool,
    /// A representative cycle when one was detected. Best effort: this
    /// is *a* negative cycle reachable from the violating edge, not
    /// necessarily the minimal one.
    pub negative_cycle: Vec<String>,
}

/// Single-source shortest paths over arbitrary edge weights.
///
/// Relaxes every edge up to `|V|-1` times, stopping early once a full
/// pass makes no update, then runs one more scan: any edge that still
/// relaxes proves a negative cycle.
#[tracing::instrument(skip(graph), fields(source = %source))]
pub fn bellman_ford(graph: &Graph, source: &str) -> Result<BellmanFordResult> {
    if !graph.contains(source) {
        return Err(GrafoError::node_not_found(source));
    }

    let nodes: Vec<String> = graph.nodes().map(|n| n.to_string()).collect();
    let mut distances: HashMap<String, f64> = nodes
        .iter()
        .map(|n| (n.clone(), f64::INFINITY))
        .collect();
    let mut predecessors: HashMap<String, Option<String>> =
        nodes.iter().map(|n| (n.clone(), None)).collect();
    distances.insert(source.to_string(), 0.0);

    for _ in 0..nodes.len().saturating_sub(1) {
        let mut updated = false;

        for u in &nodes {
            let du = distances[u];
            if du.is_infinite() {
                continue; // cannot relax anything yet
            }
            for (v, weight) in graph.neighbors(u) {
                if du + weight < distances[v] {
                    distances.insert(v.clone(), du + weight);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    updated = true;
                }
            }
        }

        if !updated {
            break;
        }
    }

    let mut has_negative_cycle = false;
    let mut negative_cycle = Vec::new();

    'scan: for u in &nodes {
        let du = distances[u];
        if du.is_infinite() {
            continue;
        }
        for (v, weight) in graph.neighbors(u) {
            if du + weight < distances[v] {
                has_negative_cycle = true;
                negative_cycle = extract_cycle(&predecessors, v, nodes.len());
                break 'scan;
            }
        }
    }

    tracing::debug!(has_negative_cycle, "bellman_ford complete");

    Ok(BellmanFordResult {
        distances,
        predecessors,
        has_negative_cycle,
        negative_cycle,
    })
}

/// Walk predecessor pointers backward `n` steps from the violating
/// edge's head to land inside the cycle, then keep walking and record
/// nodes until one repeats; the slice from its first occurrence is the
/// cycle.
fn extract_cycle(
    predecessors: &HashMap<String, Option<String>>,
    start: &str,
    n: usize,
) -> Vec<String> {
    let mut inside: Option<&str> = Some(start);
    for _ in 0..n {
        inside = match inside.and_then(|node| predecessors.get(node)) {
            Some(Some(prev)) => Some(prev.as_str()),
            _ => None,
        };
        if inside.is_none() {
            break;
        }
    }

    let Some(inside) = inside else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut trace: Vec<String> = Vec::new();
    let mut current = Some(inside.to_string());
    while let Some(node) = current {
        if seen.contains(&node) {
            if let Some(pos) = trace.iter().position(|t| *t == node) {
                return trace[pos..].to_vec();
            }
            break;
        }
        seen.insert(node.clone());
        current = predecessors.get(&node).and_then(|p| p.clone());
        trace.push(node);
    }

    Vec::new()
}

/// Shortest path from `source` to `target`, or `None` when the target
/// is unreachable. Fails if a negative cycle was detected.
pub fn bellman_ford_path(
    graph: &Graph,
    source: &str,
    target: &str,
) -> Result<Option<Vec<String>>> {
    if !graph.contains(source) {
        return Err(GrafoError::node_not_found(source));
    }
    if !graph.contains(target) {
        return Err(GrafoError::node_not_found(target));
    }

    if source == target {
        return Ok(Some(vec![source.to_string()]));
    }

    let result = bellman_ford(graph, source)?;

    if result.has_negative_cycle {
        return Err(GrafoError::NegativeCycle {
            cycle: result.negative_cycle,
        });
    }

    if result.distances[target].is_infinite() {
        return Ok(None);
    }

    let mut path = Vec::new();
    let mut current = Some(target.to_string());
    while let Some(node) = current {
        current = result.predecessors[&node].clone();
        path.push(node);
    }
    path.reverse();

    Ok(Some(path))
}

/// Shortest path length from `source` to `target`; `f64::INFINITY`
/// when the target is unreachable. Fails if a negative cycle was
/// detected.
pub fn bellman_ford_path_length(graph: &Graph, source: &str, target: &str) -> Result<f64> {
    if !graph.contains(source) {
        return Err(GrafoError::node_not_found(source));
    }
    if !graph.contains(target) {
        return Err(GrafoError::node_not_found(target));
    }

    if source == target {
        return Ok(0.0);
    }

    let result = bellman_ford(graph, source)?;

    if result.has_negative_cycle {
        return Err(GrafoError::NegativeCycle {
            cycle: result.negative_cycle,
        });
    }

    Ok(result.distances[target])
}
