//! Breadth-first search

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::error::{GrafoError, Result};
use crate::graph::Graph;

/// Result of a breadth-first traversal
#[derive(Debug, Clone, Serialize)]
pub struct BfsResult {
    /// Nodes reached from the source
    pub visited: HashSet<String>,
    /// Distance (in edges) from the source; source maps to 0
    pub levels: HashMap<String, u64>,
    /// Predecessor in the BFS tree; `None` for the source
    pub parent: HashMap<String, Option<String>>,
    /// Nodes in dequeue order
    pub order: Vec<String>,
}

/// Level-order traversal from `source`.
///
/// Nodes are marked visited when enqueued, so each node enters the
/// queue exactly once even through parallel edges.
#[tracing::instrument(skip(graph), fields(source = %source))]
pub fn bfs(graph: &Graph, source: &str) -> Result<BfsResult> {
    if !graph.contains(source) {
        return Err(GrafoError::node_not_found(source));
    }

    let mut visited = HashSet::new();
    let mut levels = HashMap::new();
    let mut parent = HashMap::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    queue.push_back(source.to_string());
    visited.insert(source.to_string());
    levels.insert(source.to_string(), 0);
    parent.insert(source.to_string(), None);

    while let Some(current) = queue.pop_front() {
        let current_level = levels[&current];
        order.push(current.clone());

        for (neighbor, _weight) in graph.neighbors(&current) {
            if !visited.contains(neighbor) {
                visited.insert(neighbor.clone());
                levels.insert(neighbor.clone(), current_level + 1);
                parent.insert(neighbor.clone(), Some(current.clone()));
                queue.push_back(neighbor.clone());
            }
        }
    }

    tracing::debug!(visited = visited.len(), "bfs complete");

    Ok(BfsResult {
        visited,
        levels,
        parent,
        order,
    })
}

/// Shortest unweighted path from `source` to `target`.
///
/// Returns `Ok(None)` when the target is unreachable. A same-node pair
/// short-circuits to a singleton path without traversing.
pub fn bfs_path(graph: &Graph, source: &str, target: &str) -> Result<Option<Vec<String>>> {
    if !graph.contains(source) {
        return Err(GrafoError::node_not_found(source));
    }
    if !graph.contains(target) {
        return Err(GrafoError::node_not_found(target));
    }

    if source == target {
        return Ok(Some(vec![source.to_string()]));
    }

    let result = bfs(graph, source)?;

    if !result.visited.contains(target) {
        return Ok(None);
    }

    // Walk parent pointers back from the target, then reverse
    let mut path = Vec::new();
    let mut current = Some(target.to_string());
    while let Some(node) = current {
        current = result.parent[&node].clone();
        path.push(node);
    }
    path.reverse();

    Ok(Some(path))
}

#[cfg(test)]
mod tests;
