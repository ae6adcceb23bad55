//! Depth-first search with edge classification
//!
//! The visit is iterative: an explicit stack of (node, neighbor-index)
//! frames simulates call/return, so recursion depth never threatens the
//! call stack on long paths. Discovery/finish timestamps and edge
//! classification are identical to the textbook recursive formulation.

use std::collections::{HashMap, HashSet};

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::error::{GrafoError, Result};
use crate::graph::Graph;

/// DFS edge classification relative to the depth-first forest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    TreeEdge,
    BackEdge,
    ForwardEdge,
    CrossEdge,
}

/// Result of a depth-first traversal
#[derive(Debug, Clone, Serialize)]
pub struct DfsResult {
    /// Nodes reached by the traversal
    pub visited: HashSet<String>,
    /// Predecessor in the DFS forest; `None` for roots
    pub parent: HashMap<String, Option<String>>,
    /// Nodes in discovery order
    pub order: Vec<String>,
    /// Clock value when each node was first reached
    pub discovery_time: HashMap<String, u64>,
    /// Clock value when each node's adjacency was exhausted
    pub finish_time: HashMap<String, u64>,
    /// True when any back edge was seen
    pub has_cycle: bool,
    /// Classification per scanned (from, to) pair; parallel edges share
    /// one entry, last scan wins
    #[serde(serialize_with = "serialize_edges")]
    pub edge_classification: HashMap<(String, String), EdgeKind>,
}

fn serialize_edges<S>(
    edges: &HashMap<(String, String), EdgeKind>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    #[derive(Serialize)]
    struct ClassifiedEdge<'a> {
        from: &'a str,
        to: &'a str,
        kind: EdgeKind,
    }

    let mut entries: Vec<_> = edges.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut seq = serializer.serialize_seq(Some(entries.len()))?;
    for ((from, to), kind) in entries {
        seq.serialize_element(&ClassifiedEdge {
            from,
            to,
            kind: *kind,
        })?;
    }
    seq.end()
}

/// Traversal state shared across roots: one clock, one visited set, one
/// classification map, exactly as a full-forest DFS requires.
#[derive(Default)]
struct DfsContext {
    clock: u64,
    visited: HashSet<String>,
    parent: HashMap<String, Option<String>>,
    order: Vec<String>,
    discovery_time: HashMap<String, u64>,
    finish_time: HashMap<String, u64>,
    edge_classification: HashMap<(String, String), EdgeKind>,
    has_cycle: bool,
}

struct Frame {
    node: String,
    next_neighbor: usize,
}

impl DfsContext {
    fn discover(&mut self, node: &str) {
        self.visited.insert(node.to_string());
        self.clock += 1;
        self.discovery_time.insert(node.to_string(), self.clock);
        self.order.push(node.to_string());
    }

    /// Depth-first visit from `root`, which must be unvisited.
    fn visit(&mut self, graph: &Graph, root: &str) {
        self.discover(root);
        let mut stack = vec![Frame {
            node: root.to_string(),
            next_neighbor: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let node = frame.node.clone();
            let neighbors = graph.neighbors(&node);

            if frame.next_neighbor >= neighbors.len() {
                self.clock += 1;
                self.finish_time.insert(node, self.clock);
                stack.pop();
                continue;
            }

            let (neighbor, _weight) = &neighbors[frame.next_neighbor];
            frame.next_neighbor += 1;
            let edge = (node.clone(), neighbor.clone());

            if !self.visited.contains(neighbor) {
                self.edge_classification.insert(edge, EdgeKind::TreeEdge);
                self.parent
                    .insert(neighbor.clone(), Some(node.clone()));
                self.discover(neighbor);
                stack.push(Frame {
                    node: neighbor.clone(),
                    next_neighbor: 0,
                });
            } else if !self.finish_time.contains_key(neighbor) {
                // Discovered but unfinished: on the current stack
                self.edge_classification.insert(edge, EdgeKind::BackEdge);
                self.has_cycle = true;
            } else if self.discovery_time[neighbor] > self.discovery_time[&node] {
                self.edge_classification.insert(edge, EdgeKind::ForwardEdge);
            } else {
                self.edge_classification.insert(edge, EdgeKind::CrossEdge);
            }
        }
    }

    fn into_result(self) -> DfsResult {
        DfsResult {
            visited: self.visited,
            parent: self.parent,
            order: self.order,
            discovery_time: self.discovery_time,
            finish_time: self.finish_time,
            has_cycle: self.has_cycle,
            edge_classification: self.edge_classification,
        }
    }
}

/// Depth-first traversal from a single source.
///
/// Note that in an undirected graph the stored reverse of every tree
/// edge is scanned while its endpoint is still unfinished, so it is
/// classified as a back edge and any undirected graph with at least one
/// edge reports a cycle.
#[tracing::instrument(skip(graph), fields(source = %source))]
pub fn dfs(graph: &Graph, source: &str) -> Result<DfsResult> {
    if !graph.contains(source) {
        return Err(GrafoError::node_not_found(source));
    }

    let mut ctx = DfsContext::default();
    ctx.parent.insert(source.to_string(), None);
    ctx.visit(graph, source);

    tracing::debug!(visited = ctx.visited.len(), has_cycle = ctx.has_cycle, "dfs complete");

    Ok(ctx.into_result())
}

/// Depth-first traversal of every component.
///
/// Roots are assigned in node insertion order; the clock, visited set
/// and classification maps are shared across components.
#[tracing::instrument(skip(graph))]
pub fn dfs_full(graph: &Graph) -> DfsResult {
    let mut ctx = DfsContext::default();

    let roots: Vec<String> = graph.nodes().map(|n| n.to_string()).collect();
    for node in roots {
        if !ctx.visited.contains(&node) {
            ctx.parent.insert(node.clone(), None);
            ctx.visit(graph, &node);
        }
    }

    tracing::debug!(visited = ctx.visited.len(), has_cycle = ctx.has_cycle, "dfs_full complete");

    ctx.into_result()
}
