//! Weighted adjacency-list graph and the algorithms that run over it
//!
//! The graph is built incrementally by the dataset loader and then
//! treated as read-only: every algorithm borrows the graph and returns
//! owned result maps.

pub mod algos;

use std::collections::HashMap;

pub use algos::bellman_ford::{
    bellman_ford, bellman_ford_path, bellman_ford_path_length, BellmanFordResult,
};
pub use algos::bfs::{bfs, bfs_path, BfsResult};
pub use algos::dfs::{dfs, dfs_full, DfsResult, EdgeKind};
pub use algos::dijkstra::{
    dijkstra_path, dijkstra_path_length, multi_source_dijkstra, single_source_dijkstra,
    DijkstraOptions, ShortestPaths,
};

/// A weighted multigraph stored as adjacency lists.
///
/// Nodes are opaque string identifiers. Undirected graphs store each
/// edge in both endpoint lists but count it once; directed graphs store
/// the forward entry only. Self-loops and parallel edges are permitted,
/// nothing is deduplicated.
#[derive(Debug, Clone)]
pub struct Graph {
    adj: HashMap<String, Vec<(String, f64)>>,
    // Node iteration follows insertion order, so repeated runs over the
    // same dataset visit components in the same sequence.
    order: Vec<String>,
    num_edges: usize,
    directed: bool,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Graph {
            adj: HashMap::new(),
            order: Vec::new(),
            num_edges: 0,
            directed,
        }
    }

    /// An undirected graph (edges are stored in both directions)
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// A directed graph
    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add a node if absent. Idempotent.
    pub fn add_node(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.adj.contains_key(&id) {
            self.order.push(id.clone());
            self.adj.insert(id, Vec::new());
        }
    }

    /// Add a weighted edge, implicitly creating missing endpoints.
    ///
    /// Undirected graphs get the reverse entry as well; the edge count
    /// is incremented once either way.
    pub fn add_edge(&mut self, u: impl Into<String>, v: impl Into<String>, weight: f64) {
        let u = u.into();
        let v = v.into();
        self.add_node(u.clone());
        self.add_node(v.clone());

        if let Some(list) = self.adj.get_mut(&u) {
            list.push((v.clone(), weight));
        }
        if !self.directed {
            if let Some(list) = self.adj.get_mut(&v) {
                list.push((u, weight));
            }
        }
        self.num_edges += 1;
    }

    /// Adjacency list of a node in insertion order.
    ///
    /// Absent nodes yield an empty slice rather than an error.
    pub fn neighbors(&self, id: &str) -> &[(String, f64)] {
        self.adj.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// All node identifiers in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.num_edges
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adj.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_idempotent() {
        let mut g = Graph::undirected();
        g.add_node("A");
        g.add_node("A");
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert!(g.contains("A"));
        assert!(!g.contains("B"));
    }

    #[test]
    fn test_undirected_edge_stored_both_ways_counted_once() {
        let mut g = Graph::undirected();
        g.add_edge("A", "B", 2.5);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.neighbors("A"), &[("B".to_string(), 2.5)]);
        assert_eq!(g.neighbors("B"), &[("A".to_string(), 2.5)]);
    }

    #[test]
    fn test_directed_edge_stored_forward_only() {
        let mut g = Graph::directed();
        g.add_edge("A", "B", 1.0);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.neighbors("A").len(), 1);
        assert!(g.neighbors("B").is_empty());
    }

    #[test]
    fn test_multigraph_semantics() {
        let mut g = Graph::directed();
        g.add_edge("A", "B", 1.0);
        g.add_edge("A", "B", 3.0);
        g.add_edge("A", "A", 0.5);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors("A").len(), 3);
    }

    #[test]
    fn test_absent_node_has_no_neighbors() {
        let g = Graph::undirected();
        assert!(g.neighbors("nowhere").is_empty());
    }

    #[test]
    fn test_nodes_in_insertion_order() {
        let mut g = Graph::undirected();
        g.add_edge("C", "A", 1.0);
        g.add_node("B");
        let nodes: Vec<&str> = g.nodes().collect();
        assert_eq!(nodes, vec!["C", "A", "B"]);
    }
}
