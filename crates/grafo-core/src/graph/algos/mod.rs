//! Graph algorithms
//!
//! - BFS: level-order traversal and unweighted shortest paths
//! - DFS: depth-first traversal with edge classification and cycle detection
//! - Dijkstra: non-negative-weight shortest paths (single/multi source)
//! - Bellman-Ford: general-weight shortest paths with negative-cycle detection
//!
//! All algorithms take `&Graph` and return owned result structures;
//! none of them depend on each other.

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
