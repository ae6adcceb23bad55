//! CLI commands for grafo

pub mod bellman_ford;
pub mod bfs;
pub mod degrees;
pub mod dfs;
pub mod dijkstra;
pub mod dispatch;
pub mod ego;
pub mod helpers;
pub mod report;
pub mod stats;
