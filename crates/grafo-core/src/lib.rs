//! Grafo Core Library
//!
//! Graph construction, traversal and shortest-path algorithms for the
//! grafo CLI.

pub mod config;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod logging;
pub mod metrics;
