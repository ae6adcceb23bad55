//! CLI argument parsing for grafo
//!
//! Global flags select the dataset (`--edges`, `--directed`,
//! `--membership`, `--config`) and the output format; subcommands pick
//! the analysis to run.

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Grafo - graph metrics CLI for neighborhood and route networks
#[derive(Parser, Debug)]
#[command(name = "grafo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge-list CSV (origin,destination,weight); overrides the config file
    #[arg(long, global = true)]
    pub edges: Option<PathBuf>,

    /// Treat edges as directed
    #[arg(long, global = true)]
    pub directed: bool,

    /// Wide region/node membership CSV
    #[arg(long, global = true)]
    pub membership: Option<PathBuf>,

    /// Project config file (default: ./grafo.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Order, size and density of the graph (and per-region subgraphs)
    Stats,

    /// Degree table and highest-degree node
    Degrees,

    /// Ego-subnetwork metrics for one node, or all nodes
    Ego {
        /// Node to analyze
        node: Option<String>,

        /// Analyze every node
        #[arg(long, conflicts_with = "node")]
        all: bool,
    },

    /// Breadth-first traversal or shortest unweighted path
    Bfs {
        /// Source node
        source: String,

        /// Report the path to this node instead of the full tree
        #[arg(long, short)]
        target: Option<String>,
    },

    /// Depth-first traversal with edge classification
    Dfs {
        /// Source node; omit to traverse every component
        source: Option<String>,
    },

    /// Dijkstra shortest paths (non-negative weights)
    Dijkstra {
        /// Source node
        source: String,

        /// Report only the path to this node
        #[arg(long, short)]
        target: Option<String>,

        /// Stop exploring past this total distance
        #[arg(long)]
        cutoff: Option<f64>,
    },

    /// Bellman-Ford shortest paths with negative-cycle detection
    BellmanFord {
        /// Source node
        source: String,

        /// Report only the path to this node
        #[arg(long, short)]
        target: Option<String>,
    },

    /// Run the full analysis battery and write report files
    Report {
        /// Output directory (default: config output_dir or ./out)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
