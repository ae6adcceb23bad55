//! Project configuration loaded from `grafo.toml`
//!
//! The config file is optional: every field can be supplied (or
//! overridden) by CLI flags. It mainly spares batch users from
//! repeating dataset paths on every invocation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GrafoError, Result};

const CONFIG_FILE: &str = "grafo.toml";

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectConfig {
    /// Edge-list CSV (origin, destination, weight)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<PathBuf>,

    /// Treat edges as directed (default: undirected)
    #[serde(default)]
    pub directed: bool,

    /// Wide region/node membership CSV (optional, used by stats/report)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<PathBuf>,

    /// Directory for report output files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl ProjectConfig {
    /// Load config from an explicit path, or from `grafo.toml` in the
    /// current directory. A missing implicit file yields the defaults;
    /// a missing explicit path is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                return Err(GrafoError::InvalidConfig {
                    path,
                    reason: "file does not exist".to_string(),
                });
            }
            return Ok(Self {
                output_dir: default_output_dir(),
                ..Self::default()
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| GrafoError::InvalidConfig {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| GrafoError::InvalidConfig {
            path,
            reason: e.to_string(),
        })
    }
}
