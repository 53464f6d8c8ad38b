//! Run configuration for the submarine demo, loaded from optional JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flock_core::FlockConfig;
use serde::{Deserialize, Serialize};

/// Which neighbour search to run the flock with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinderKind {
    #[default]
    Sorted,
    Rtree,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub flock: FlockConfig,
    /// Ticks to run.  One tick is one rendered frame.
    pub ticks: u64,
    /// Rayon worker threads.  `None` lets Rayon pick.
    pub num_threads: Option<usize>,
    pub output_dir: PathBuf,
    pub finder: FinderKind,
    /// Log a progress line every N ticks (0 = never).
    pub log_interval_ticks: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            flock:              FlockConfig::default(),
            ticks:              600, // ten seconds at 60 fps
            num_threads:        None,
            output_dir:         PathBuf::from("output"),
            finder:             FinderKind::Sorted,
            log_interval_ticks: 60,
        }
    }
}

impl DemoConfig {
    /// Read `path` as JSON, or fall back to the defaults when no path is given.
    /// Missing fields take their default values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
