use std::{fmt, io::Read, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// How a queue is built from its initial contents.
#[derive(Deserialize, Serialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildStrategy {
    /// Enqueue the elements one at a time, O(n log n).
    #[default]
    #[serde(rename = "sequential")]
    Sequential,

    /// Bottom-up heapify of the whole array, O(n).
    #[serde(rename = "heapify")]
    Heapify,
}

impl fmt::Display for BuildStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::Heapify => f.write_str("heapify"),
        }
    }
}

impl FromStr for BuildStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(s, true).map_err(|_| Error::UnknownBuildStrategy(s.to_owned()))
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct QueueConfig {
    /// Storage reserved up front, in elements.
    pub initial_capacity: usize,
    pub build: BuildStrategy,
}

impl QueueConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        debug!("loaded queue config {config:?}");
        Ok(config)
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut yaml = String::new();
        reader.read_to_string(&mut yaml)?;
        Self::from_yaml(&yaml)
    }
}
