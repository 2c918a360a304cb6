//! A priority queue backed by a binary min-heap with a caller supplied
//! ordering rule.
//!
//! The queue is single-owner and not synchronized; share it across threads
//! by wrapping it in a `Mutex`.

mod comparator;
mod config;
mod iter;
mod queue;
mod sift;

pub use comparator::{Comparator, NaturalOrder, Reversed};
pub use config::{BuildStrategy, QueueConfig};
pub use iter::SortedIter;
pub use queue::PriorityQueue;

/// The errors that may occur while configuring a queue.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configuration could not be parsed.
    #[error("invalid queue configuration: {0}")]
    Config(#[from] serde_yaml::Error),
    /// The configuration could not be read.
    #[error("failed to read queue configuration: {0}")]
    Io(#[from] std::io::Error),
    /// The build strategy name is not known.
    #[error("unknown build strategy: {0}")]
    UnknownBuildStrategy(String),
}

pub type Result<T> = std::result::Result<T, Error>;
