//! Treedist Core Library
//!
//! Graph construction, path finding and per-node distance aggregation over
//! trees given as flat edge lists.

pub mod config;
pub mod distance;
pub mod error;
pub mod format;
pub mod graph;
pub mod input;
pub mod logging;
pub mod sequences;

pub use distance::{compute, sum_distances, DistanceOptions, DistanceReport};
pub use error::{Result, TreedistError};
pub use graph::{Edge, Graph, NodeId, Strategy};
pub use input::TreeInput;
