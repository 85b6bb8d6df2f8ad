//! Commonly used types and utilities for ease of import.

pub use crate::{Board, BoardId, BoardTable, Frame, LifeError, PixelSink, Randomized, Rule, SeedSource, Zeroed};

#[cfg(feature = "std")]
pub use crate::{init_logging, RunStats, Simulation, TextSink};
