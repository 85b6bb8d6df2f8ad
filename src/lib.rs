#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
pub mod config;
#[cfg(feature = "std")]
pub mod driver;
#[cfg(feature = "std")]
mod logging;
pub mod patterns;
pub mod prelude;
mod rule;
mod seed;
mod sink;
mod table;
pub mod window;

pub use board::{Board, LiveCells};
pub use common::LifeError;
pub use config::{DEFAULT_HEIGHT, DEFAULT_MAX_BOARDS, DEFAULT_WIDTH, PAGE_ROWS};
#[cfg(feature = "std")]
pub use driver::{RunStats, Simulation};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use patterns::{pattern_by_name, Pattern, PATTERNS};
pub use rule::Rule;
pub use seed::{Randomized, SeedSource, Zeroed};
pub use sink::{Frame, PixelSink};
#[cfg(feature = "std")]
pub use sink::TextSink;
pub use table::{BoardId, BoardTable};
