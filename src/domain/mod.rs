mod cell;
mod coord;
mod live_set;
mod algorithm;
pub mod engine;

pub use cell::Cell;
pub use coord::{Coordinate, MOORE_OFFSETS};
pub use live_set::LiveSet;
pub use algorithm::Algorithm;
pub use engine::{advance, advance_tallied, count_live_neighbors};
