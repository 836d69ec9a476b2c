//! Cycle scheduler
//!
//! `Instrument` runs one read -> fix -> render -> sinks pass; `PollLoop`
//! repeats it at a fixed cadence until an operator stop.

pub mod cycle;
pub mod poll;

pub use cycle::{CycleReport, Instrument};
pub use poll::{LoopState, PollLoop, DEFAULT_POLL_INTERVAL_MS, READ_CHUNK_SIZE};
