//! Fix state tracking
//!
//! Feeds receiver bytes into the decoder and reports 3D fix
//! acquisition and loss.

pub mod monitor;

pub use monitor::{feed_bytes, update, FeedStats, FixState, FixTransition, FixUpdate};
