//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware build turns
//! `clock.toml` into a `const ClockConfig`.

pub mod types;

pub use types::*;
