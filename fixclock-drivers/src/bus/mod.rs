//! Bus utilities

pub mod scan;

pub use scan::{scan, FIRST_ADDRESS, LAST_ADDRESS};
