//! Differential display sinks
//!
//! One sink per physical display. Each sink owns whatever state it needs
//! to decide what to write; nothing outside the sink can see it.

pub mod panel;
pub mod segment;

pub use panel::{PanelReport, PanelSink};
pub use segment::{Cell, SegmentFrame, SegmentSink};
