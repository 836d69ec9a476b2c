//! Hardware abstraction traits
//!
//! These traits define the interface between the pipeline and the
//! receiver, display and console implementations.

pub mod decoder;
pub mod notify;
pub mod panel;
pub mod segment;
pub mod serial;

pub use decoder::{
    Axis, Dms, FeedOutcome, FixQuality, GpsDate, GpsDecoder, SatellitesUsed, UtcTime,
};
pub use notify::{Notice, Notifier, Severity};
pub use panel::{
    Panel, PanelError, PanelField, Region, FIELD_COUNT, FIELD_HEIGHT, FIELD_WIDTH, FIELD_X,
};
pub use segment::{Glyph, SegmentDisplay, SegmentError, DIGIT_POSITIONS};
pub use serial::{SerialError, SerialSource, StopRequest};
