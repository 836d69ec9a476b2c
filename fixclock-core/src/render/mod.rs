//! Presentation values
//!
//! Turns decoder readings into the local clock time and the fixed-width
//! text fields the display sinks consume.

pub mod localize;
pub mod snapshot;

pub use localize::{localize, LocalTime, UtcOffset};
pub use snapshot::{FieldText, FixData, RenderSnapshot, FIELD_TEXT_LEN};
