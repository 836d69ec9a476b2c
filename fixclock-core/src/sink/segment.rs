//! Segment sink
//!
//! The 4-digit display is cheap to rewrite, so the whole frame is derived
//! from the snapshot and committed on every cycle without diffing.

use crate::render::RenderSnapshot;
use crate::traits::{Glyph, SegmentDisplay, SegmentError, DIGIT_POSITIONS};

/// Content of one digit position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cell {
    Digit(u8),
    Glyph(Glyph),
}

/// Complete display state for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentFrame {
    pub cells: [Cell; DIGIT_POSITIONS],
    pub colon: bool,
}

impl SegmentFrame {
    /// Dashes on every position, colon off
    pub const fn no_fix() -> Self {
        Self {
            cells: [Cell::Glyph(Glyph::Dash); DIGIT_POSITIONS],
            colon: false,
        }
    }

    /// HH:MM with the colon lit on even seconds
    pub const fn time(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            cells: [
                Cell::Digit(hours / 10),
                Cell::Digit(hours % 10),
                Cell::Digit(minutes / 10),
                Cell::Digit(minutes % 10),
            ],
            colon: seconds % 2 == 0,
        }
    }

    pub fn for_snapshot(snapshot: &RenderSnapshot) -> Self {
        if snapshot.has_fix {
            Self::time(snapshot.hours, snapshot.minutes, snapshot.seconds)
        } else {
            Self::no_fix()
        }
    }
}

/// Sink for the LED clock display
pub struct SegmentSink<S> {
    display: S,
}

impl<S: SegmentDisplay> SegmentSink<S> {
    pub fn new(display: S) -> Self {
        Self { display }
    }

    /// Show the no-fix frame (used at boot, before the first cycle)
    pub fn show_no_fix(&mut self) -> Result<(), SegmentError> {
        self.apply(&SegmentFrame::no_fix())
    }

    /// Render a snapshot and return the committed frame
    pub fn render(&mut self, snapshot: &RenderSnapshot) -> Result<SegmentFrame, SegmentError> {
        let frame = SegmentFrame::for_snapshot(snapshot);
        self.apply(&frame)?;
        Ok(frame)
    }

    /// Write every position and the colon, then commit once
    pub fn apply(&mut self, frame: &SegmentFrame) -> Result<(), SegmentError> {
        for (position, cell) in frame.cells.iter().enumerate() {
            let position = position as u8;
            match *cell {
                Cell::Digit(digit) => self.display.set_digit(position, digit)?,
                Cell::Glyph(glyph) => self.display.set_glyph(position, glyph)?,
            }
        }
        self.display.set_colon(frame.colon)?;
        self.display.draw()
    }

    pub fn display(&self) -> &S {
        &self.display
    }
}
