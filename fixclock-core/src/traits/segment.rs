//! Segment display trait for the 4-digit LED clock display

/// Number of digit positions on the display
pub const DIGIT_POSITIONS: usize = 4;

/// Errors that can occur when driving the segment display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SegmentError {
    /// Bus write failed
    Bus,
    /// Position outside 0..DIGIT_POSITIONS
    InvalidPosition,
    /// Digit value above 9
    InvalidDigit,
}

/// Non-digit glyphs the display can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// Center segment only, used while there is no fix
    Dash,
}

/// Trait for a buffered 4-digit segment display
///
/// `set_*` calls only modify the display buffer; `draw` commits the whole
/// buffer to the device in one transfer.
pub trait SegmentDisplay {
    /// Show a decimal digit (0-9) at a position
    fn set_digit(&mut self, position: u8, digit: u8) -> Result<(), SegmentError>;

    /// Show a glyph at a position
    fn set_glyph(&mut self, position: u8, glyph: Glyph) -> Result<(), SegmentError>;

    /// Turn the center colon on or off
    fn set_colon(&mut self, on: bool) -> Result<(), SegmentError>;

    /// Commit the buffer to the device
    fn draw(&mut self) -> Result<(), SegmentError>;
}
