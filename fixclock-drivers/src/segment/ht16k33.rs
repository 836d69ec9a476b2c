//! HT16K33 4-digit 7-segment backpack
//!
//! Driver for the common "0.56 inch" I2C backpack. The controller holds 16
//! bytes of display RAM; the four digits sit in rows 0, 1, 3 and 4 and the
//! center colon in row 2. Writes go to a local buffer and reach the chip
//! only on `draw`.

use embedded_hal::i2c::I2c;
use fixclock_core::traits::{Glyph, SegmentDisplay, SegmentError, DIGIT_POSITIONS};

/// HT16K33 I2C address with no address jumpers set
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// Display RAM size in bytes
const RAM_SIZE: usize = 16;

/// RAM byte for each digit position
const DIGIT_OFFSETS: [usize; DIGIT_POSITIONS] = [0, 2, 6, 8];

/// RAM byte and bit of the center colon
const COLON_OFFSET: usize = 4;
const COLON_BIT: u8 = 0x02;

/// HT16K33 commands
mod cmd {
    pub const OSCILLATOR_ON: u8 = 0x21;
    pub const DISPLAY_ON: u8 = 0x81;
    pub const DIMMING: u8 = 0xE0;
    pub const RAM_START: u8 = 0x00;
}

/// Segment patterns for 0-9 (bit 0 = segment a ... bit 6 = segment g)
const DIGIT_SEGMENTS: [u8; 10] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F,
];

/// Middle segment only
const DASH_SEGMENTS: u8 = 0x40;

fn glyph_segments(glyph: Glyph) -> u8 {
    match glyph {
        Glyph::Dash => DASH_SEGMENTS,
    }
}

/// HT16K33 segment display driver
pub struct Ht16k33<I2C> {
    i2c: I2C,
    address: u8,
    buffer: [u8; RAM_SIZE],
}

impl<I2C: I2c> Ht16k33<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: [0; RAM_SIZE],
        }
    }

    /// Start the oscillator, enable the display (no blink) and set brightness
    pub fn init(&mut self, brightness: u8) -> Result<(), I2C::Error> {
        self.command(cmd::OSCILLATOR_ON)?;
        self.command(cmd::DISPLAY_ON)?;
        self.set_brightness(brightness)
    }

    /// Set the dimming level (0-15, larger values are clamped)
    pub fn set_brightness(&mut self, level: u8) -> Result<(), I2C::Error> {
        self.command(cmd::DIMMING | level.min(15))
    }

    /// Clear the local buffer (takes effect on the next draw)
    pub fn clear(&mut self) {
        self.buffer = [0; RAM_SIZE];
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn command(&mut self, command: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[command])
    }

    fn offset(position: u8) -> Result<usize, SegmentError> {
        DIGIT_OFFSETS
            .get(position as usize)
            .copied()
            .ok_or(SegmentError::InvalidPosition)
    }
}

impl<I2C: I2c> SegmentDisplay for Ht16k33<I2C> {
    fn set_digit(&mut self, position: u8, digit: u8) -> Result<(), SegmentError> {
        let offset = Self::offset(position)?;
        let segments = DIGIT_SEGMENTS
            .get(digit as usize)
            .copied()
            .ok_or(SegmentError::InvalidDigit)?;
        self.buffer[offset] = segments;
        Ok(())
    }

    fn set_glyph(&mut self, position: u8, glyph: Glyph) -> Result<(), SegmentError> {
        let offset = Self::offset(position)?;
        self.buffer[offset] = glyph_segments(glyph);
        Ok(())
    }

    fn set_colon(&mut self, on: bool) -> Result<(), SegmentError> {
        self.buffer[COLON_OFFSET] = if on { COLON_BIT } else { 0 };
        Ok(())
    }

    fn draw(&mut self) -> Result<(), SegmentError> {
        let mut frame = [0u8; RAM_SIZE + 1];
        frame[0] = cmd::RAM_START;
        frame[1..].copy_from_slice(&self.buffer);
        self.i2c
            .write(self.address, &frame)
            .map_err(|_| SegmentError::Bus)
    }
}
