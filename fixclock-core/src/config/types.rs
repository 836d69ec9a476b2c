//! Clock configuration types

use crate::render::UtcOffset;
use crate::scheduler::DEFAULT_POLL_INTERVAL_MS;

/// Poll interval bounds (milliseconds)
pub const MIN_POLL_INTERVAL_MS: u32 = 10;
pub const MAX_POLL_INTERVAL_MS: u32 = 10_000;

/// HT16K33 address range selectable with the A0-A2 jumpers
pub const SEGMENT_ADDRESS_MIN: u8 = 0x70;
pub const SEGMENT_ADDRESS_MAX: u8 = 0x77;

/// Highest HT16K33 dimming level
pub const MAX_BRIGHTNESS: u8 = 15;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// UTC offset outside -23..=23 hours
    UtcOffsetOutOfRange,
    /// Poll interval outside 10..=10000 ms
    PollIntervalOutOfRange,
    /// Baud rate of zero
    InvalidBaudrate,
    /// Segment address outside 0x70..=0x77
    SegmentAddressOutOfRange,
    /// Brightness above 15
    BrightnessOutOfRange,
    /// Bus frequency of zero
    InvalidFrequency,
    /// Panel width or height of zero
    InvalidPanelSize,
    /// Rotation above 3
    InvalidRotation,
}

/// GPS receiver UART settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpsConfig {
    pub baudrate: u32,
}

impl GpsConfig {
    pub const DEFAULT: Self = Self { baudrate: 9600 };
}

/// HT16K33 segment display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentConfig {
    /// 7-bit I2C address
    pub i2c_address: u8,
    /// I2C bus frequency in Hz
    pub i2c_frequency: u32,
    /// Dimming level, 0-15
    pub brightness: u8,
}

impl SegmentConfig {
    pub const DEFAULT: Self = Self {
        i2c_address: SEGMENT_ADDRESS_MIN,
        i2c_frequency: 400_000,
        brightness: MAX_BRIGHTNESS,
    };
}

/// ST7789 panel settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Skip panel bring-up entirely when false
    pub enabled: bool,
    /// SPI clock in Hz
    pub spi_frequency: u32,
    /// Native width in pixels (before rotation)
    pub width: u16,
    /// Native height in pixels (before rotation)
    pub height: u16,
    /// Quarter turns, 0-3
    pub rotation: u8,
}

impl PanelConfig {
    pub const DEFAULT: Self = Self {
        enabled: true,
        spi_frequency: 31_250_000,
        width: 240,
        height: 320,
        rotation: 1,
    };
}

/// Complete clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Static offset from UTC in whole hours
    pub utc_offset_hours: i8,
    /// Wait between poll cycles
    pub poll_interval_ms: u32,
    pub gps: GpsConfig,
    pub segment: SegmentConfig,
    pub panel: PanelConfig,
}

impl ClockConfig {
    pub const DEFAULT: Self = Self {
        utc_offset_hours: -5,
        poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        gps: GpsConfig::DEFAULT,
        segment: SegmentConfig::DEFAULT,
        panel: PanelConfig::DEFAULT,
    };

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.utc_offset()?;

        if !(MIN_POLL_INTERVAL_MS..=MAX_POLL_INTERVAL_MS).contains(&self.poll_interval_ms) {
            return Err(ConfigError::PollIntervalOutOfRange);
        }
        if self.gps.baudrate == 0 {
            return Err(ConfigError::InvalidBaudrate);
        }
        if !(SEGMENT_ADDRESS_MIN..=SEGMENT_ADDRESS_MAX).contains(&self.segment.i2c_address) {
            return Err(ConfigError::SegmentAddressOutOfRange);
        }
        if self.segment.brightness > MAX_BRIGHTNESS {
            return Err(ConfigError::BrightnessOutOfRange);
        }
        if self.segment.i2c_frequency == 0 || self.panel.spi_frequency == 0 {
            return Err(ConfigError::InvalidFrequency);
        }
        if self.panel.width == 0 || self.panel.height == 0 {
            return Err(ConfigError::InvalidPanelSize);
        }
        if self.panel.rotation > 3 {
            return Err(ConfigError::InvalidRotation);
        }

        Ok(())
    }

    /// The configured offset as a validated `UtcOffset`
    pub fn utc_offset(&self) -> Result<UtcOffset, ConfigError> {
        UtcOffset::from_hours(self.utc_offset_hours).ok_or(ConfigError::UtcOffsetOutOfRange)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
