//! Time localizer
//!
//! Applies a fixed whole-hour UTC offset. There is no timezone or DST
//! handling beyond that offset.

/// Largest offset magnitude accepted, in hours
pub const MAX_OFFSET_HOURS: i8 = 23;

/// Local wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl LocalTime {
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }
}

/// Validated UTC offset in whole hours (-23..=23)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UtcOffset(i8);

impl UtcOffset {
    pub const UTC: Self = Self(0);

    /// Create an offset, rejecting values beyond ±23 hours
    pub const fn from_hours(hours: i8) -> Option<Self> {
        if hours >= -MAX_OFFSET_HOURS && hours <= MAX_OFFSET_HOURS {
            Some(Self(hours))
        } else {
            None
        }
    }

    pub const fn hours(&self) -> i8 {
        self.0
    }
}

/// Shift a UTC time of day into local time
///
/// Hours wrap modulo 24 in both directions; minutes and seconds pass
/// through unchanged.
pub fn localize(utc_hours: u8, utc_minutes: u8, utc_seconds: u8, offset: i8) -> LocalTime {
    let hours = (utc_hours as i16 + offset as i16).rem_euclid(24) as u8;
    LocalTime::new(hours, utc_minutes, utc_seconds)
}
