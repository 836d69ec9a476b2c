//! GPS decoder trait
//!
//! The decoder consumes the receiver's byte stream one byte at a time and
//! exposes whatever it has learned so far. Only `feed` and `fix_quality`
//! are mandatory; every other capability defaults to "not reported yet".

/// Satellite fix quality as reported by the receiver (GSA mode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FixQuality {
    /// No fix available
    #[default]
    NoFix,
    /// Horizontal position only
    Fix2D,
    /// Position and altitude (4+ satellites)
    Fix3D,
}

impl FixQuality {
    /// Map a receiver fix ordinal (1 = none, 2 = 2D, 3 = 3D)
    ///
    /// Anything at or above 3 counts as a 3D fix; 0 is treated as no fix.
    pub const fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            0 | 1 => FixQuality::NoFix,
            2 => FixQuality::Fix2D,
            _ => FixQuality::Fix3D,
        }
    }

    /// Check if this is a full 3D fix
    pub const fn is_3d(&self) -> bool {
        matches!(self, FixQuality::Fix3D)
    }
}

/// Result of feeding one byte to the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedOutcome {
    /// Byte buffered, sentence not complete yet
    Pending,
    /// Byte completed a sentence that was applied to the decoder state
    Sentence,
    /// Byte (or the sentence it completed) was discarded
    Skipped,
}

/// UTC time of day as reported by the receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UtcTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl UtcTime {
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Check that every component is within clock range
    pub const fn is_valid(&self) -> bool {
        self.hours < 24 && self.minutes < 60 && self.seconds < 60
    }
}

/// Calendar date with a two-digit year (century 2000 assumed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpsDate {
    pub day: u8,
    pub month: u8,
    /// Year within the century (0-99)
    pub year: u8,
}

impl GpsDate {
    pub const fn new(day: u8, month: u8, year: u8) -> Self {
        Self { day, month, year }
    }
}

/// Coordinate axis, used to pick hemisphere letters and degree range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest valid whole-degree value on this axis
    pub const fn max_degrees(&self) -> u16 {
        match self {
            Axis::Latitude => 90,
            Axis::Longitude => 180,
        }
    }

    /// Hemisphere letters as (positive, negative)
    pub const fn hemispheres(&self) -> (char, char) {
        match self {
            Axis::Latitude => ('N', 'S'),
            Axis::Longitude => ('E', 'W'),
        }
    }
}

/// Degree-minute-second coordinate with hemisphere letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: u8,
    pub hemisphere: char,
}

impl Dms {
    pub const fn new(degrees: u16, minutes: u8, seconds: u8, hemisphere: char) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        }
    }

    /// The all-zero coordinate on the positive hemisphere of `axis`
    pub const fn zero(axis: Axis) -> Self {
        Self::new(0, 0, 0, axis.hemispheres().0)
    }

    /// Convert signed decimal degrees, rounded to the nearest arc-second
    ///
    /// Returns `None` for non-finite input or values beyond the axis range.
    pub fn from_decimal(value: f64, axis: Axis) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let (positive, negative) = axis.hemispheres();
        let (magnitude, hemisphere) = if value < 0.0 {
            (-value, negative)
        } else {
            (value, positive)
        };

        if magnitude > axis.max_degrees() as f64 {
            return None;
        }

        // Rounding to whole arc-seconds carries into minutes and degrees
        let total_seconds = (magnitude * 3600.0 + 0.5) as u32;
        let degrees = (total_seconds / 3600) as u16;
        let minutes = ((total_seconds % 3600) / 60) as u8;
        let seconds = (total_seconds % 60) as u8;

        Some(Self::new(degrees, minutes, seconds, hemisphere))
    }

    /// Check ranges and hemisphere letter against `axis`
    pub fn is_valid_for(&self, axis: Axis) -> bool {
        let (positive, negative) = axis.hemispheres();
        self.degrees <= axis.max_degrees()
            && self.minutes < 60
            && self.seconds < 60
            && (self.hemisphere == positive || self.hemisphere == negative)
    }
}

/// Satellites used in the current solution
///
/// Some decoders report the list of satellite PRNs, others a bare count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SatellitesUsed {
    /// Length of the reported PRN collection
    Listed(usize),
    /// Raw count from a fix sentence
    Count(u32),
}

impl SatellitesUsed {
    pub fn count(&self) -> u32 {
        match *self {
            SatellitesUsed::Listed(len) => len as u32,
            SatellitesUsed::Count(n) => n,
        }
    }
}

/// Incremental GPS sentence decoder
pub trait GpsDecoder {
    /// Feed a single byte from the receiver
    fn feed(&mut self, byte: u8) -> FeedOutcome;

    /// Current fix quality
    fn fix_quality(&self) -> FixQuality;

    /// UTC time of the last fix, if any time sentence was received
    fn utc_time(&self) -> Option<UtcTime> {
        None
    }

    /// Date of the last fix
    fn date(&self) -> Option<GpsDate> {
        None
    }

    /// Latitude of the last fix
    fn latitude(&self) -> Option<Dms> {
        None
    }

    /// Longitude of the last fix
    fn longitude(&self) -> Option<Dms> {
        None
    }

    /// Altitude above mean sea level in meters
    fn altitude(&self) -> Option<f32> {
        None
    }

    /// Number of satellites in view
    fn satellites_in_view(&self) -> Option<u32> {
        None
    }

    /// Satellites used in the solution
    fn satellites_used(&self) -> Option<SatellitesUsed> {
        None
    }
}
