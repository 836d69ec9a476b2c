//! Render value builder
//!
//! Builds the per-cycle `RenderSnapshot`. Every field the decoder has not
//! reported yet, or reported with an impossible value, is replaced by its
//! default so that something is rendered on every cycle.

use core::fmt::Write;

use heapless::String;

use super::LocalTime;
use crate::traits::PanelField;
use crate::traits::{Axis, Dms, GpsDate, GpsDecoder, SatellitesUsed, UtcTime};

/// Capacity of a formatted text field
pub const FIELD_TEXT_LEN: usize = 32;

/// A formatted, fixed-capacity panel field
pub type FieldText = String<FIELD_TEXT_LEN>;

/// Altitude range accepted as plausible (meters)
const MIN_ALTITUDE_M: f32 = -10_000.0;
const MAX_ALTITUDE_M: f32 = 1_000_000.0;

/// Decoder readings for one cycle
///
/// Each capability is read exactly once; `None` means the decoder has not
/// reported it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixData {
    pub utc_time: Option<UtcTime>,
    pub date: Option<GpsDate>,
    pub latitude: Option<Dms>,
    pub longitude: Option<Dms>,
    pub altitude_m: Option<f32>,
    pub satellites_in_view: Option<u32>,
    pub satellites_used: Option<SatellitesUsed>,
}

impl FixData {
    /// Read every capability from the decoder
    pub fn read<D: GpsDecoder>(decoder: &D) -> Self {
        Self {
            utc_time: decoder.utc_time(),
            date: decoder.date(),
            latitude: decoder.latitude(),
            longitude: decoder.longitude(),
            altitude_m: decoder.altitude(),
            satellites_in_view: decoder.satellites_in_view(),
            satellites_used: decoder.satellites_used(),
        }
    }

    /// UTC time, or midnight if missing or out of range
    pub fn utc_time_or_midnight(&self) -> UtcTime {
        self.utc_time
            .filter(UtcTime::is_valid)
            .unwrap_or_default()
    }

    fn date_or_default(&self) -> GpsDate {
        self.date
            .filter(|d| (1..=31).contains(&d.day) && (1..=12).contains(&d.month) && d.year <= 99)
            .unwrap_or_default()
    }

    fn coordinate_or_default(value: Option<Dms>, axis: Axis) -> Dms {
        value
            .filter(|dms| dms.is_valid_for(axis))
            .unwrap_or(Dms::zero(axis))
    }

    fn altitude_or_default(&self) -> f32 {
        self.altitude_m
            .filter(|alt| alt.is_finite() && (MIN_ALTITUDE_M..=MAX_ALTITUDE_M).contains(alt))
            .unwrap_or(0.0)
    }
}

/// Display-ready values for one cycle
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub date_text: FieldText,
    pub lat_text: FieldText,
    pub lon_text: FieldText,
    pub alt_text: FieldText,
    pub sats_text: FieldText,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub has_fix: bool,
}

impl RenderSnapshot {
    /// Format the decoder readings
    ///
    /// Pure: no I/O and no failure path.
    pub fn build(data: &FixData, has_fix: bool, local: LocalTime) -> Self {
        let date = data.date_or_default();
        let lat = FixData::coordinate_or_default(data.latitude, Axis::Latitude);
        let lon = FixData::coordinate_or_default(data.longitude, Axis::Longitude);
        let altitude = data.altitude_or_default();
        let in_view = data.satellites_in_view.unwrap_or(0);
        let used = data.satellites_used.map(|s| s.count()).unwrap_or(0);

        Self {
            date_text: format_field(format_args!(
                "Date: {:02}/{:02}/20{:02}",
                date.day, date.month, date.year
            )),
            lat_text: format_field(format_args!(
                "Lat: {:02}\u{b0}{:02}'{:02}\" {}",
                lat.degrees, lat.minutes, lat.seconds, lat.hemisphere
            )),
            lon_text: format_field(format_args!(
                "Lon: {:03}\u{b0}{:02}'{:02}\" {}",
                lon.degrees, lon.minutes, lon.seconds, lon.hemisphere
            )),
            alt_text: format_field(format_args!("Alt: {:.1}m", altitude)),
            sats_text: format_field(format_args!("Sats: {}/{}", used, in_view)),
            hours: local.hours,
            minutes: local.minutes,
            seconds: local.seconds,
            has_fix,
        }
    }

    /// Text for a panel field
    pub fn text(&self, field: PanelField) -> &str {
        match field {
            PanelField::Date => &self.date_text,
            PanelField::Latitude => &self.lat_text,
            PanelField::Longitude => &self.lon_text,
            PanelField::Altitude => &self.alt_text,
            PanelField::Satellites => &self.sats_text,
        }
    }
}

/// Format into a field, truncating silently on overflow
fn format_field(args: core::fmt::Arguments<'_>) -> FieldText {
    let mut text = FieldText::new();
    let _ = text.write_fmt(args);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> FixData {
        FixData {
            utc_time: Some(UtcTime::new(14, 30, 0)),
            date: Some(GpsDate::new(23, 3, 24)),
            latitude: Some(Dms::new(48, 7, 2, 'N')),
            longitude: Some(Dms::new(11, 31, 0, 'E')),
            altitude_m: Some(545.44),
            satellites_in_view: Some(11),
            satellites_used: Some(SatellitesUsed::Listed(8)),
        }
    }

    #[test]
    fn test_defaults_when_nothing_reported() {
        let snapshot = RenderSnapshot::build(&FixData::default(), false, LocalTime::default());

        assert_eq!(snapshot.date_text, "Date: 00/00/2000");
        assert_eq!(snapshot.lat_text, "Lat: 00\u{b0}00'00\" N");
        assert_eq!(snapshot.lon_text, "Lon: 000\u{b0}00'00\" E");
        assert_eq!(snapshot.alt_text, "Alt: 0.0m");
        assert_eq!(snapshot.sats_text, "Sats: 0/0");
        assert!(!snapshot.has_fix);
    }

    #[test]
    fn test_formats_populated_fields() {
        let snapshot = RenderSnapshot::build(&populated(), true, LocalTime::new(16, 30, 0));

        assert_eq!(snapshot.date_text, "Date: 23/03/2024");
        assert_eq!(snapshot.lat_text, "Lat: 48\u{b0}07'02\" N");
        assert_eq!(snapshot.lon_text, "Lon: 011\u{b0}31'00\" E");
        assert_eq!(snapshot.alt_text, "Alt: 545.4m");
        assert_eq!(snapshot.sats_text, "Sats: 8/11");
        assert_eq!((snapshot.hours, snapshot.minutes, snapshot.seconds), (16, 30, 0));
        assert!(snapshot.has_fix);
    }

    #[test]
    fn test_satellites_count_path() {
        let data = FixData {
            satellites_used: Some(SatellitesUsed::Count(5)),
            satellites_in_view: Some(12),
            ..FixData::default()
        };
        let snapshot = RenderSnapshot::build(&data, true, LocalTime::default());
        assert_eq!(snapshot.sats_text, "Sats: 5/12");
    }

    #[test]
    fn test_malformed_values_use_defaults() {
        let data = FixData {
            utc_time: Some(UtcTime::new(25, 0, 0)),
            date: Some(GpsDate::new(12, 13, 24)),
            latitude: Some(Dms::new(48, 75, 0, 'N')),
            longitude: Some(Dms::new(11, 0, 0, 'N')),
            altitude_m: Some(f32::NAN),
            ..populated()
        };
        let snapshot = RenderSnapshot::build(&data, true, LocalTime::default());

        assert_eq!(snapshot.date_text, "Date: 00/00/2000");
        assert_eq!(snapshot.lat_text, "Lat: 00\u{b0}00'00\" N");
        assert_eq!(snapshot.lon_text, "Lon: 000\u{b0}00'00\" E");
        assert_eq!(snapshot.alt_text, "Alt: 0.0m");
        assert_eq!(data.utc_time_or_midnight(), UtcTime::new(0, 0, 0));
    }

    #[test]
    fn test_extreme_altitude_rejected() {
        let data = FixData {
            altitude_m: Some(3.0e38),
            ..FixData::default()
        };
        let snapshot = RenderSnapshot::build(&data, false, LocalTime::default());
        assert_eq!(snapshot.alt_text, "Alt: 0.0m");

        let data = FixData {
            altitude_m: Some(-12.3),
            ..FixData::default()
        };
        let snapshot = RenderSnapshot::build(&data, false, LocalTime::default());
        assert_eq!(snapshot.alt_text, "Alt: -12.3m");
    }

    #[test]
    fn test_southern_western_hemispheres() {
        let data = FixData {
            latitude: Some(Dms::new(33, 52, 4, 'S')),
            longitude: Some(Dms::new(151, 12, 36, 'E')),
            ..FixData::default()
        };
        let snapshot = RenderSnapshot::build(&data, true, LocalTime::default());
        assert_eq!(snapshot.lat_text, "Lat: 33\u{b0}52'04\" S");
        assert_eq!(snapshot.lon_text, "Lon: 151\u{b0}12'36\" E");
    }

    #[test]
    fn test_text_lookup_by_field() {
        let snapshot = RenderSnapshot::build(&populated(), true, LocalTime::default());
        assert_eq!(snapshot.text(PanelField::Date), snapshot.date_text.as_str());
        assert_eq!(snapshot.text(PanelField::Satellites), "Sats: 8/11");
    }
}
