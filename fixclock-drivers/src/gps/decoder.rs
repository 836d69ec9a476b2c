//! NMEA 0183 decoder
//!
//! Buffers bytes into lines and hands every completed line to the `nmea`
//! parser. The parser's merged navigation state backs the decoder
//! capabilities. Fix quality comes from the GSA mode field, which the
//! merged state does not keep, so it is captured separately.

use chrono::{Datelike, Timelike};
use fixclock_core::traits::{
    Axis, Dms, FeedOutcome, FixQuality, GpsDate, GpsDecoder, SatellitesUsed, UtcTime,
};
use heapless::String;
use nmea::sentences::gsa::GsaMode2;
use nmea::{Nmea, ParseResult, SentenceType};

/// Longest line buffered; NMEA caps sentences at 82 characters
pub const MAX_SENTENCE_LEN: usize = 128;

/// Incremental decoder over the `nmea` crate
pub struct NmeaDecoder {
    nmea: Nmea,
    line: String<MAX_SENTENCE_LEN>,
    /// Current line outgrew the buffer and will be discarded
    overflow: bool,
    quality: FixQuality,
    /// A satellites-in-view sentence was seen
    saw_gsv: bool,
}

impl NmeaDecoder {
    pub fn new() -> Self {
        Self {
            nmea: Nmea::default(),
            line: String::new(),
            overflow: false,
            quality: FixQuality::NoFix,
            saw_gsv: false,
        }
    }

    /// Parse the buffered line and fold it into the navigation state
    fn complete_line(&mut self) -> FeedOutcome {
        let outcome = if self.overflow || self.line.is_empty() {
            FeedOutcome::Skipped
        } else {
            match self.nmea.parse(self.line.as_str()) {
                Ok(SentenceType::GSA) => {
                    if let Ok(ParseResult::GSA(gsa)) = nmea::parse_str(self.line.as_str()) {
                        self.quality = match gsa.mode2 {
                            GsaMode2::NoFix => FixQuality::NoFix,
                            GsaMode2::Fix2D => FixQuality::Fix2D,
                            GsaMode2::Fix3D => FixQuality::Fix3D,
                        };
                    }
                    FeedOutcome::Sentence
                }
                Ok(SentenceType::GSV) => {
                    self.saw_gsv = true;
                    FeedOutcome::Sentence
                }
                Ok(_) => FeedOutcome::Sentence,
                Err(_) => FeedOutcome::Skipped,
            }
        };

        self.line.clear();
        self.overflow = false;
        outcome
    }
}

impl Default for NmeaDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl GpsDecoder for NmeaDecoder {
    fn feed(&mut self, byte: u8) -> FeedOutcome {
        match byte {
            b'\n' => self.complete_line(),
            b'\r' => FeedOutcome::Pending,
            // Sentences are printable ASCII; anything else spoils the line
            b if !b.is_ascii() || b.is_ascii_control() => {
                self.overflow = true;
                FeedOutcome::Skipped
            }
            b => {
                if self.line.push(b as char).is_err() {
                    self.overflow = true;
                }
                FeedOutcome::Pending
            }
        }
    }

    fn fix_quality(&self) -> FixQuality {
        self.quality
    }

    fn utc_time(&self) -> Option<UtcTime> {
        self.nmea
            .fix_time
            .map(|t| UtcTime::new(t.hour() as u8, t.minute() as u8, t.second() as u8))
    }

    fn date(&self) -> Option<GpsDate> {
        self.nmea.fix_date.map(|d| {
            GpsDate::new(d.day() as u8, d.month() as u8, d.year().rem_euclid(100) as u8)
        })
    }

    fn latitude(&self) -> Option<Dms> {
        self.nmea
            .latitude
            .and_then(|lat| Dms::from_decimal(lat, Axis::Latitude))
    }

    fn longitude(&self) -> Option<Dms> {
        self.nmea
            .longitude
            .and_then(|lon| Dms::from_decimal(lon, Axis::Longitude))
    }

    fn altitude(&self) -> Option<f32> {
        self.nmea.altitude
    }

    fn satellites_in_view(&self) -> Option<u32> {
        self.saw_gsv.then(|| self.nmea.satellites().len() as u32)
    }

    fn satellites_used(&self) -> Option<SatellitesUsed> {
        match &self.nmea.fix_satellites_prns {
            Some(prns) => Some(SatellitesUsed::Listed(prns.len())),
            None => self.nmea.num_of_fix_satellites.map(SatellitesUsed::Count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GGA: &str = "$GPGGA,143000.00,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*62\r\n";
    const GSA_3D: &str = "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39\r\n";
    const GSA_2D: &str = "$GPGSA,A,2,04,05,,09,,,,,,,,,2.5,1.3,2.1*3D\r\n";
    const RMC: &str =
        "$GPRMC,143000.00,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*4F\r\n";
    const GGA_WEST: &str =
        "$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76\r\n";
    const GSV: &str =
        "$GPGSV,1,1,04,04,40,083,46,05,17,308,41,09,07,344,39,12,22,228,45*74\r\n";

    fn feed_str(decoder: &mut NmeaDecoder, text: &str) -> Vec<FeedOutcome> {
        text.bytes()
            .map(|b| decoder.feed(b))
            .filter(|o| *o != FeedOutcome::Pending)
            .collect()
    }

    #[test]
    fn test_nothing_reported_initially() {
        let decoder = NmeaDecoder::new();
        assert_eq!(decoder.fix_quality(), FixQuality::NoFix);
        assert_eq!(decoder.utc_time(), None);
        assert_eq!(decoder.date(), None);
        assert_eq!(decoder.latitude(), None);
        assert_eq!(decoder.satellites_in_view(), None);
        assert_eq!(decoder.satellites_used(), None);
    }

    #[test]
    fn test_gga_position_and_time() {
        let mut decoder = NmeaDecoder::new();
        assert_eq!(feed_str(&mut decoder, GGA), [FeedOutcome::Sentence]);

        assert_eq!(decoder.utc_time(), Some(UtcTime::new(14, 30, 0)));
        assert_eq!(decoder.latitude(), Some(Dms::new(48, 7, 2, 'N')));
        assert_eq!(decoder.longitude(), Some(Dms::new(11, 31, 0, 'E')));
        assert_eq!(decoder.altitude(), Some(545.4));
        assert_eq!(decoder.satellites_used(), Some(SatellitesUsed::Count(8)));
        // GGA carries no fix mode
        assert_eq!(decoder.fix_quality(), FixQuality::NoFix);
    }

    #[test]
    fn test_gsa_sets_quality_and_prns() {
        let mut decoder = NmeaDecoder::new();
        feed_str(&mut decoder, GSA_3D);
        assert_eq!(decoder.fix_quality(), FixQuality::Fix3D);
        assert_eq!(decoder.satellites_used(), Some(SatellitesUsed::Listed(5)));

        feed_str(&mut decoder, GSA_2D);
        assert_eq!(decoder.fix_quality(), FixQuality::Fix2D);
    }

    #[test]
    fn test_rmc_date() {
        let mut decoder = NmeaDecoder::new();
        feed_str(&mut decoder, RMC);
        assert_eq!(decoder.date(), Some(GpsDate::new(23, 3, 94)));
        assert_eq!(decoder.utc_time(), Some(UtcTime::new(14, 30, 0)));
    }

    #[test]
    fn test_full_epoch_stream() {
        let mut decoder = NmeaDecoder::new();
        let epoch = [RMC, GGA, GSA_3D, GSV].concat();
        assert_eq!(feed_str(&mut decoder, &epoch), [FeedOutcome::Sentence; 4]);

        assert_eq!(decoder.fix_quality(), FixQuality::Fix3D);
        assert_eq!(decoder.utc_time(), Some(UtcTime::new(14, 30, 0)));
        assert_eq!(decoder.date(), Some(GpsDate::new(23, 3, 94)));
        assert_eq!(decoder.latitude(), Some(Dms::new(48, 7, 2, 'N')));
        assert_eq!(decoder.satellites_used(), Some(SatellitesUsed::Listed(5)));
        assert!(decoder.satellites_in_view().is_some());
    }

    #[test]
    fn test_western_longitude() {
        let mut decoder = NmeaDecoder::new();
        feed_str(&mut decoder, GGA_WEST);
        assert_eq!(decoder.utc_time(), Some(UtcTime::new(9, 27, 50)));
        assert_eq!(decoder.longitude(), Some(Dms::new(6, 30, 20, 'W')));
        assert_eq!(decoder.latitude(), Some(Dms::new(53, 21, 41, 'N')));
    }

    #[test]
    fn test_bad_checksum_skipped() {
        let mut decoder = NmeaDecoder::new();
        let corrupted = GGA.replace("*62", "*00");
        assert_eq!(feed_str(&mut decoder, &corrupted), [FeedOutcome::Skipped]);
        assert_eq!(decoder.utc_time(), None);

        // The next good sentence still decodes
        assert_eq!(feed_str(&mut decoder, GGA), [FeedOutcome::Sentence]);
    }

    #[test]
    fn test_overlong_line_discarded() {
        let mut decoder = NmeaDecoder::new();
        let long = "X".repeat(MAX_SENTENCE_LEN + 10) + "\n";
        assert_eq!(feed_str(&mut decoder, &long), [FeedOutcome::Skipped]);
        assert_eq!(feed_str(&mut decoder, GSA_3D), [FeedOutcome::Sentence]);
        assert_eq!(decoder.fix_quality(), FixQuality::Fix3D);
    }

    #[test]
    fn test_split_across_chunks() {
        let mut decoder = NmeaDecoder::new();
        let (head, tail) = GSA_3D.split_at(17);
        assert!(feed_str(&mut decoder, head).is_empty());
        assert_eq!(feed_str(&mut decoder, tail), [FeedOutcome::Sentence]);
        assert_eq!(decoder.fix_quality(), FixQuality::Fix3D);
    }

    proptest! {
        #[test]
        fn prop_noise_then_sentence_decodes(
            bytes in proptest::collection::vec(any::<u8>(), 0..512)
        ) {
            let mut decoder = NmeaDecoder::new();
            for b in bytes {
                decoder.feed(b);
            }
            prop_assert!(decoder.line.len() <= MAX_SENTENCE_LEN);

            // A line break resynchronizes the decoder
            feed_str(&mut decoder, "\n");
            prop_assert_eq!(feed_str(&mut decoder, GSA_3D), vec![FeedOutcome::Sentence]);
            prop_assert_eq!(decoder.fix_quality(), FixQuality::Fix3D);
        }
    }
}
