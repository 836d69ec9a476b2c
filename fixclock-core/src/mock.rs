//! Test doubles for the trait boundaries

use crate::render::{FixData, LocalTime, RenderSnapshot};
use crate::traits::{
    Dms, FeedOutcome, FixQuality, Glyph, GpsDate, GpsDecoder, Notice, Notifier, Panel,
    PanelError, Region, SatellitesUsed, SegmentDisplay, SegmentError, SerialError, SerialSource,
    StopRequest, UtcTime,
};

/// Snapshot with default text fields and the given clock values
pub fn snapshot_at(has_fix: bool, hours: u8, minutes: u8, seconds: u8) -> RenderSnapshot {
    RenderSnapshot::build(
        &FixData::default(),
        has_fix,
        LocalTime::new(hours, minutes, seconds),
    )
}

/// Decoder whose state is set directly by the test
///
/// `!` is rejected, `\n` completes a sentence, anything else is buffered.
#[derive(Default)]
pub struct MockDecoder {
    pub quality: FixQuality,
    pub fed: Vec<u8>,
    pub utc_time: Option<UtcTime>,
    pub date: Option<GpsDate>,
    pub latitude: Option<Dms>,
    pub longitude: Option<Dms>,
    pub altitude: Option<f32>,
    pub satellites_in_view: Option<u32>,
    pub satellites_used: Option<SatellitesUsed>,
}

impl MockDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_quality(&mut self, quality: FixQuality) {
        self.quality = quality;
    }
}

impl GpsDecoder for MockDecoder {
    fn feed(&mut self, byte: u8) -> FeedOutcome {
        self.fed.push(byte);
        match byte {
            b'!' => FeedOutcome::Skipped,
            b'\n' => FeedOutcome::Sentence,
            _ => FeedOutcome::Pending,
        }
    }

    fn fix_quality(&self) -> FixQuality {
        self.quality
    }

    fn utc_time(&self) -> Option<UtcTime> {
        self.utc_time
    }

    fn date(&self) -> Option<GpsDate> {
        self.date
    }

    fn latitude(&self) -> Option<Dms> {
        self.latitude
    }

    fn longitude(&self) -> Option<Dms> {
        self.longitude
    }

    fn altitude(&self) -> Option<f32> {
        self.altitude
    }

    fn satellites_in_view(&self) -> Option<u32> {
        self.satellites_in_view
    }

    fn satellites_used(&self) -> Option<SatellitesUsed> {
        self.satellites_used
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentCall {
    Digit(u8, u8),
    Glyph(u8, Glyph),
    Colon(bool),
    Draw,
}

#[derive(Default)]
pub struct RecordingSegment {
    pub calls: Vec<SegmentCall>,
    pub fail_draw: bool,
}

impl SegmentDisplay for RecordingSegment {
    fn set_digit(&mut self, position: u8, digit: u8) -> Result<(), SegmentError> {
        self.calls.push(SegmentCall::Digit(position, digit));
        Ok(())
    }

    fn set_glyph(&mut self, position: u8, glyph: Glyph) -> Result<(), SegmentError> {
        self.calls.push(SegmentCall::Glyph(position, glyph));
        Ok(())
    }

    fn set_colon(&mut self, on: bool) -> Result<(), SegmentError> {
        self.calls.push(SegmentCall::Colon(on));
        Ok(())
    }

    fn draw(&mut self) -> Result<(), SegmentError> {
        if self.fail_draw {
            return Err(SegmentError::Bus);
        }
        self.calls.push(SegmentCall::Draw);
        Ok(())
    }
}

impl RecordingSegment {
    /// Digits and colon as shown after the last draw, e.g. "16:30"
    pub fn shown(&self) -> String {
        let mut cells = ['?'; 4];
        let mut colon = false;
        let mut shown = String::new();

        for call in &self.calls {
            match *call {
                SegmentCall::Digit(pos, d) => cells[pos as usize] = (b'0' + d) as char,
                SegmentCall::Glyph(pos, Glyph::Dash) => cells[pos as usize] = '-',
                SegmentCall::Colon(on) => colon = on,
                SegmentCall::Draw => {
                    shown = format!(
                        "{}{}{}{}{}",
                        cells[0],
                        cells[1],
                        if colon { ':' } else { ' ' },
                        cells[2],
                        cells[3]
                    );
                }
            }
        }

        shown
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCall {
    Clear(Region),
    Text(u16, u16, String),
}

#[derive(Default)]
pub struct RecordingPanel {
    pub calls: Vec<PanelCall>,
    /// Fail text draws whose top edge is at this y
    pub fail_text_at_y: Option<u16>,
}

impl Panel for RecordingPanel {
    fn clear_region(&mut self, region: Region) -> Result<(), PanelError> {
        self.calls.push(PanelCall::Clear(region));
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), PanelError> {
        if self.fail_text_at_y == Some(y) {
            return Err(PanelError::Communication);
        }
        self.calls.push(PanelCall::Text(x, y, text.into()));
        Ok(())
    }
}

/// Serial source that hands out one scripted chunk per read
#[derive(Default)]
pub struct ScriptedSerial {
    pub chunks: std::collections::VecDeque<Result<Vec<u8>, SerialError>>,
}

impl SerialSource for ScriptedSerial {
    async fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, SerialError> {
        match self.chunks.pop_front() {
            Some(Ok(chunk)) => {
                let n = chunk.len().min(buf.len());
                buf[..n].copy_from_slice(&chunk[..n]);
                Ok(n)
            }
            Some(Err(e)) => Err(e),
            None => Ok(0),
        }
    }
}

/// Requests a stop after `remaining` checks
pub struct StopAfter {
    pub remaining: usize,
}

impl StopRequest for StopAfter {
    fn requested(&mut self) -> bool {
        if self.remaining == 0 {
            true
        } else {
            self.remaining -= 1;
            false
        }
    }
}

/// Delay that records requested durations instead of waiting
#[derive(Default)]
pub struct RecordingDelay {
    pub delays_ns: Vec<u32>,
    pub delays_ms: Vec<u32>,
}

impl embedded_hal_async::delay::DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.delays_ns.push(ns);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}
