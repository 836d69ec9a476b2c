//! Single pipeline cycle
//!
//! Order is fixed: fix state update, then localization and snapshot
//! building, then the segment sink, then the panel sink. Sink failures are
//! reported through the notifier and never end the cycle early.

use crate::fix::{self, FixState, FixUpdate};
use crate::render::{localize, FixData, RenderSnapshot, UtcOffset};
use crate::sink::{PanelReport, PanelSink, SegmentFrame, SegmentSink};
use crate::traits::{GpsDecoder, Notice, Notifier, Panel, SegmentDisplay, SegmentError};

/// Outcome of one cycle
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    pub fix: FixUpdate,
    pub snapshot: RenderSnapshot,
    pub segment: Result<SegmentFrame, SegmentError>,
    pub panel: PanelReport,
}

/// The complete instrument: decoder, fix state, both sinks and the
/// notification channel
pub struct Instrument<D, S, P, N> {
    decoder: D,
    fix: FixState,
    offset: UtcOffset,
    segment: SegmentSink<S>,
    panel: PanelSink<P>,
    notifier: N,
}

impl<D, S, P, N> Instrument<D, S, P, N>
where
    D: GpsDecoder,
    S: SegmentDisplay,
    P: Panel,
    N: Notifier,
{
    pub fn new(
        decoder: D,
        offset: UtcOffset,
        segment: SegmentSink<S>,
        panel: PanelSink<P>,
        notifier: N,
    ) -> Self {
        Self {
            decoder,
            fix: FixState::new(),
            offset,
            segment,
            panel,
            notifier,
        }
    }

    /// Run one cycle over the bytes read since the previous one
    pub fn cycle(&mut self, raw: &[u8]) -> CycleReport {
        let fix = fix::update(raw, &mut self.decoder, &mut self.fix, &mut self.notifier);

        let data = FixData::read(&self.decoder);
        let utc = data.utc_time_or_midnight();
        let local = localize(utc.hours, utc.minutes, utc.seconds, self.offset.hours());
        let snapshot = RenderSnapshot::build(&data, fix.had_fix, local);

        let segment = self.segment.render(&snapshot);
        if let Err(e) = segment {
            self.notifier.notify(Notice::SegmentFailed(e));
        }

        let panel = self.panel.render(&snapshot);
        for &(field, error) in panel.failures.iter() {
            self.notifier.notify(Notice::PanelFieldFailed { field, error });
        }

        CycleReport {
            fix,
            snapshot,
            segment,
            panel,
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notifier.notify(notice);
    }

    pub fn fix_state(&self) -> FixState {
        self.fix
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    pub fn decoder_mut(&mut self) -> &mut D {
        &mut self.decoder
    }

    pub fn segment(&self) -> &SegmentSink<S> {
        &self.segment
    }

    pub fn panel(&self) -> &PanelSink<P> {
        &self.panel
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
