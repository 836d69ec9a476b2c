//! Fixed-cadence poll loop
//!
//! Each iteration checks for an operator stop, drains whatever the serial
//! source has buffered, runs one instrument cycle and then waits for the
//! poll interval. Serial errors are reported and the cycle still runs, with
//! no new bytes.

use embedded_hal_async::delay::DelayNs;

use super::{CycleReport, Instrument};
use crate::traits::{GpsDecoder, Notice, Notifier, Panel, SegmentDisplay, SerialSource, StopRequest};

/// Default wait between cycles (milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 100;

/// Bytes drained from the serial source per cycle
pub const READ_CHUNK_SIZE: usize = 256;

/// Loop lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopState {
    Idle,
    Polling,
    Stopped,
}

pub struct PollLoop<D, S, P, N> {
    instrument: Instrument<D, S, P, N>,
    interval_ms: u32,
    state: LoopState,
    cycles: u32,
}

impl<D, S, P, N> PollLoop<D, S, P, N>
where
    D: GpsDecoder,
    S: SegmentDisplay,
    P: Panel,
    N: Notifier,
{
    pub fn new(instrument: Instrument<D, S, P, N>, interval_ms: u32) -> Self {
        Self {
            instrument,
            interval_ms,
            state: LoopState::Idle,
            cycles: 0,
        }
    }

    /// Poll until `stop` asks to end, returning the number of cycles run
    ///
    /// The stop request is checked at the top of every iteration, so an
    /// iteration that started always completes its cycle.
    pub async fn run<R, T, X>(&mut self, serial: &mut R, delay: &mut T, stop: &mut X) -> u32
    where
        R: SerialSource,
        T: DelayNs,
        X: StopRequest,
    {
        let mut buf = [0u8; READ_CHUNK_SIZE];
        self.state = LoopState::Polling;

        loop {
            if stop.requested() {
                self.state = LoopState::Stopped;
                self.instrument.notify(Notice::Stopped);
                return self.cycles;
            }

            self.poll_once(serial, &mut buf).await;
            delay.delay_ms(self.interval_ms).await;
        }
    }

    /// Read once from `serial` and run a single cycle over the result
    pub async fn poll_once<R: SerialSource>(
        &mut self,
        serial: &mut R,
        buf: &mut [u8],
    ) -> CycleReport {
        let len = match serial.read_available(buf).await {
            Ok(len) => len.min(buf.len()),
            Err(e) => {
                self.instrument.notify(Notice::SerialFailed(e));
                0
            }
        };

        let report = self.instrument.cycle(&buf[..len]);
        self.cycles = self.cycles.wrapping_add(1);
        report
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn instrument(&self) -> &Instrument<D, S, P, N> {
        &self.instrument
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{
        MockDecoder, RecordingDelay, RecordingNotifier, RecordingPanel, RecordingSegment,
        ScriptedSerial, StopAfter,
    };
    use crate::render::UtcOffset;
    use crate::sink::{PanelSink, SegmentSink};
    use crate::traits::SerialError;
    use embassy_futures::block_on;

    type TestLoop = PollLoop<MockDecoder, RecordingSegment, RecordingPanel, RecordingNotifier>;

    fn poll_loop() -> TestLoop {
        let instrument = Instrument::new(
            MockDecoder::new(),
            UtcOffset::UTC,
            SegmentSink::new(RecordingSegment::default()),
            PanelSink::new(RecordingPanel::default()),
            RecordingNotifier::default(),
        );
        PollLoop::new(instrument, DEFAULT_POLL_INTERVAL_MS)
    }

    #[test]
    fn test_runs_until_stop() {
        let mut poll = poll_loop();
        let mut serial = ScriptedSerial::default();
        let mut delay = RecordingDelay::default();
        let mut stop = StopAfter { remaining: 3 };

        assert_eq!(poll.state(), LoopState::Idle);
        let cycles = block_on(poll.run(&mut serial, &mut delay, &mut stop));

        assert_eq!(cycles, 3);
        assert_eq!(poll.state(), LoopState::Stopped);
        assert_eq!(delay.delays_ms, [100, 100, 100]);
        assert_eq!(poll.instrument().notifier().notices, [Notice::Stopped]);
    }

    #[test]
    fn test_stop_before_first_cycle() {
        let mut poll = poll_loop();
        let mut stop = StopAfter { remaining: 0 };

        let cycles = block_on(poll.run(
            &mut ScriptedSerial::default(),
            &mut RecordingDelay::default(),
            &mut stop,
        ));

        assert_eq!(cycles, 0);
        // Nothing was drawn
        assert!(poll.instrument().segment().display().calls.is_empty());
    }

    #[test]
    fn test_bytes_reach_decoder_in_order() {
        let mut poll = poll_loop();
        let mut serial = ScriptedSerial::default();
        serial.chunks.push_back(Ok(b"$GP".to_vec()));
        serial.chunks.push_back(Ok(b"GGA\n".to_vec()));
        let mut stop = StopAfter { remaining: 2 };

        let cycles = block_on(poll.run(&mut serial, &mut RecordingDelay::default(), &mut stop));

        assert_eq!(cycles, 2);
        assert_eq!(poll.instrument().decoder().fed, b"$GPGGA\n");
    }

    #[test]
    fn test_serial_error_still_cycles() {
        let mut poll = poll_loop();
        let mut serial = ScriptedSerial::default();
        serial.chunks.push_back(Err(SerialError::Overrun));
        serial.chunks.push_back(Ok(b"ab\n".to_vec()));

        let mut buf = [0u8; READ_CHUNK_SIZE];
        let first = block_on(poll.poll_once(&mut serial, &mut buf));
        let second = block_on(poll.poll_once(&mut serial, &mut buf));

        assert_eq!(first.fix.feed.fed, 0);
        assert_eq!(second.fix.feed.sentences, 1);
        assert_eq!(poll.cycles(), 2);
        assert_eq!(
            poll.instrument().notifier().notices,
            [Notice::SerialFailed(SerialError::Overrun)]
        );
        // The failed read still produced a frame
        let draws = poll
            .instrument()
            .segment()
            .display()
            .calls
            .iter()
            .filter(|c| **c == crate::mock::SegmentCall::Draw)
            .count();
        assert_eq!(draws, 2);
    }
}
