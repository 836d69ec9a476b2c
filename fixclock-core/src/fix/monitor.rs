//! Fix state monitor
//!
//! `had_fix` is the only state carried between cycles. It is true iff the
//! most recently observed quality was a 3D fix, and it changes exactly once
//! per cycle, after all of the cycle's bytes were fed.

use crate::traits::{FeedOutcome, FixQuality, GpsDecoder, Notice, Notifier};

/// Crossing of the 3D fix boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FixTransition {
    Lost,
    Regained,
}

impl FixTransition {
    pub fn notice(&self) -> Notice {
        match self {
            FixTransition::Lost => Notice::FixLost,
            FixTransition::Regained => Notice::FixRegained,
        }
    }
}

/// Fix state carried across loop iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixState {
    had_fix: bool,
}

impl FixState {
    /// Start without a fix
    pub const fn new() -> Self {
        Self { had_fix: false }
    }

    pub const fn had_fix(&self) -> bool {
        self.had_fix
    }

    /// Apply a quality reading and return the boundary crossing, if any
    pub fn observe(&mut self, quality: FixQuality) -> Option<FixTransition> {
        match (self.had_fix, quality.is_3d()) {
            (true, false) => {
                self.had_fix = false;
                Some(FixTransition::Lost)
            }
            (false, true) => {
                self.had_fix = true;
                Some(FixTransition::Regained)
            }
            _ => None,
        }
    }
}

/// Byte accounting for one feed pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FeedStats {
    /// Bytes handed to the decoder
    pub fed: usize,
    /// Sentences completed and applied
    pub sentences: usize,
    /// Bytes (or completed sentences) the decoder discarded
    pub skipped: usize,
}

/// Result of one monitor update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixUpdate {
    /// New `had_fix` value
    pub had_fix: bool,
    /// Boundary crossing observed this cycle
    pub transition: Option<FixTransition>,
    pub feed: FeedStats,
    /// Quality read after feeding
    pub quality: FixQuality,
}

/// Feed every byte of `raw` into the decoder
///
/// A skipped byte never stops the remaining bytes from being fed.
pub fn feed_bytes<D: GpsDecoder>(decoder: &mut D, raw: &[u8]) -> FeedStats {
    let mut stats = FeedStats::default();

    for &byte in raw {
        stats.fed += 1;
        match decoder.feed(byte) {
            FeedOutcome::Pending => {}
            FeedOutcome::Sentence => stats.sentences += 1,
            FeedOutcome::Skipped => stats.skipped += 1,
        }
    }

    stats
}

/// Feed `raw`, read the fix quality and update `state`
///
/// Emits exactly one notice when the 3D boundary is crossed and none
/// otherwise. `FixUpdate::had_fix` is the updated fix flag.
pub fn update<D, N>(
    raw: &[u8],
    decoder: &mut D,
    state: &mut FixState,
    notifier: &mut N,
) -> FixUpdate
where
    D: GpsDecoder,
    N: Notifier,
{
    let feed = feed_bytes(decoder, raw);
    let quality = decoder.fix_quality();
    let transition = state.observe(quality);

    if let Some(transition) = transition {
        notifier.notify(transition.notice());
    }

    FixUpdate {
        had_fix: state.had_fix(),
        transition,
        feed,
        quality,
    }
}
