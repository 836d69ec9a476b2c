//! Notification trait for human-readable status messages

use super::{PanelError, PanelField, SegmentError, SerialError};

/// How important a notice is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Messages produced by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notice {
    /// 3D fix lost since the previous cycle
    FixLost,
    /// 3D fix acquired since the previous cycle
    FixRegained,
    /// Drawing one panel field failed
    PanelFieldFailed { field: PanelField, error: PanelError },
    /// Segment display commit failed
    SegmentFailed(SegmentError),
    /// Serial read failed, the cycle ran with no new bytes
    SerialFailed(SerialError),
    /// Poll loop ended by operator request
    Stopped,
}

impl Notice {
    pub fn severity(&self) -> Severity {
        match self {
            Notice::FixLost => Severity::Warning,
            Notice::FixRegained | Notice::Stopped => Severity::Info,
            Notice::SerialFailed(_) => Severity::Warning,
            Notice::PanelFieldFailed { .. } | Notice::SegmentFailed(_) => Severity::Error,
        }
    }

    /// Console text for this notice
    pub fn message(&self) -> &'static str {
        match self {
            Notice::FixLost => "ALERT: 3D Fix Lost! Time may drift.",
            Notice::FixRegained => "SUCCESS: 3D Fix Regained.",
            Notice::PanelFieldFailed { .. } => "[ERROR] LCD update failed",
            Notice::SegmentFailed(_) => "[ERROR] Segment display update failed",
            Notice::SerialFailed(_) => "[WARN] GPS UART read failed",
            Notice::Stopped => "[INFO] Program terminated by user",
        }
    }
}

/// Fire-and-forget sink for notices (console, log, test recorder)
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}
