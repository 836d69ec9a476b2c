//! Panel sink
//!
//! Redraws a field only when its text changed since the last successful
//! write. Clearing and redrawing a text band is expensive on the panel, so
//! unchanged fields cost nothing.

use heapless::Vec;

use crate::render::{FieldText, RenderSnapshot};
use crate::traits::{Panel, PanelError, PanelField, FIELD_COUNT, FIELD_X};

/// What one render pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelReport {
    /// Fields cleared and redrawn
    pub drawn: u8,
    /// Fields skipped because their text was unchanged
    pub unchanged: u8,
    /// Fields whose redraw failed; their cache entry was left untouched
    pub failures: Vec<(PanelField, PanelError), FIELD_COUNT>,
}

/// Sink for the text panel
///
/// The panel may be absent (initialization failed); the sink is then a
/// no-op.
pub struct PanelSink<P> {
    panel: Option<P>,
    /// Last text written per field, `None` if never written
    cache: [Option<FieldText>; FIELD_COUNT],
}

impl<P: Panel> PanelSink<P> {
    pub fn new(panel: P) -> Self {
        Self::with_panel(Some(panel))
    }

    /// A sink with no panel behind it
    pub fn absent() -> Self {
        Self::with_panel(None)
    }

    pub fn with_panel(panel: Option<P>) -> Self {
        Self {
            panel,
            cache: Default::default(),
        }
    }

    pub fn is_present(&self) -> bool {
        self.panel.is_some()
    }

    /// Redraw every field whose text changed
    ///
    /// A failing field does not stop the remaining fields, and does not
    /// undo fields already written in this pass.
    pub fn render(&mut self, snapshot: &RenderSnapshot) -> PanelReport {
        let mut report = PanelReport::default();

        let Some(panel) = self.panel.as_mut() else {
            return report;
        };

        for field in PanelField::ALL {
            let text = snapshot.text(field);
            let cached = &mut self.cache[field.index()];

            if cached.as_deref() == Some(text) {
                report.unchanged += 1;
                continue;
            }

            match draw_field(panel, field, text) {
                Ok(()) => {
                    let mut stored = FieldText::new();
                    let _ = stored.push_str(text);
                    *cached = Some(stored);
                    report.drawn += 1;
                }
                Err(e) => {
                    let _ = report.failures.push((field, e));
                }
            }
        }

        report
    }

    pub fn panel(&self) -> Option<&P> {
        self.panel.as_ref()
    }
}

fn draw_field<P: Panel>(panel: &mut P, field: PanelField, text: &str) -> Result<(), PanelError> {
    panel.clear_region(field.region())?;
    panel.draw_text(FIELD_X, field.y(), text)
}
