//! Progress display for long-running operations
//!
//! Spinners are attached to `tracing` spans through `tracing-indicatif`, so
//! log lines printed while a spinner runs do not tear the terminal.

use super::styling::StyleManager;
use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

/// Progress display manager for long-running operations
pub struct ProgressDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> ProgressDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    /// Spinner style for operations with unknown duration
    pub fn spinner_style(&self) -> ProgressStyle {
        let template = if self.styling.color_enabled() {
            "{spinner:.green} {msg}"
        } else {
            "{spinner} {msg}"
        };

        ProgressStyle::with_template(template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
    }

    /// Attach a spinner with `message` to `span`
    ///
    /// The spinner is visible while the span is entered and clears when the
    /// span closes.
    pub fn spinner(&self, span: &Span, message: &str) {
        span.pb_set_style(&self.spinner_style());
        span.pb_set_message(message);
    }
}
