//! Terminal display system
//!
//! User-facing status lines and progress spinners. Kept separate from
//! logging: `tracing` is for diagnostics, this module is for the person
//! running the command.

pub mod progress;
pub mod status;
pub mod styling;

pub use progress::ProgressDisplay;
pub use status::StatusDisplay;
pub use styling::StyleManager;

/// Display manager that hands out status and progress helpers
pub struct Display {
    styling: StyleManager,
}

impl Display {
    pub fn new(color: bool) -> Self {
        Self {
            styling: StyleManager::new(color),
        }
    }

    /// Status updates with semantic intent
    pub fn status(&self) -> StatusDisplay<'_> {
        StatusDisplay::new(&self.styling)
    }

    /// Progress tracking for long operations
    pub fn progress(&self) -> ProgressDisplay<'_> {
        ProgressDisplay::new(&self.styling)
    }
}
