//! Semantic styling on top of `console`

use console::{Style, StyledObject};

/// Style manager honoring the resolved color decision
pub struct StyleManager {
    color: bool,
}

impl StyleManager {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Whether ANSI styling is emitted
    pub fn color_enabled(&self) -> bool {
        self.color
    }

    fn paint<'a>(&self, style: Style, text: &'a str) -> StyledObject<&'a str> {
        style.force_styling(self.color).apply_to(text)
    }

    pub fn style_success(&self, text: &str) -> String {
        self.paint(Style::new().green(), text).to_string()
    }

    pub fn style_error(&self, text: &str) -> String {
        self.paint(Style::new().red().bold(), text).to_string()
    }

    pub fn style_warning(&self, text: &str) -> String {
        self.paint(Style::new().yellow(), text).to_string()
    }

    pub fn style_info(&self, text: &str) -> String {
        self.paint(Style::new().cyan(), text).to_string()
    }

    pub fn style_subtle(&self, text: &str) -> String {
        self.paint(Style::new().dim(), text).to_string()
    }

    /// Format success message with symbol and styling
    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.style_success("✓"), message)
    }

    /// Format error message with symbol and styling
    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.style_error("✗"), message)
    }

    /// Format warning message with symbol and styling
    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.style_warning("!"), message)
    }

    /// Format info message with symbol and styling
    pub fn format_info(&self, message: &str) -> String {
        format!("{} {}", self.style_info("·"), message)
    }
}

#[cfg(test)]
mod tests {
    include!("styling.test.rs");
}
