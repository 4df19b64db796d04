//! Status display for user feedback

use super::styling::StyleManager;

/// Status display manager for semantic user feedback
pub struct StatusDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> StatusDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    /// Display a success status with optional details
    ///
    /// Example: `status.success("Graph rendered", "renders/uses-dependency-graph.pdf")`
    /// Output: `✓ Graph rendered: renders/uses-dependency-graph.pdf`
    pub fn success(&self, item: &str, details: &str) {
        println!("{}", self.styling.format_success(&join(item, details)));
    }

    /// Display an error status with details
    pub fn error(&self, item: &str, details: &str) {
        eprintln!("{}", self.styling.format_error(&join(item, details)));
    }

    /// Display a warning status
    pub fn warning(&self, message: &str) {
        println!("{}", self.styling.format_warning(message));
    }

    /// Display an info status
    pub fn info(&self, message: &str) {
        println!("{}", self.styling.format_info(message));
    }

    /// Display a simple message without status symbols
    pub fn message(&self, text: &str) {
        println!("{}", text);
    }

    /// Display a subtle/secondary message
    pub fn subtle(&self, text: &str) {
        println!("{}", self.styling.style_subtle(text));
    }
}

fn join(item: &str, details: &str) -> String {
    if details.is_empty() {
        item.to_string()
    } else {
        format!("{}: {}", item, details)
    }
}

#[cfg(test)]
mod tests {
    include!("status.test.rs");
}
