//! # Export Module
//!
//! Writes the filtered catalogue to disk for downstream tooling.
//!
//! ## Modules
//!
//! - [`json`] - Pretty-printed JSON of the joined project views
//! - [`plain_text`] - One English sentence per project and relation

pub mod json;
pub mod plain_text;

pub use json::write_json;
pub use plain_text::{PlainTextWriter, sanitize_description};

use crate::catalogue::ProjectView;
use crate::platform::write_with_parents;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Template rendering failed: {source}")]
    TemplateError {
        #[from]
        source: handlebars::RenderError,
    },
}

/// Order projects by weighting, highest first
///
/// Stable: projects with equal weighting keep their catalogue order.
pub fn sort_by_weighting(views: &mut [ProjectView]) {
    views.sort_by(|a, b| b.weighting.cmp(&a.weighting));
}

pub(crate) fn write_file(path: &Path, contents: &[u8]) -> Result<(), ExportError> {
    write_with_parents(path, contents).map_err(|source| ExportError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
