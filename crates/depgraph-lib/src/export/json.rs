//! JSON export of project views.

use super::{ExportError, write_file};
use crate::catalogue::ProjectView;
use std::path::Path;
use tracing::debug;

/// Write `views` as a pretty-printed JSON array to `path`
pub fn write_json(path: &Path, views: &[ProjectView]) -> Result<(), ExportError> {
    let body = serde_json::to_string_pretty(views)?;
    write_file(path, body.as_bytes())?;
    debug!(path = %path.display(), projects = views.len(), "JSON export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("json.test.rs");
}
