//! Output file locations
//!
//! Renders land under `{render_dir}` and exports under `{data_dir}`. When the
//! run is seeded from one project, its permalink becomes a subdirectory so
//! runs for different projects do not overwrite each other.

use crate::primitives::GraphMode;
use std::path::{Path, PathBuf};

const GRAPH_FILE_SUFFIX: &str = "dependency-graph";
const EXPORT_FILE_STEM: &str = "project-dependency";

/// Where one run writes its files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    render_dir: PathBuf,
    data_dir: PathBuf,
}

impl OutputLayout {
    pub fn new(render_dir: &Path, data_dir: &Path, seed: Option<&str>) -> Self {
        Self {
            render_dir: scoped(render_dir, seed),
            data_dir: scoped(data_dir, seed),
        }
    }

    /// Base path for the graph, without extension
    pub fn graph_base(&self, mode: GraphMode) -> PathBuf {
        self.render_dir
            .join(format!("{}-{}", mode.as_str(), GRAPH_FILE_SUFFIX))
    }

    pub fn json_path(&self) -> PathBuf {
        self.data_dir.join(EXPORT_FILE_STEM).with_extension("json")
    }

    pub fn plain_text_path(&self) -> PathBuf {
        self.data_dir.join(EXPORT_FILE_STEM).with_extension("txt")
    }
}

fn scoped(dir: &Path, seed: Option<&str>) -> PathBuf {
    match seed {
        Some(permalink) => dir.join(sanitize_component(permalink)),
        None => dir.to_path_buf(),
    }
}

/// Keep a permalink from escaping its parent directory
fn sanitize_component(permalink: &str) -> String {
    permalink
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c => c,
        })
        .collect::<String>()
        .trim_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    include!("layout.test.rs");
}
