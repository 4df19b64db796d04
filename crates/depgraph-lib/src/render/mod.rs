//! # Render Module
//!
//! Turns a traversal result into files: DOT source always, PDF when
//! Graphviz is installed.
//!
//! ## Modules
//!
//! - [`dot`] - DOT builder and project graph serialization

pub mod dot;

pub use dot::{DotBuilder, render_dot};

use crate::catalogue::ProjectGraph;
use crate::platform::{GraphvizCapabilities, ProgramInfo, write_with_parents};
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;
use tracing::{debug, warn};

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to run Graphviz: {source}")]
    GraphvizLaunch {
        #[from]
        source: std::io::Error,
    },

    #[error("Graphviz exited with {status}: {stderr}")]
    GraphvizFailed { status: String, stderr: String },
}

/// Render options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Convert the DOT file to PDF when Graphviz is available
    pub pdf: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { pdf: true }
    }
}

/// Files produced for one graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGraph {
    pub dot_path: PathBuf,
    pub pdf_path: Option<PathBuf>,
}

/// Writes project graphs to disk
pub struct GraphRenderer {
    options: RenderOptions,
    graphviz: Option<ProgramInfo>,
}

impl GraphRenderer {
    /// Create a renderer, probing for Graphviz only when PDF output is wanted
    pub fn new(options: RenderOptions) -> Self {
        let graphviz = if options.pdf {
            let info = GraphvizCapabilities::detect();
            if info.available {
                debug!(version = ?info.version, "Graphviz found");
                Some(info)
            } else {
                warn!("Graphviz 'dot' not found on PATH, writing DOT output only");
                None
            }
        } else {
            None
        };

        Self { options, graphviz }
    }

    /// Write `{base}.dot` and, if possible, `{base}.pdf`
    pub fn render(&self, graph: &ProjectGraph, base: &Path) -> Result<RenderedGraph, RenderError> {
        let dot_path = base.with_extension("dot");
        write_file(&dot_path, render_dot(graph).as_bytes())?;
        debug!(path = %dot_path.display(), nodes = graph.node_count(), edges = graph.edge_count(), "DOT written");

        let pdf_path = match &self.graphviz {
            Some(graphviz) if self.options.pdf => {
                let pdf_path = base.with_extension("pdf");
                convert_to_pdf(graphviz, &dot_path, &pdf_path)?;
                Some(pdf_path)
            }
            _ => None,
        };

        Ok(RenderedGraph { dot_path, pdf_path })
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), RenderError> {
    write_with_parents(path, contents).map_err(|source| RenderError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

fn convert_to_pdf(graphviz: &ProgramInfo, dot_path: &Path, pdf_path: &Path) -> Result<(), RenderError> {
    let program = graphviz.path.as_deref().unwrap_or(GraphvizCapabilities::PROGRAM);
    let output = Command::new(program)
        .arg("-Tpdf")
        .arg(dot_path)
        .arg("-o")
        .arg(pdf_path)
        .output()?;

    if !output.status.success() {
        return Err(RenderError::GraphvizFailed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
