//! Cross-platform program capability detection
//!
//! Locates external programs the renderer can hand work to. Graphviz is the
//! only one today.

use std::path::Path;
use std::process::Command;

/// Program detection result
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramInfo {
    /// Program name
    pub name: String,
    /// Whether the program is available
    pub available: bool,
    /// Program version if detectable
    pub version: Option<String>,
    /// Full path to program if found
    pub path: Option<String>,
}

/// Cross-platform program finder
pub struct ProgramFinder;

impl ProgramFinder {
    /// Check if a program exists and get basic info
    pub fn find(program: &str) -> ProgramInfo {
        let path = Self::find_program_path(program);
        let available = path.is_some();

        ProgramInfo {
            name: program.to_string(),
            available,
            version: None,
            path,
        }
    }

    /// Check if a program exists and attempt to get version
    pub fn find_with_version(program: &str, version_args: &[&str]) -> ProgramInfo {
        let mut info = Self::find(program);

        if info.available {
            info.version = Self::get_program_version(program, version_args);
        }

        info
    }

    fn find_program_path(program: &str) -> Option<String> {
        #[cfg(windows)]
        let lookup = "where";
        #[cfg(not(windows))]
        let lookup = "which";

        Command::new(lookup)
            .arg(program)
            .output()
            .ok()
            .filter(|output| output.status.success())
            .and_then(|output| {
                let stdout = String::from_utf8_lossy(&output.stdout);
                stdout
                    .lines()
                    .next()
                    .map(|line| line.trim().to_string())
                    .filter(|line| !line.is_empty())
            })
    }

    /// Version text from stdout, or stderr for tools that print it there
    fn get_program_version(program: &str, version_args: &[&str]) -> Option<String> {
        Command::new(program)
            .args(version_args)
            .output()
            .ok()
            .filter(|output| output.status.success())
            .and_then(|output| {
                let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                let text = if stdout.is_empty() {
                    String::from_utf8_lossy(&output.stderr).trim().to_string()
                } else {
                    stdout
                };
                if text.is_empty() { None } else { Some(text) }
            })
    }
}

/// Graphviz capability detector
pub struct GraphvizCapabilities;

impl GraphvizCapabilities {
    /// Program that converts DOT into PDF
    pub const PROGRAM: &'static str = "dot";

    /// Detect the Graphviz `dot` executable (`dot -V` reports on stderr)
    pub fn detect() -> ProgramInfo {
        ProgramFinder::find_with_version(Self::PROGRAM, &["-V"])
    }
}

/// Write `contents` to `path`, creating missing parent directories
pub fn write_with_parents(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
