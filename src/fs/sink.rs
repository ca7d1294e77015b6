//! Destinations for generated source text.
//!
//! - [`FileSink`] writes to disk, creating parent directories as needed
//! - [`MemorySink`] keeps writes in memory, for tests

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// A destination that accepts one UTF-8 document per path.
pub trait OutputSink {
    /// Writes `contents` to `path`, replacing anything already there.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be written.
    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;
}

/// Writes files to the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl OutputSink for FileSink {
    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write resolver file: {}", path.display()))?;
        info!(path = %path.display(), bytes = contents.len(), "wrote resolver");
        Ok(())
    }
}

/// Records writes in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    /// Every write in order, as `(path, contents)`.
    pub writes: Vec<(PathBuf, String)>,
}

impl OutputSink for MemorySink {
    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.writes.push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}
