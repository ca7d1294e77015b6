//! File system operations.

use std::path::{Path, PathBuf};

use anyhow::Context;

pub mod sink;

pub use sink::{FileSink, MemorySink, OutputSink};

/// Directory, relative to the base, that generated resolvers are written to.
pub const RESOLVER_DIR: &str = "src/resolver";

/// Extension of generated resolver files.
pub const RESOLVER_EXTENSION: &str = "js";

/// Holds every output path derived from a base directory.
///
/// This struct enables dependency injection of filesystem paths, allowing
/// tests to use isolated temporary directories instead of the actual
/// working directory. In production, the base is the `--out-dir` option or
/// the current working directory.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use graphql_alchemist::fs::OutputPaths;
///
/// let paths = OutputPaths::new(Path::new("/tmp/api"));
/// assert_eq!(
///     paths.resolver_file("greet"),
///     Path::new("/tmp/api/src/resolver/greet.js")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct OutputPaths {
    base: PathBuf,
}

impl OutputPaths {
    /// Creates paths rooted at the given base directory.
    #[must_use]
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }

    /// Creates paths rooted at the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_cwd() -> anyhow::Result<Self> {
        let base = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self { base })
    }

    /// Returns the directory resolvers are written to (`src/resolver`).
    #[must_use]
    pub fn resolver_dir(&self) -> PathBuf {
        self.base.join(RESOLVER_DIR)
    }

    /// Returns the file path for the named resolver (`src/resolver/<name>.js`).
    #[must_use]
    pub fn resolver_file(&self, name: &str) -> PathBuf {
        self.resolver_dir()
            .join(format!("{name}.{RESOLVER_EXTENSION}"))
    }
}
