//! Explicitly named source files.

use std::path::Path;
use std::path::PathBuf;

/// A single source file placed in the archive under a chosen entry name.
///
/// Unlike files discovered under a source directory, which always keep their
/// basename, a named file can be stored under any name regardless of what it
/// is called on disk.
///
/// # Examples
///
/// ```
/// use zipwright_core::NamedFile;
///
/// let file = NamedFile::new("LICENSE.txt", "legal/LICENSE-MIT");
/// assert_eq!(file.name(), "LICENSE.txt");
/// assert_eq!(file.path().to_str(), Some("legal/LICENSE-MIT"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedFile {
    name: String,
    path: PathBuf,
}

impl NamedFile {
    /// Creates a named file from an archive entry name and a filesystem path.
    #[must_use]
    pub fn new<S: Into<String>, P: Into<PathBuf>>(name: S, path: P) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Entry name inside the archive.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the file on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
