//! Archive assembly reporting.

use std::path::PathBuf;
use std::time::Duration;

/// An entry written to the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Entry name inside the archive.
    pub name: String,

    /// Unix permission bits stored for the entry.
    pub mode: u32,

    /// Uncompressed size in bytes.
    pub size: u64,
}

/// Report of a completed `ZipOperation::execute` call.
///
/// Purely informational: the archive on disk is the result of the
/// operation, the report summarizes what went into it.
///
/// # Examples
///
/// ```
/// use zipwright_core::ZipReport;
///
/// let mut report = ZipReport::default();
/// report.bytes_written = 1000;
/// report.bytes_compressed = 250;
///
/// assert_eq!(report.files_added(), 0);
/// assert_eq!(report.compression_ratio(), 4.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZipReport {
    /// Path of the archive that was written.
    pub destination: PathBuf,

    /// Entries in archive order.
    pub entries: Vec<ReportEntry>,

    /// Candidates rejected by the inclusion or exclusion patterns.
    pub files_skipped: usize,

    /// Candidates replaced by a later candidate with the same entry name.
    pub collisions: usize,

    /// Total bytes written to the archive (uncompressed).
    pub bytes_written: u64,

    /// Size of the finished archive file.
    pub bytes_compressed: u64,

    /// Duration of the operation.
    pub duration: Duration,
}

impl ZipReport {
    /// Number of entries in the archive.
    #[must_use]
    pub fn files_added(&self) -> usize {
        self.entries.len()
    }

    /// Entry names in archive order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Returns the compression ratio (uncompressed / archive size).
    ///
    /// Returns 0.0 if either size is 0.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_compressed == 0 || self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.bytes_compressed as f64
    }
}
