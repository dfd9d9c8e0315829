//! Source collection for archive assembly.
//!
//! Turns the configured source directories and named files into an ordered
//! list of candidate entries. Directory trees are flattened: every regular
//! file found at any depth is entered under its basename.

use crate::Result;
use crate::ZipError;
use crate::creation::filters::file_name_of;
use crate::named_file::NamedFile;
use crate::operation::ZipOperation;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use tracing::warn;
use walkdir::WalkDir;

/// Where a candidate entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOrigin {
    /// Discovered while walking a source directory.
    Directory,

    /// Listed explicitly as a named file.
    Named,
}

/// A candidate archive entry, before pattern filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Entry name inside the archive.
    pub name: String,

    /// Full filesystem path to the source file.
    pub path: PathBuf,

    /// Name tested against the inclusion and exclusion patterns.
    ///
    /// This is always the basename of the source file on disk, so a named
    /// file is filtered by what it is called on disk, not by its entry name.
    pub filter_name: String,

    /// How the entry was found.
    pub origin: SourceOrigin,
}

/// Collects candidate entries for `operation`.
///
/// Files discovered in source directories come first, directories in
/// configured order and siblings sorted by file name. Named files follow in
/// configured order.
///
/// Symbolic links are never followed during the walk and are not archived;
/// only regular files are collected. Source directories that do not exist, or
/// that are not directories, contribute nothing.
///
/// # Examples
///
/// ```no_run
/// use zipwright_core::ZipOperation;
/// use zipwright_core::creation::walker::collect_sources;
///
/// let operation = ZipOperation::new().add_source_directory("build/dist");
/// for entry in collect_sources(&operation)? {
///     println!("{} <- {}", entry.name, entry.path.display());
/// }
/// # Ok::<(), zipwright_core::ZipError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - A named file does not exist (`ZipError::FileNotFound`)
/// - A named file is a directory (`ZipError::Configuration`)
/// - A directory cannot be traversed or a file's metadata cannot be read
pub fn collect_sources(operation: &ZipOperation) -> Result<Vec<SourceEntry>> {
    let mut entries = Vec::new();

    for directory in operation.source_directories() {
        walk_directory(directory, &mut entries)?;
    }

    for named in operation.source_files() {
        entries.push(named_entry(named)?);
    }

    Ok(entries)
}

/// Appends every regular file beneath `root` to `entries`.
fn walk_directory(root: &Path, entries: &mut Vec<SourceEntry>) -> Result<()> {
    match std::fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            warn!(path = %root.display(), "source directory is not a directory, skipping");
            return Ok(());
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %root.display(), "source directory does not exist, skipping");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = entry.map_err(|e| {
            ZipError::Io(std::io::Error::other(format!("walkdir error: {e}")))
        })?;

        // Directories are descended into; symlinks and special files are skipped
        if !entry.file_type().is_file() {
            if entry.path_is_symlink() {
                debug!(path = %entry.path().display(), "skipping symbolic link");
            }
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push(SourceEntry {
            filter_name: name.clone(),
            name,
            path: entry.into_path(),
            origin: SourceOrigin::Directory,
        });
    }

    Ok(())
}

/// Builds the candidate entry for an explicitly named file.
fn named_entry(named: &NamedFile) -> Result<SourceEntry> {
    let path = named.path();
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ZipError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ZipError::Io(e)
        }
    })?;

    if metadata.is_dir() {
        return Err(ZipError::configuration(format!(
            "named source {} is a directory",
            path.display()
        )));
    }

    Ok(SourceEntry {
        name: named.name().to_string(),
        path: path.to_path_buf(),
        filter_name: file_name_of(path).unwrap_or_else(|| named.name().to_string()),
        origin: SourceOrigin::Named,
    })
}
