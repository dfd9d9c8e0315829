//! ZIP archive assembly.
//!
//! Drives a [`ZipOperation`] end to end: collect candidates, filter them,
//! resolve permissions and stream each file into the archive.

use crate::Result;
use crate::ZipError;
use crate::creation::filters::PatternMatcher;
use crate::creation::permissions;
use crate::creation::report::ReportEntry;
use crate::creation::report::ZipReport;
use crate::creation::walker::SourceEntry;
use crate::creation::walker::collect_sources;
use crate::operation::ZipOperation;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;
use tracing::info;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Compression level used when none is configured.
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 6;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Runs `operation` and writes its archive.
///
/// See [`ZipOperation::execute`].
pub(crate) fn assemble(operation: &ZipOperation) -> Result<ZipReport> {
    let start = Instant::now();

    let destination = resolve_destination(operation)?;
    let options = file_options(operation.compression_level())?;
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    info!(destination = %destination.display(), "assembling zip archive");

    if let Some(source) = source_containing(operation, parent) {
        debug!(
            source = %source.display(),
            destination = %destination.display(),
            "destination lies inside a source directory, an existing archive there is collected"
        );
    }

    std::fs::create_dir_all(parent)?;

    let mut report = ZipReport {
        destination: destination.clone(),
        ..ZipReport::default()
    };

    let candidates = collect_sources(operation)?;
    let matcher = PatternMatcher::new(operation.included(), operation.excluded());
    let selected = select_entries(candidates, &matcher, &mut report);

    // Dropping the temporary file on any early return removes it
    let temp = temp_builder().tempfile_in(parent)?;
    let mut zip = ZipWriter::new(temp);
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    for entry in &selected {
        let written = add_file_to_zip(&mut zip, entry, &options, &mut buffer)?;
        report.bytes_written += written.size;
        report.entries.push(written);
    }

    let temp = zip
        .finish()
        .map_err(|e| std::io::Error::other(format!("failed to finish ZIP archive: {e}")))?;
    temp.as_file().sync_all()?;
    report.bytes_compressed = temp.as_file().metadata()?.len();

    temp.persist(&destination).map_err(|e| e.error)?;

    report.duration = start.elapsed();

    info!(
        destination = %destination.display(),
        entries = report.files_added(),
        skipped = report.files_skipped,
        bytes = report.bytes_written,
        "zip archive written"
    );

    Ok(report)
}

/// Validates the destination settings and joins them into a path.
fn resolve_destination(operation: &ZipOperation) -> Result<PathBuf> {
    let directory = operation
        .destination_directory()
        .ok_or_else(|| ZipError::configuration("destination directory is not set"))?;

    let name = operation
        .destination_file_name()
        .ok_or_else(|| ZipError::configuration("destination file name is not set"))?;

    if name.is_empty() {
        return Err(ZipError::configuration("destination file name is empty"));
    }

    Ok(directory.join(name))
}

/// Returns the first source directory that contains `directory`.
fn source_containing<'a>(operation: &'a ZipOperation, directory: &Path) -> Option<&'a Path> {
    operation
        .source_directories()
        .iter()
        .map(PathBuf::as_path)
        .find(|source| directory.starts_with(source))
}

/// Builds the per-entry options for a compression level.
fn file_options(level: Option<u8>) -> Result<SimpleFileOptions> {
    let options = SimpleFileOptions::default();

    match level.unwrap_or(DEFAULT_COMPRESSION_LEVEL) {
        0 => Ok(options.compression_method(CompressionMethod::Stored)),
        level @ 1..=9 => Ok(options
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level)))),
        level => Err(ZipError::configuration(format!(
            "compression level must be 0-9, got {level}"
        ))),
    }
}

/// Applies the pattern filter and resolves entry name collisions.
///
/// When two accepted candidates share an entry name the later one replaces
/// the earlier one and takes its place at the later position.
fn select_entries(
    candidates: Vec<SourceEntry>,
    matcher: &PatternMatcher<'_>,
    report: &mut ZipReport,
) -> Vec<SourceEntry> {
    let mut selected: Vec<Option<SourceEntry>> = Vec::with_capacity(candidates.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for candidate in candidates {
        if !matcher.accepts(&candidate.filter_name) {
            debug!(
                name = %candidate.name,
                path = %candidate.path.display(),
                "rejected by patterns"
            );
            report.files_skipped += 1;
            continue;
        }

        if let Some(previous) = positions.insert(candidate.name.clone(), selected.len()) {
            debug!(
                name = %candidate.name,
                path = %candidate.path.display(),
                "entry name already taken, replacing earlier entry"
            );
            selected[previous] = None;
            report.collisions += 1;
        }

        selected.push(Some(candidate));
    }

    selected.into_iter().flatten().collect()
}

/// Streams one source file into the archive.
fn add_file_to_zip<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &SourceEntry,
    options: &SimpleFileOptions,
    buffer: &mut [u8],
) -> Result<ReportEntry> {
    let mut file = File::open(&entry.path)?;
    let metadata = file.metadata()?;
    let mode = permissions::resolve_mode(&metadata);
    let size = metadata.len();

    let file_options = options
        .unix_permissions(mode)
        .large_file(size >= u64::from(u32::MAX));

    zip.start_file(entry.name.as_str(), file_options)
        .map_err(|e| std::io::Error::other(format!("failed to start file in ZIP: {e}")))?;

    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
    }

    debug!(
        name = %entry.name,
        mode = %format!("{mode:o}"),
        bytes = bytes_written,
        "added entry"
    );

    Ok(ReportEntry {
        name: entry.name.clone(),
        mode,
        size: bytes_written,
    })
}

#[cfg(unix)]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = tempfile::Builder::new();
    builder
        .prefix(".zipwright")
        .suffix(".tmp")
        .permissions(std::fs::Permissions::from_mode(0o644));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".zipwright").suffix(".tmp");
    builder
}
