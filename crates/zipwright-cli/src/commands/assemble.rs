//! Archive assembly command.

use crate::cli::Cli;
use crate::error::add_destination_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use zipwright_core::NamedFile;
use zipwright_core::ZipOperation;
use zipwright_core::creation::compile_patterns;

pub fn execute(args: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let operation = build_operation(args)?;
    let destination = args.dest_dir.join(&args.name);

    let report = add_destination_context(operation.execute(), &destination)?;

    if report.collisions > 0 {
        formatter.format_warning(&format!(
            "{} entries were replaced by later entries with the same name",
            report.collisions
        ));
    }
    if report.files_added() == 0 {
        formatter.format_warning("no files matched, the archive is empty");
    }

    formatter.format_assembly_result(&report)
}

/// Translates command-line arguments into a `ZipOperation`.
fn build_operation(args: &Cli) -> Result<ZipOperation> {
    let destination = args.dest_dir.join(&args.name);
    let included = add_destination_context(compile_patterns(&args.include), &destination)?;
    let excluded = add_destination_context(compile_patterns(&args.exclude), &destination)?;

    let mut operation = ZipOperation::new()
        .with_source_directories(&args.source_dirs)
        .with_source_files(
            args.files
                .iter()
                .map(|(name, path)| NamedFile::new(name.as_str(), path)),
        )
        .with_destination_directory(&args.dest_dir)
        .with_destination_file_name(args.name.as_str())
        .with_included(included)
        .with_excluded(excluded);

    if let Some(level) = args.compression_level {
        operation = operation.with_compression_level(level);
    }

    Ok(operation)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("zipwright").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_build_operation_maps_every_flag() {
        let cli = parse(&[
            "-d", "out", "-n", "a.zip", "-s", "one", "-s", "two", "-f", "n=p", "-i", "x", "-x",
            "y", "-l", "3",
        ]);
        let operation = build_operation(&cli).unwrap();

        assert_eq!(operation.source_directories().len(), 2);
        assert_eq!(operation.source_files()[0].name(), "n");
        assert_eq!(operation.source_files()[0].path(), Path::new("p"));
        assert_eq!(operation.destination_file(), Some(Path::new("out").join("a.zip")));
        assert_eq!(operation.included()[0].as_str(), "x");
        assert_eq!(operation.excluded()[0].as_str(), "y");
        assert_eq!(operation.compression_level(), Some(3));
    }

    #[test]
    fn test_build_operation_rejects_bad_pattern() {
        let cli = parse(&["-d", "out", "-n", "a.zip", "-i", "(unclosed"]);
        let err = build_operation(&cli).unwrap_err();
        assert!(format!("{err:?}").contains("(unclosed"));
    }
}
