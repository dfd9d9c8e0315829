//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "zipwright")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory the archive is written into (created if missing)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub dest_dir: PathBuf,

    /// File name of the archive
    #[arg(short = 'n', long, value_name = "FILE")]
    pub name: String,

    /// Directory whose files are archived under their basenames (can be repeated)
    #[arg(short = 's', long = "source-dir", value_name = "DIR")]
    pub source_dirs: Vec<PathBuf>,

    /// File archived under an explicit entry name (can be repeated)
    #[arg(short = 'f', long = "file", value_name = "NAME=PATH", value_parser = parse_named_file)]
    pub files: Vec<(String, PathBuf)>,

    /// Inclusion pattern, a regular expression matched against file names (can be repeated)
    #[arg(short = 'i', long = "include", value_name = "REGEX")]
    pub include: Vec<String>,

    /// Exclusion pattern, a regular expression matched against file names (can be repeated)
    #[arg(short = 'x', long = "exclude", value_name = "REGEX")]
    pub exclude: Vec<String>,

    /// Compression level (0 stores entries uncompressed, 1-9 deflate)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub compression_level: Option<u8>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}

/// Parses a `NAME=PATH` pair.
fn parse_named_file(s: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PATH, got '{s}'"))?;

    if name.is_empty() {
        return Err("entry name must not be empty".to_string());
    }
    if path.is_empty() {
        return Err("path must not be empty".to_string());
    }

    Ok((name.to_string(), PathBuf::from(path)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_named_file() {
        let (name, path) = parse_named_file("src6.txt=/tmp/source6.text").unwrap();
        assert_eq!(name, "src6.txt");
        assert_eq!(path, PathBuf::from("/tmp/source6.text"));
    }

    #[test]
    fn test_parse_named_file_splits_on_first_equals() {
        let (name, path) = parse_named_file("a=b=c").unwrap();
        assert_eq!(name, "a");
        assert_eq!(path, PathBuf::from("b=c"));
    }

    #[test]
    fn test_parse_named_file_rejects_malformed() {
        assert!(parse_named_file("no-separator").is_err());
        assert!(parse_named_file("=path").is_err());
        assert!(parse_named_file("name=").is_err());
    }

    #[test]
    fn test_parse_full_invocation() {
        let cli = Cli::try_parse_from([
            "zipwright",
            "--dest-dir",
            "out",
            "--name",
            "archive.zip",
            "-s",
            "source",
            "-f",
            "src5.txt=source5.text",
            "-i",
            r"source.*\.text",
            "-x",
            "source5.*",
            "-l",
            "0",
        ])
        .unwrap();

        assert_eq!(cli.dest_dir, PathBuf::from("out"));
        assert_eq!(cli.name, "archive.zip");
        assert_eq!(cli.source_dirs, [PathBuf::from("source")]);
        assert_eq!(cli.files.len(), 1);
        assert_eq!(cli.include, [r"source.*\.text"]);
        assert_eq!(cli.exclude, ["source5.*"]);
        assert_eq!(cli.compression_level, Some(0));
    }

    #[test]
    fn test_compression_level_out_of_range() {
        let result = Cli::try_parse_from([
            "zipwright", "-d", "out", "-n", "a.zip", "-l", "10",
        ]);
        assert!(result.is_err());
    }
}
