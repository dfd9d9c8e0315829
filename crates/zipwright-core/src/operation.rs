//! Configuration and entry point for ZIP assembly.

use crate::Result;
use crate::creation::filters::compile_pattern;
use crate::creation::report::ZipReport;
use crate::named_file::NamedFile;
use regex::Regex;
use std::path::Path;
use std::path::PathBuf;

/// Assembles a ZIP archive from source directories and named files.
///
/// Every collection is an ordered, owned list that can be replaced
/// (`with_*`), appended to (`add_*`, `include`, `exclude`), or mutated in
/// place through the `*_mut` accessors. Nothing is validated until
/// [`execute`](Self::execute).
///
/// # Examples
///
/// ```no_run
/// use zipwright_core::ZipOperation;
///
/// let report = ZipOperation::new()
///     .add_source_directory("build/dist")
///     .add_named_file("LICENSE.txt", "LICENSE")
///     .with_destination_directory("build/zip")
///     .with_destination_file_name("app.zip")
///     .include_str(r"\.(class|txt)$")?
///     .exclude_str("^Test")?
///     .execute()?;
///
/// println!("wrote {} entries", report.files_added());
/// # Ok::<(), zipwright_core::ZipError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZipOperation {
    source_directories: Vec<PathBuf>,
    source_files: Vec<NamedFile>,
    destination_directory: Option<PathBuf>,
    destination_file_name: Option<String>,
    included: Vec<Regex>,
    excluded: Vec<Regex>,
    compression_level: Option<u8>,
}

impl ZipOperation {
    /// Creates an operation with no sources, no destination and no patterns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Source directories, in configured order.
    pub fn source_directories(&self) -> &[PathBuf] {
        &self.source_directories
    }

    /// Mutable access to the source directories.
    pub fn source_directories_mut(&mut self) -> &mut Vec<PathBuf> {
        &mut self.source_directories
    }

    /// Replaces the source directories.
    #[must_use]
    pub fn with_source_directories<I, P>(mut self, directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.source_directories.clear();
        self.add_source_directories(directories)
    }

    /// Appends source directories.
    #[must_use]
    pub fn add_source_directories<I, P>(mut self, directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.source_directories
            .extend(directories.into_iter().map(Into::into));
        self
    }

    /// Appends a single source directory.
    #[must_use]
    pub fn add_source_directory<P: AsRef<Path>>(self, directory: P) -> Self {
        self.add_source_directories([directory.as_ref().to_path_buf()])
    }

    /// Named source files, in configured order.
    pub fn source_files(&self) -> &[NamedFile] {
        &self.source_files
    }

    /// Mutable access to the named source files.
    pub fn source_files_mut(&mut self) -> &mut Vec<NamedFile> {
        &mut self.source_files
    }

    /// Replaces the named source files.
    #[must_use]
    pub fn with_source_files<I: IntoIterator<Item = NamedFile>>(mut self, files: I) -> Self {
        self.source_files.clear();
        self.add_source_files(files)
    }

    /// Appends named source files.
    #[must_use]
    pub fn add_source_files<I: IntoIterator<Item = NamedFile>>(mut self, files: I) -> Self {
        self.source_files.extend(files);
        self
    }

    /// Appends a single named source file.
    #[must_use]
    pub fn add_source_file(self, file: NamedFile) -> Self {
        self.add_source_files([file])
    }

    /// Appends the file at `path`, stored in the archive as `name`.
    #[must_use]
    pub fn add_named_file<S: Into<String>, P: AsRef<Path>>(self, name: S, path: P) -> Self {
        self.add_source_file(NamedFile::new(name, path.as_ref()))
    }

    /// Directory the archive is written into.
    pub fn destination_directory(&self) -> Option<&Path> {
        self.destination_directory.as_deref()
    }

    /// Sets the directory the archive is written into.
    #[must_use]
    pub fn with_destination_directory<P: AsRef<Path>>(mut self, directory: P) -> Self {
        self.destination_directory = Some(directory.as_ref().to_path_buf());
        self
    }

    /// File name of the archive inside the destination directory.
    pub fn destination_file_name(&self) -> Option<&str> {
        self.destination_file_name.as_deref()
    }

    /// Sets the file name of the archive.
    #[must_use]
    pub fn with_destination_file_name<S: Into<String>>(mut self, name: S) -> Self {
        self.destination_file_name = Some(name.into());
        self
    }

    /// Full path of the archive, when both directory and file name are set.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipwright_core::ZipOperation;
    /// use std::path::Path;
    ///
    /// let operation = ZipOperation::new()
    ///     .with_destination_directory("out")
    ///     .with_destination_file_name("archive.zip");
    /// assert_eq!(
    ///     operation.destination_file().as_deref(),
    ///     Some(Path::new("out/archive.zip"))
    /// );
    ///
    /// assert_eq!(ZipOperation::new().destination_file(), None);
    /// ```
    pub fn destination_file(&self) -> Option<PathBuf> {
        match (&self.destination_directory, &self.destination_file_name) {
            (Some(directory), Some(name)) => Some(directory.join(name)),
            _ => None,
        }
    }

    /// Inclusion patterns, in configured order.
    pub fn included(&self) -> &[Regex] {
        &self.included
    }

    /// Mutable access to the inclusion patterns.
    pub fn included_mut(&mut self) -> &mut Vec<Regex> {
        &mut self.included
    }

    /// Replaces the inclusion patterns.
    #[must_use]
    pub fn with_included<I: IntoIterator<Item = Regex>>(mut self, patterns: I) -> Self {
        self.included = patterns.into_iter().collect();
        self
    }

    /// Appends an inclusion pattern.
    #[must_use]
    pub fn include(mut self, pattern: Regex) -> Self {
        self.included.push(pattern);
        self
    }

    /// Compiles and appends an inclusion pattern.
    ///
    /// # Errors
    ///
    /// Returns `ZipError::PatternCompile` if `pattern` is not a valid
    /// regular expression.
    pub fn include_str(self, pattern: &str) -> Result<Self> {
        Ok(self.include(compile_pattern(pattern)?))
    }

    /// Exclusion patterns, in configured order.
    pub fn excluded(&self) -> &[Regex] {
        &self.excluded
    }

    /// Mutable access to the exclusion patterns.
    pub fn excluded_mut(&mut self) -> &mut Vec<Regex> {
        &mut self.excluded
    }

    /// Replaces the exclusion patterns.
    #[must_use]
    pub fn with_excluded<I: IntoIterator<Item = Regex>>(mut self, patterns: I) -> Self {
        self.excluded = patterns.into_iter().collect();
        self
    }

    /// Appends an exclusion pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: Regex) -> Self {
        self.excluded.push(pattern);
        self
    }

    /// Compiles and appends an exclusion pattern.
    ///
    /// # Errors
    ///
    /// Returns `ZipError::PatternCompile` if `pattern` is not a valid
    /// regular expression.
    pub fn exclude_str(self, pattern: &str) -> Result<Self> {
        Ok(self.exclude(compile_pattern(pattern)?))
    }

    /// Compression level: `None` for the default (deflate, level 6), `0` to
    /// store entries uncompressed, `1`-`9` for deflate at that level.
    pub fn compression_level(&self) -> Option<u8> {
        self.compression_level
    }

    /// Sets the compression level. Out-of-range values are reported by
    /// [`execute`](Self::execute).
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = Some(level);
        self
    }

    /// Collects, filters and writes the archive.
    ///
    /// The destination directory is created if missing and any existing
    /// archive at the destination path is replaced. The archive is written
    /// to a temporary file next to the destination and moved into place only
    /// once complete, so a failed run leaves the previous destination file
    /// untouched.
    ///
    /// A destination inside one of the source directories is walked like
    /// any other file there: the archive left by a previous run is added to
    /// the next one unless an exclusion pattern filters it out.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The destination directory or file name is not set, or the
    ///   compression level is out of range (`ZipError::Configuration`)
    /// - A named file does not exist (`ZipError::FileNotFound`)
    /// - Any filesystem or archive I/O fails (`ZipError::Io`)
    pub fn execute(&self) -> Result<ZipReport> {
        crate::creation::zip::assemble(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn raw(patterns: &[Regex]) -> Vec<&str> {
        patterns.iter().map(Regex::as_str).collect()
    }

    #[test]
    fn test_instantiation_is_empty() {
        let operation = ZipOperation::new();
        assert!(operation.source_directories().is_empty());
        assert!(operation.source_files().is_empty());
        assert_eq!(operation.destination_directory(), None);
        assert_eq!(operation.destination_file_name(), None);
        assert_eq!(operation.destination_file(), None);
        assert!(operation.included().is_empty());
        assert!(operation.excluded().is_empty());
        assert_eq!(operation.compression_level(), None);
    }

    #[test]
    fn test_population_with_replacing_builders() {
        let file1 = NamedFile::new("sourceFile1", "sourceFile1");
        let file2 = NamedFile::new("sourceFile2", "sourceFile2");

        let operation = ZipOperation::new()
            .with_source_directories(["sourceDirectory1", "sourceDirectory2"])
            .with_source_files([file1.clone(), file2.clone()])
            .with_destination_directory("destinationDirectory")
            .with_destination_file_name("destinationFileName")
            .with_included([
                Regex::new("included1").unwrap(),
                Regex::new("included2").unwrap(),
            ])
            .with_excluded([
                Regex::new("excluded1").unwrap(),
                Regex::new("excluded2").unwrap(),
            ]);

        assert_eq!(
            operation.source_directories(),
            [
                PathBuf::from("sourceDirectory1"),
                PathBuf::from("sourceDirectory2")
            ]
        );
        assert_eq!(operation.source_files(), [file1, file2]);
        assert_eq!(
            operation.destination_directory(),
            Some(Path::new("destinationDirectory"))
        );
        assert_eq!(
            operation.destination_file_name(),
            Some("destinationFileName")
        );
        assert_eq!(
            operation.destination_file(),
            Some(PathBuf::from("destinationDirectory").join("destinationFileName"))
        );
        assert_eq!(raw(operation.included()), ["included1", "included2"]);
        assert_eq!(raw(operation.excluded()), ["excluded1", "excluded2"]);
    }

    #[test]
    fn test_population_through_mutable_accessors() {
        let mut operation = ZipOperation::new()
            .with_destination_directory("destinationDirectory")
            .with_destination_file_name("destinationFileName");

        operation
            .source_directories_mut()
            .push(PathBuf::from("sourceDirectory1"));
        operation
            .source_directories_mut()
            .push(PathBuf::from("sourceDirectory2"));
        operation
            .source_files_mut()
            .push(NamedFile::new("sourceFile1", "sourceFile1"));
        operation
            .included_mut()
            .push(Regex::new("included1").unwrap());
        operation
            .excluded_mut()
            .push(Regex::new("excluded1").unwrap());

        assert_eq!(operation.source_directories().len(), 2);
        assert_eq!(operation.source_files()[0].name(), "sourceFile1");
        assert_eq!(raw(operation.included()), ["included1"]);
        assert_eq!(raw(operation.excluded()), ["excluded1"]);
    }

    #[test]
    fn test_population_with_appending_builders() {
        let operation = ZipOperation::new()
            .add_source_directory("a")
            .add_source_directories(["b", "c"])
            .add_source_file(NamedFile::new("one", "1"))
            .add_named_file("two", "2")
            .include(Regex::new("x").unwrap())
            .include_str("y")
            .unwrap()
            .exclude(Regex::new("z").unwrap())
            .exclude_str("w")
            .unwrap();

        assert_eq!(
            operation.source_directories(),
            [PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("c")]
        );
        let names: Vec<_> = operation.source_files().iter().map(NamedFile::name).collect();
        assert_eq!(names, ["one", "two"]);
        assert_eq!(raw(operation.included()), ["x", "y"]);
        assert_eq!(raw(operation.excluded()), ["z", "w"]);
    }

    #[test]
    fn test_replacing_builder_discards_previous_values() {
        let operation = ZipOperation::new()
            .add_source_directory("old")
            .with_source_directories(["new"])
            .include_str("old")
            .unwrap()
            .with_included([Regex::new("new").unwrap()]);

        assert_eq!(operation.source_directories(), [PathBuf::from("new")]);
        assert_eq!(raw(operation.included()), ["new"]);
    }

    #[test]
    fn test_invalid_string_pattern() {
        let result = ZipOperation::new().include_str("(");
        assert!(matches!(
            result,
            Err(crate::ZipError::PatternCompile { .. })
        ));
    }

    #[test]
    fn test_destination_file_requires_both_parts() {
        let only_dir = ZipOperation::new().with_destination_directory("out");
        assert_eq!(only_dir.destination_file(), None);

        let only_name = ZipOperation::new().with_destination_file_name("a.zip");
        assert_eq!(only_name.destination_file(), None);
    }
}
