//! Pattern filtering for archive assembly.
//!
//! Candidates are accepted or rejected by testing a file name against
//! ordered lists of inclusion and exclusion regular expressions.

use crate::Result;
use crate::ZipError;
use regex::Regex;
use std::path::Path;

/// Decides whether a candidate file name belongs in the archive.
///
/// A name is accepted when:
/// - the inclusion list is empty, or the name matches at least one inclusion
///   pattern, and
/// - the name matches none of the exclusion patterns.
///
/// Exclusion always wins over inclusion. Patterns are searched anywhere in
/// the name (`Regex::is_match`); anchor them with `^`/`$` for whole-name
/// matching.
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use zipwright_core::creation::filters::PatternMatcher;
///
/// let included = [Regex::new(r"source.*\.text").unwrap()];
/// let excluded = [Regex::new("source5.*").unwrap()];
/// let matcher = PatternMatcher::new(&included, &excluded);
///
/// assert!(matcher.accepts("source1.text"));
/// assert!(!matcher.accepts("source4.txt"));
/// assert!(!matcher.accepts("source5.text"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PatternMatcher<'a> {
    included: &'a [Regex],
    excluded: &'a [Regex],
}

impl<'a> PatternMatcher<'a> {
    /// Creates a matcher over borrowed pattern lists.
    #[must_use]
    pub fn new(included: &'a [Regex], excluded: &'a [Regex]) -> Self {
        Self { included, excluded }
    }

    /// Returns `true` if `name` passes both the inclusion and exclusion rules.
    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        if !self.included.is_empty() && !self.included.iter().any(|p| p.is_match(name)) {
            return false;
        }

        !self.excluded.iter().any(|p| p.is_match(name))
    }

    /// Returns `true` if neither list holds a pattern.
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        self.included.is_empty() && self.excluded.is_empty()
    }
}

/// Compiles raw pattern strings into regular expressions.
///
/// # Errors
///
/// Returns `ZipError::PatternCompile` naming the first pattern that is not a
/// valid regular expression.
///
/// # Examples
///
/// ```
/// use zipwright_core::creation::filters::compile_patterns;
///
/// let patterns = compile_patterns([r".*\.rs$", "^Cargo"]).unwrap();
/// assert_eq!(patterns.len(), 2);
///
/// assert!(compile_patterns(["(unclosed"]).is_err());
/// ```
pub fn compile_patterns<I, S>(patterns: I) -> Result<Vec<Regex>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|raw| compile_pattern(raw.as_ref()))
        .collect()
}

/// Compiles a single raw pattern string.
///
/// # Errors
///
/// Returns `ZipError::PatternCompile` if `pattern` is not a valid regular
/// expression.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ZipError::PatternCompile {
        pattern: pattern.to_string(),
        source,
    })
}

/// Returns the final component of `path` as UTF-8, lossily converted.
///
/// Returns `None` for paths without a file name (e.g. `/` or `..`).
pub(crate) fn file_name_of(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
