//! Archive assembly.
//!
//! This module turns a [`ZipOperation`](crate::ZipOperation) into a ZIP
//! archive: source collection, pattern filtering, permission mapping and the
//! archive writer itself.

pub mod filters;
pub mod permissions;
pub mod report;
pub mod walker;
pub mod zip;

// Re-exports for public API
pub use filters::PatternMatcher;
pub use filters::compile_patterns;
pub use report::ReportEntry;
pub use report::ZipReport;
pub use walker::SourceEntry;
pub use walker::SourceOrigin;
pub use walker::collect_sources;
