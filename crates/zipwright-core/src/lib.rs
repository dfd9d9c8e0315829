//! ZIP archive assembly with pattern filtering and permission preservation.
//!
//! `zipwright-core` gathers files from source directories and explicitly
//! named files, filters them through inclusion and exclusion regular
//! expressions, and writes the result into a single ZIP archive. Each
//! entry keeps the POSIX permission bits of its source file.
//!
//! Files found under a source directory are stored under their basename,
//! whatever their depth. Named files are stored under the name they were
//! configured with.
//!
//! # Examples
//!
//! ```no_run
//! use zipwright_core::ZipOperation;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = ZipOperation::new()
//!     .add_source_directory("target/classes")
//!     .add_named_file("README.txt", "README.md")
//!     .with_destination_directory("target/dist")
//!     .with_destination_file_name("app.zip")
//!     .include_str(r"\.class$")?
//!     .exclude_str("Test")?
//!     .execute()?;
//! println!("Archived {} files", report.files_added());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod creation;
pub mod error;
pub mod named_file;
pub mod operation;

// Re-export main API types
pub use creation::ZipReport;
pub use error::Result;
pub use error::ZipError;
pub use named_file::NamedFile;
pub use operation::ZipOperation;
