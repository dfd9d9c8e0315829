//! POSIX permission mapping for archive entries.
//!
//! ZIP stores the unix mode of an entry in the upper 16 bits of its external
//! file attributes, combined with the file-type bits. The `zip` writer does
//! that encoding from the permission bits resolved here.

use std::fs::Metadata;

/// Mask selecting the owner/group/other read-write-execute bits.
pub const PERMISSION_MASK: u32 = 0o777;

/// Mode used when the platform exposes no POSIX permissions.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Resolves the permission bits of a file from its metadata.
///
/// Only the nine `rwxrwxrwx` bits are returned; file-type and
/// setuid/setgid/sticky bits are masked out. Take the metadata from the
/// open handle the content is read from, so both describe the same file.
///
/// # Examples
///
/// ```no_run
/// use zipwright_core::creation::permissions::resolve_mode;
/// use std::fs::File;
///
/// let file = File::open("build.sh")?;
/// let mode = resolve_mode(&file.metadata()?);
/// println!("{mode:o}");
/// # Ok::<(), std::io::Error>(())
/// ```
#[cfg(unix)]
#[must_use]
pub fn resolve_mode(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & PERMISSION_MASK
}

/// Resolves the permission bits of a file from its metadata.
///
/// Platforms without POSIX permissions always get [`DEFAULT_FILE_MODE`].
#[cfg(not(unix))]
#[must_use]
pub fn resolve_mode(_metadata: &Metadata) -> u32 {
    DEFAULT_FILE_MODE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    #[test]
    fn test_resolve_mode_reads_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("script.sh");
        fs::write(&path, "#!/bin/sh").unwrap();

        for mode in [0o700, 0o470, 0o407, 0o755] {
            fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
            assert_eq!(resolve_mode(&fs::metadata(&path).unwrap()), mode);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_mode_masks_special_bits() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tool");
        fs::write(&path, "bin").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o4755)).unwrap();

        // setuid and type bits must not leak into the permission field
        assert_eq!(resolve_mode(&fs::metadata(&path).unwrap()), 0o755);
    }

    #[cfg(not(unix))]
    #[test]
    fn test_resolve_mode_default_without_posix() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("file.txt");
        fs::write(&path, "content").unwrap();
        assert_eq!(resolve_mode(&fs::metadata(&path).unwrap()), DEFAULT_FILE_MODE);
    }
}
