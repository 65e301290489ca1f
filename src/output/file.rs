//! Append-mode file destinations.

use crate::internal;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Opens `path` for appending, creating it and any missing parent directories.
///
/// # Errors
/// I/O errors from directory creation or opening the file.
pub fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        match fs::create_dir_all(parent) {
            Ok(()) => {
                internal::debug(&format!("Created directory: {}", parent.display()));
            }
            Err(e) => {
                internal::error(&format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ));
                return Err(e);
            }
        }
    }

    internal::debug(&format!("Opening log file: {}", path.display()));
    OpenOptions::new().create(true).append(true).open(path)
}
