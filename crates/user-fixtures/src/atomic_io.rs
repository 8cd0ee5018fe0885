//! Replace-by-rename file writes.
//!
//! Fixture documents are written to a hidden temporary file beside the
//! target and renamed into place, so readers never observe a half-written
//! document at the target path.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::WriteError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to `file_name` inside `dir`, replacing any existing
/// file.
///
/// `display_path` is only used in error messages.
///
/// # Errors
///
/// Returns [`WriteError::InvalidPath`] if `file_name` is not a single normal
/// path component, and [`WriteError::Io`] if creating, writing, syncing, or
/// renaming the file fails. The temporary file is removed on failure.
pub(crate) fn write_atomic(
    dir: &Dir,
    file_name: &Utf8Path,
    display_path: &Utf8Path,
    contents: &str,
) -> Result<(), WriteError> {
    let mut components = file_name.components();
    let (Some(Utf8Component::Normal(target)), None) = (components.next(), components.next())
    else {
        return Err(WriteError::InvalidPath {
            path: display_path.to_path_buf(),
        });
    };

    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let tmp_name = format!(".{target}.tmp.{}.{counter}", std::process::id());

    let io_error = |err: io::Error| WriteError::Io {
        path: display_path.to_path_buf(),
        message: err.to_string(),
    };

    if let Err(err) = write_temp(dir, &tmp_name, contents) {
        discard_temp(dir, &tmp_name);
        return Err(io_error(err));
    }

    if let Err(err) = replace_target(dir, &tmp_name, target) {
        discard_temp(dir, &tmp_name);
        return Err(io_error(err));
    }

    sync_directory(dir);
    Ok(())
}

fn write_temp(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn replace_target(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    // Windows rename fails if the target exists, so remove it first.
    match dir.remove_file(target) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target)
}

#[cfg(not(windows))]
fn replace_target(dir: &Dir, tmp_name: &str, target: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target)
}

fn discard_temp(dir: &Dir, tmp_name: &str) {
    if dir.remove_file(tmp_name).is_err() {
        // Nothing was created, or it is already gone.
    }
}

fn sync_directory(dir: &Dir) {
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Directory sync is not supported everywhere.
    }
}
