//! Atomic file replacement.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Replace the contents of `destination` with `bytes`.
///
/// The data goes to a hidden sibling first and is renamed into place once
/// flushed, so `destination` holds either the old contents or the new ones.
/// The sibling is removed on failure.
pub fn write_atomic(destination: &Path, bytes: &[u8]) -> io::Result<()> {
    let staging = staging_path(destination);

    let flushed = fs::File::create(&staging).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });
    if let Err(err) = flushed {
        let _ = fs::remove_file(&staging);
        return Err(err);
    }

    move_into_place(&staging, destination)
}

/// Rename `staging` over `destination`.
///
/// Windows refuses to rename onto an existing file, so a failed first attempt
/// removes `destination` and retries once.
fn move_into_place(staging: &Path, destination: &Path) -> io::Result<()> {
    let Err(first) = fs::rename(staging, destination) else {
        return Ok(());
    };

    let _ = fs::remove_file(destination);
    fs::rename(staging, destination).map_err(|second| {
        let _ = fs::remove_file(staging);
        io::Error::new(
            second.kind(),
            format!(
                "Could not move {} into place ({}; retry: {})",
                destination.display(),
                first,
                second
            ),
        )
    })
}

fn staging_path(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    destination.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}
