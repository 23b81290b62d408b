//! Filesystem utilities for atomic snapshot replacement.

use std::fs;
use std::io;
use std::path::Path;

/// Move `temp_path` over `destination`, replacing it atomically.
///
/// On some platforms (notably Windows) `fs::rename` fails when the
/// destination already exists, so on failure the destination is removed
/// and the rename retried. If the retry also fails the temp file is
/// removed so it does not accumulate next to the snapshot.
///
/// # Errors
///
/// Returns an error if the rename fails even after the retry.
pub fn replace_file(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_replace_into_new_path() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("inventory.json.tmp");
        let dest = dir.path().join("inventory.json");

        File::create(&temp).unwrap().write_all(b"[]").unwrap();

        replace_file(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "[]");
    }

    #[test]
    fn test_replace_overwrites_existing() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("inventory.json.tmp");
        let dest = dir.path().join("inventory.json");

        File::create(&dest).unwrap().write_all(b"old").unwrap();
        File::create(&temp).unwrap().write_all(b"new").unwrap();

        replace_file(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }
}
