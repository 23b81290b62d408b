//! JSON snapshot persistence for the full inventory.
//!
//! The entire item set is written on every successful mutation and read
//! back exactly once when the store is opened. The snapshot is a plain
//! JSON array of items; the expiry date round-trips as `YYYY-MM-DD`
//! text, so there is no timezone to get wrong.
//!
//! Writes go to a sibling temp file which is then renamed over the
//! snapshot, so a reader opening the path between saves never sees a
//! half-written file. Whole-collection-per-mutation is a known
//! scalability limit and the intended contract for this dataset size.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::item::Item;

/// Outcome of the one-time load performed when a store is opened.
///
/// Load problems never abort startup; the worst case is an empty store
/// plus a warning the caller must surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    /// No snapshot existed; the store starts empty.
    FreshStart,
    /// The snapshot parsed cleanly.
    Loaded { items: usize },
    /// A snapshot existed but could not be read or parsed. The store
    /// starts empty; the prior file is left in place untouched.
    RecoveredEmpty { warning: String },
}

/// Serialize every item to `path`, replacing any prior snapshot.
pub fn save(path: &Path, items: &[&Item]) -> Result<()> {
    let json = serde_json::to_vec_pretty(items)
        .map_err(|e| StoreError::PersistenceWriteFailed(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::PersistenceWriteFailed(e.to_string()))?;
        }
    }

    let temp = temp_path(path);
    fs::write(&temp, &json).map_err(|e| StoreError::PersistenceWriteFailed(e.to_string()))?;
    crate::fs::replace_file(&temp, path)
        .map_err(|e| StoreError::PersistenceWriteFailed(e.to_string()))?;

    Ok(())
}

/// Read the snapshot at `path`, or `None` if no snapshot exists.
///
/// # Errors
///
/// Returns `PersistenceLoadFailed` if the file exists but cannot be
/// read or parsed.
pub fn load(path: &Path) -> Result<Option<Vec<Item>>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents =
        fs::read_to_string(path).map_err(|e| StoreError::PersistenceLoadFailed(e.to_string()))?;
    let items: Vec<Item> = serde_json::from_str(&contents)
        .map_err(|e| StoreError::PersistenceLoadFailed(e.to_string()))?;

    Ok(Some(items))
}

/// Sibling temp path used for the write-then-rename dance.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            unit_price: 1.25,
            quantity: 4,
            expiry_date: NaiveDate::from_ymd_opt(2030, 1, 2).expect("valid date"),
        }
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        assert_eq!(load(&path).unwrap(), None);
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let items = vec![item("A1", "Butter"), item("B2", "Yogurt")];
        let refs: Vec<&Item> = items.iter().collect();
        save(&path, &refs).unwrap();

        let loaded = load(&path).unwrap().expect("snapshot exists");
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_empty_set_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        save(&path, &[]).unwrap();
        assert_eq!(load(&path).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_save_replaces_prior_snapshot_and_leaves_no_temp() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let first = item("A1", "Butter");
        save(&path, &[&first]).unwrap();
        let second = item("B2", "Yogurt");
        save(&path, &[&second]).unwrap();

        let loaded = load(&path).unwrap().expect("snapshot exists");
        assert_eq!(loaded, vec![second]);
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_corrupt_snapshot_is_a_load_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, StoreError::PersistenceLoadFailed(_)));
    }
}
