//! The inventory store: the keyed item collection, its mutation rules,
//! and its derived views.
//!
//! `Inventory` is the sole owner of every `Item` for the process
//! lifetime. All mutation goes through its methods, each of which
//! validates before touching the map and snapshots the full collection
//! after a successful change. Queries are read-only and never write.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Duration;

use crate::error::{Result, StoreError};
use crate::item::{today, Item, NewItem};
use crate::snapshot::{self, LoadReport};

/// The in-memory inventory, keyed by item id, backed by a JSON snapshot.
///
/// Single-actor by design: operations are synchronous and run to
/// completion, so no internal locking exists. A multi-actor port would
/// need one mutual-exclusion boundary around each read-modify-persist
/// sequence.
#[derive(Debug)]
pub struct Inventory {
    items: HashMap<String, Item>,
    snapshot_path: PathBuf,
}

impl Inventory {
    /// Open the inventory backed by the snapshot at `path`.
    ///
    /// The snapshot is read exactly once, here. A missing snapshot means
    /// a fresh start; an unreadable one means an empty store plus a
    /// warning in the returned [`LoadReport`] - opening never fails.
    pub fn open(path: impl Into<PathBuf>) -> (Self, LoadReport) {
        let snapshot_path = path.into();

        let (items, report) = match snapshot::load(&snapshot_path) {
            Ok(None) => (HashMap::new(), LoadReport::FreshStart),
            Ok(Some(loaded)) => {
                let report = LoadReport::Loaded {
                    items: loaded.len(),
                };
                let map = loaded.into_iter().map(|it| (it.id.clone(), it)).collect();
                (map, report)
            }
            Err(e) => (
                HashMap::new(),
                LoadReport::RecoveredEmpty {
                    warning: e.to_string(),
                },
            ),
        };

        (
            Self {
                items,
                snapshot_path,
            },
            report,
        )
    }

    /// Path of the backing snapshot file.
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // --- Mutations ---

    /// Register a new item.
    ///
    /// Checks run in a fixed order callers may rely on: duplicate id,
    /// price, quantity, expiry. An item whose expiry date is already in
    /// the past is rejected; one expiring today is accepted.
    pub fn add(&mut self, new: NewItem) -> Result<()> {
        if self.items.contains_key(&new.id) {
            return Err(StoreError::DuplicateId(new.id));
        }
        if new.unit_price <= 0.0 {
            return Err(StoreError::InvalidPrice);
        }
        let quantity = u32::try_from(new.quantity).map_err(|_| StoreError::InvalidQuantity)?;
        if new.expiry_date < today() {
            return Err(StoreError::ExpiredOnEntry);
        }

        let item = Item {
            id: new.id.clone(),
            name: new.name,
            unit_price: new.unit_price,
            quantity,
            expiry_date: new.expiry_date,
        };
        self.items.insert(new.id, item);
        self.persist()
    }

    /// Change an item's stock by `delta` (positive restock, negative
    /// consumption) and return the new quantity.
    ///
    /// An adjustment that would take the stock below zero fails with the
    /// current quantity reported, leaving the item unchanged.
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> Result<u32> {
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let updated = i128::from(item.quantity) + i128::from(delta);
        if updated < 0 {
            return Err(StoreError::InsufficientQuantity {
                current: item.quantity,
            });
        }
        let updated = u32::try_from(updated).map_err(|_| StoreError::InvalidQuantity)?;

        item.quantity = updated;
        self.persist()?;
        Ok(updated)
    }

    /// Change an item's unit price.
    ///
    /// The price is checked before the id, so a bad price on a missing
    /// item reports `InvalidPrice`.
    pub fn set_price(&mut self, id: &str, new_price: f64) -> Result<()> {
        if new_price <= 0.0 {
            return Err(StoreError::InvalidPrice);
        }
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        item.unit_price = new_price;
        self.persist()
    }

    /// Delete an item, returning it so the caller can name what went.
    pub fn remove(&mut self, id: &str) -> Result<Item> {
        let item = self
            .items
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.persist()?;
        Ok(item)
    }

    // --- Queries ---

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Result<&Item> {
        self.items
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Every item, sorted by name ascending.
    ///
    /// Ordering is byte-wise on the name (case-sensitive `String`
    /// ordering), stable across calls.
    pub fn list_all(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// Items that are not yet expired but will be within `days` days,
    /// soonest first.
    ///
    /// The window is strict: an item expiring exactly on `today + days`
    /// is excluded, so a zero or negative window yields nothing.
    /// Already-expired items belong to [`Inventory::expired`], never
    /// here.
    pub fn expiring_within(&self, days: i64) -> Vec<&Item> {
        let today = today();
        let threshold = Duration::try_days(days)
            .and_then(|d| today.checked_add_signed(d))
            .unwrap_or(if days >= 0 {
                chrono::NaiveDate::MAX
            } else {
                chrono::NaiveDate::MIN
            });

        let mut items: Vec<&Item> = self
            .items
            .values()
            .filter(|it| !it.is_expired_on(today) && it.expiry_date < threshold)
            .collect();
        items.sort_by_key(|it| it.expiry_date);
        items
    }

    /// Items whose expiry date has passed, most overdue first.
    pub fn expired(&self) -> Vec<&Item> {
        let today = today();
        let mut items: Vec<&Item> = self
            .items
            .values()
            .filter(|it| it.is_expired_on(today))
            .collect();
        items.sort_by_key(|it| it.expiry_date);
        items
    }

    /// Sum of `unit_price * quantity` over the whole store; 0 when empty.
    pub fn total_value(&self) -> f64 {
        self.items.values().map(Item::total_value).sum()
    }

    /// Items whose name contains `keyword`, case-insensitively.
    ///
    /// Results come back in map iteration order, deliberately unsorted.
    pub fn search_by_name(&self, keyword: &str) -> Vec<&Item> {
        let needle = keyword.to_lowercase();
        self.items
            .values()
            .filter(|it| it.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Snapshot the full item set to disk.
    ///
    /// Called after every successful mutation. A failed write is
    /// reported but the in-memory change stands; memory and disk
    /// diverge until the next successful save.
    fn persist(&self) -> Result<()> {
        let items: Vec<&Item> = self.items.values().collect();
        snapshot::save(&self.snapshot_path, &items)
    }
}
