//! The item data model and its derived views.
//!
//! An `Item` is one tracked stock-keeping unit. The stored fields are
//! exactly what the snapshot persists; expiry status, days remaining,
//! and line value are derived on demand against a calendar date.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single tracked stock-keeping unit.
///
/// `id` and `name` and `expiry_date` are immutable after creation;
/// `unit_price` and `quantity` change only through `Inventory` methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, the primary key of the store
    pub id: String,

    /// User-facing name (e.g., "Whole Milk")
    pub name: String,

    /// Price per unit, strictly positive
    pub unit_price: f64,

    /// Units currently in stock
    pub quantity: u32,

    /// Calendar expiry date, no time component
    pub expiry_date: NaiveDate,
}

/// Input for registering a new item.
///
/// Quantity is signed here so that the store, not the shell, rejects
/// negative values.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
}

impl Item {
    /// Whether this item was expired as of `today` (strictly before).
    ///
    /// An item expiring exactly on `today` is not yet expired.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }

    /// Whether this item is expired as of the local calendar date.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(today())
    }

    /// Whole days from `today` until expiry; negative once expired.
    pub fn days_until_expiry_on(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    /// Whole days from the local calendar date until expiry.
    pub fn days_until_expiry(&self) -> i64 {
        self.days_until_expiry_on(today())
    }

    /// Line value of this item: unit price times quantity in stock.
    pub fn total_value(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// The local calendar date, the store's notion of "now".
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
