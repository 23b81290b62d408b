//! # Larder Core
//!
//! Core library for Larder - a single-user register of perishable stock.
//!
//! This crate provides the record store and query engine independent of
//! the CLI interface: the data model, the mutation/validation rules, the
//! derived views (expiry triage, valuation, name search), and snapshot
//! persistence.
//!
//! ## Architecture
//!
//! - **item**: The `Item` data model and its derived views
//! - **store**: The `Inventory` keyed store - mutations, queries, load/save
//! - **snapshot**: JSON snapshot persistence with atomic replace
//! - **error**: The error taxonomy shared by all operations
//!
//! The store is single-actor by design: one interactive session, every
//! operation synchronous and run to completion. A multi-actor port would
//! need a single mutual-exclusion boundary around each
//! read-modify-persist sequence; none is taken here.

pub mod error;
pub mod fs;
pub mod item;
pub mod snapshot;
pub mod store;

pub use error::{Result, StoreError};
pub use item::{Item, NewItem};
pub use snapshot::LoadReport;
pub use store::Inventory;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
