//! Error types for Larder core operations.
//!
//! Every failure here is an expected, recoverable condition: the CLI
//! layer prints the message and returns to its loop. Nothing in this
//! taxonomy is process-fatal.

use thiserror::Error;

/// Result type alias for Larder operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Core error type for inventory operations.
///
/// Messages are written to be shown to the user verbatim, prefixed with
/// `Error: ` by the shell.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An item with this id is already registered
    #[error("Item with ID {0} already exists.")]
    DuplicateId(String),

    /// Unit price must be strictly positive
    #[error("Price must be greater than zero.")]
    InvalidPrice,

    /// Quantity on entry must be non-negative
    #[error("Quantity cannot be negative.")]
    InvalidQuantity,

    /// Expiry date was already in the past when the item was added
    #[error("Cannot add an item that is already expired.")]
    ExpiredOnEntry,

    /// No item with this id
    #[error("Item with ID {0} not found.")]
    NotFound(String),

    /// A quantity adjustment would take the stock below zero
    #[error("Not enough stock. Current quantity: {current}")]
    InsufficientQuantity { current: u32 },

    /// Snapshot write failed. The in-memory mutation that triggered the
    /// write is NOT rolled back; memory and disk diverge until the next
    /// successful save.
    #[error("Failed to save inventory: {0}")]
    PersistenceWriteFailed(String),

    /// Snapshot exists but could not be read or parsed at startup. The
    /// store recovers empty; callers surface this as a warning.
    #[error("Failed to load inventory: {0}")]
    PersistenceLoadFailed(String),
}
