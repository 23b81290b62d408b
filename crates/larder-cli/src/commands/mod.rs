//! Menu action handlers.
//!
//! Each handler runs one interaction: prompt for what the operation
//! needs, call the store, print the result. Store failures propagate to
//! the menu loop, which prints them and carries on.

mod mutate;
mod views;

pub use mutate::{handle_add, handle_adjust_quantity, handle_remove, handle_set_price};
pub use views::{handle_expired, handle_expiring, handle_list, handle_search};
