//! Rendering helpers for the console shell.
//!
//! Items render as fixed-width lines so the table stays legible in any
//! terminal; store failures render as `Error: <message>` with the
//! message taken verbatim from the core.

use larder_core::Item;
use owo_colors::OwoColorize;

pub const TABLE_HEADER: &str = "ID    | Name                 | Price     | Qty   | Expiry     | Status";
pub const TABLE_RULE: &str =
    "------------------------------------------------------------------------------";

/// One fixed-width line: id, name, price (2 decimals), quantity,
/// expiry date, status.
pub fn item_line(item: &Item) -> String {
    format!(
        "{:<5} | {:<20} | ${:<8.2} | {:<5} | {:<10} | {}",
        item.id,
        item.name,
        item.unit_price,
        item.quantity,
        item.expiry_date.format("%Y-%m-%d"),
        status_label(item)
    )
}

/// `EXPIRED`, or how many whole days remain.
pub fn status_label(item: &Item) -> String {
    let days = item.days_until_expiry();
    if days < 0 {
        "EXPIRED".to_string()
    } else {
        format!("{} days left", days)
    }
}

/// Print a full table: header, rule, one line per item.
pub fn print_table(items: &[&Item]) {
    println!("{}", TABLE_HEADER);
    println!("{}", TABLE_RULE);
    for item in items {
        println!("{}", item_line(item));
    }
}

pub fn print_error(color: bool, message: &str) {
    if color {
        eprintln!("{} {}", "Error:".red().bold(), message);
    } else {
        eprintln!("Error: {}", message);
    }
}

pub fn print_warning(color: bool, message: &str) {
    if color {
        eprintln!("{} {}", "Warning:".yellow().bold(), message);
    } else {
        eprintln!("Warning: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use larder_core::item::today;

    fn item(name: &str, days_out: i64) -> Item {
        Item {
            id: "P1".to_string(),
            name: name.to_string(),
            unit_price: 2.5,
            quantity: 10,
            expiry_date: today() + Duration::days(days_out),
        }
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(&item("Milk", -1)), "EXPIRED");
        assert_eq!(status_label(&item("Milk", 0)), "0 days left");
        assert_eq!(status_label(&item("Milk", 4)), "4 days left");
    }

    #[test]
    fn test_item_line_layout() {
        let line = item_line(&item("Whole Milk", 4));
        assert!(line.starts_with("P1    | Whole Milk           | $2.50"));
        assert!(line.contains("| 10    |"));
        assert!(line.ends_with("| 4 days left"));

        let expiry = (today() + Duration::days(4)).format("%Y-%m-%d").to_string();
        assert!(line.contains(&expiry));
    }

    #[test]
    fn test_item_line_price_two_decimals() {
        let mut it = item("Eggs", 10);
        it.unit_price = 4.0;
        assert!(item_line(&it).contains("$4.00"));
    }
}
