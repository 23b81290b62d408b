//! Read-only handlers: listing, search, expiry triage.

use std::io::{BufRead, Write};

use larder_core::Inventory;

use crate::session::Session;
use crate::ui;

pub fn handle_list(store: &Inventory) -> anyhow::Result<()> {
    if store.is_empty() {
        println!("Inventory is empty.");
        return Ok(());
    }

    println!("\n==== CURRENT INVENTORY ====");
    ui::print_table(&store.list_all());
    println!("{}", ui::TABLE_RULE);
    println!("Total Items: {}", store.len());
    println!("Total Value: ${:.2}", store.total_value());
    Ok(())
}

pub fn handle_search<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    store: &Inventory,
) -> anyhow::Result<()> {
    println!("\n-- Search by Name --");

    let keyword = session.prompt_line("Search keyword: ")?;
    let results = store.search_by_name(&keyword);
    if results.is_empty() {
        println!("No items found matching: {}", keyword);
        return Ok(());
    }

    println!("\n==== SEARCH RESULTS FOR: {} ====", keyword);
    ui::print_table(&results);
    Ok(())
}

pub fn handle_expiring<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    store: &Inventory,
) -> anyhow::Result<()> {
    println!("\n-- Expiring Soon --");

    let days = session.prompt_i64("Days ahead to check: ")?;
    let items = store.expiring_within(days);
    if items.is_empty() {
        println!("No items expiring within the next {} days.", days);
        return Ok(());
    }

    println!("\n==== ITEMS EXPIRING WITHIN {} DAYS ====", days);
    ui::print_table(&items);
    Ok(())
}

pub fn handle_expired(store: &Inventory) -> anyhow::Result<()> {
    println!("\n-- Expired Items --");

    let items = store.expired();
    if items.is_empty() {
        println!("No expired items.");
        return Ok(());
    }

    println!("\n==== EXPIRED ITEMS ====");
    ui::print_table(&items);
    Ok(())
}
