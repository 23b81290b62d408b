//! Handlers that change the inventory: add, adjust, reprice, remove.

use std::io::{BufRead, Write};

use larder_core::{Inventory, NewItem};

use crate::session::Session;
use crate::ui;

pub fn handle_add<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    store: &mut Inventory,
) -> anyhow::Result<()> {
    println!("\n-- Add Item --");

    let id = session.prompt_line("Item ID: ")?;
    let name = session.prompt_line("Name: ")?;
    let unit_price = session.prompt_f64("Price: $")?;
    let quantity = session.prompt_i64("Quantity: ")?;
    let expiry_date = session.prompt_date("Expiry date (YYYY-MM-DD): ")?;

    store.add(NewItem {
        id,
        name: name.clone(),
        unit_price,
        quantity,
        expiry_date,
    })?;
    println!("Added {}.", name);
    Ok(())
}

pub fn handle_adjust_quantity<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    store: &mut Inventory,
) -> anyhow::Result<()> {
    println!("\n-- Adjust Quantity --");

    let id = session.prompt_line("Item ID: ")?;
    // Show the current state before asking for the change, so the user
    // sees what there is to consume.
    println!("{}", ui::item_line(store.get(&id)?));

    let delta = session.prompt_i64("Quantity change (positive to restock, negative to consume): ")?;
    let updated = store.adjust_quantity(&id, delta)?;
    println!("Quantity for {} is now {}.", id, updated);
    Ok(())
}

pub fn handle_set_price<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    store: &mut Inventory,
) -> anyhow::Result<()> {
    println!("\n-- Change Price --");

    let id = session.prompt_line("Item ID: ")?;
    println!("{}", ui::item_line(store.get(&id)?));

    let new_price = session.prompt_f64("New price: $")?;
    store.set_price(&id, new_price)?;
    println!("Price for {} is now ${:.2}.", id, new_price);
    Ok(())
}

pub fn handle_remove<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    store: &mut Inventory,
) -> anyhow::Result<()> {
    println!("\n-- Remove Item --");

    let id = session.prompt_line("Item ID: ")?;
    println!("{}", ui::item_line(store.get(&id)?));

    if !session.confirm("Remove this item? (y/n): ")? {
        println!("Removal cancelled.");
        return Ok(());
    }

    let removed = store.remove(&id)?;
    println!("Removed {}.", removed.name);
    Ok(())
}
