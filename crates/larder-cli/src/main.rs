//! Larder CLI - a single-user register of perishable stock.
//!
//! This is the interactive shell around `larder-core`: it parses raw
//! text into the primitives the store needs, calls the store's
//! operations, and renders their results. Semantic validation lives in
//! the core; every store failure is printed as `Error: <message>` and
//! the menu loop continues.

mod cli;
mod commands;
mod config;
mod session;
mod ui;

use std::io::{self, BufRead, IsTerminal, Write};

use clap::Parser;
use larder_core::{Inventory, LoadReport, StoreError};

use crate::cli::Cli;
use crate::session::Session;

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && io::stderr().is_terminal();

    if let Err(e) = run(&cli, color) {
        ui::print_error(color, &format!("{}", e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, color: bool) -> anyhow::Result<()> {
    let data_path = config::resolve_data_path(cli)?;
    let (mut store, report) = Inventory::open(&data_path);

    match report {
        LoadReport::FreshStart => {
            println!("No existing inventory found. Starting empty.");
        }
        LoadReport::Loaded { items } => {
            println!("Inventory loaded: {} items.", items);
        }
        LoadReport::RecoveredEmpty { warning } => {
            ui::print_warning(
                color,
                &format!(
                    "{} Starting empty; the old file stays in place until the next change overwrites it.",
                    warning
                ),
            );
        }
    }

    let stdin = io::stdin().lock();
    let session = Session::new(stdin, io::stdout());
    menu_loop(session, &mut store, color);
    Ok(())
}

fn menu_loop<R: BufRead, W: Write>(
    mut session: Session<R, W>,
    store: &mut Inventory,
    color: bool,
) {
    loop {
        print_menu();
        let choice = match session.prompt_i64("Enter your choice: ") {
            Ok(choice) => choice,
            // Input stream closed; nothing left to do.
            Err(_) => break,
        };

        let result = match choice {
            0 => {
                println!("Goodbye.");
                break;
            }
            1 => commands::handle_add(&mut session, store),
            2 => commands::handle_adjust_quantity(&mut session, store),
            3 => commands::handle_set_price(&mut session, store),
            4 => commands::handle_remove(&mut session, store),
            5 => commands::handle_list(store),
            6 => commands::handle_search(&mut session, store),
            7 => commands::handle_expiring(&mut session, store),
            8 => commands::handle_expired(store),
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };

        if let Err(e) = result {
            ui::print_error(color, &format!("{}", e));
            // Store failures are recoverable; anything else is the
            // input stream giving out mid-workflow.
            if e.downcast_ref::<StoreError>().is_none() {
                break;
            }
        }
    }
}

fn print_menu() {
    println!();
    println!("==== LARDER ====");
    println!("1. Add item");
    println!("2. Adjust quantity");
    println!("3. Change price");
    println!("4. Remove item");
    println!("5. View all items");
    println!("6. Search by name");
    println!("7. View items expiring soon");
    println!("8. View expired items");
    println!("0. Exit");
}
