use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use spendu::{create_bill, create_card, create_category, initialize_db};

/// A utility for creating and seeding the SpendU database.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// Skip seeding the reference tables (cards, categories, bills).
    #[arg(long)]
    no_seed: bool,
}

/// Create the database file and populate the reference tables.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'spending.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'spending.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    if !args.no_seed {
        println!("Seeding reference data...");

        for name in ["Apple Card", "Visa Debit"] {
            create_card(name, &conn)?;
        }

        for name in ["Dining", "Entertainment", "Groceries", "Transport"] {
            create_category(name, &conn)?;
        }

        for name in ["Internet", "Phone", "Power", "Rent"] {
            create_bill(name, &conn)?;
        }
    }

    println!("Success!");

    Ok(())
}
