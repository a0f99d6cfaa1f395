//! Reference data for recurring bill definitions.
//!
//! A [Bill] describes a recurring bill type (e.g. "Rent"). It is distinct
//! from a recorded bill *payment*, which lives in the `bill_payment` module.

use rusqlite::{Connection, Row};

use crate::{Error, database_id::BillId};

/// A recurring bill type, e.g. "Rent" or "Power".
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    /// The ID of the bill definition.
    pub id: BillId,
    /// The display name of the bill.
    pub name: String,
}

/// Create a bill definition and return it with its generated ID.
pub fn create_bill(name: &str, connection: &Connection) -> Result<Bill, Error> {
    connection.execute("INSERT INTO bill_info (name) VALUES (?1);", (name,))?;

    let id = connection.last_insert_rowid();

    Ok(Bill {
        id,
        name: name.to_owned(),
    })
}

/// Retrieve all bill definitions ordered alphabetically by name.
pub fn get_all_bills(connection: &Connection) -> Result<Vec<Bill>, Error> {
    connection
        .prepare("SELECT bill_id, name FROM bill_info ORDER BY name ASC;")?
        .query_map([], map_row)?
        .map(|maybe_bill| maybe_bill.map_err(|error| error.into()))
        .collect()
}

/// Initialize the bill definition reference table.
pub fn create_bill_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS bill_info (
            bill_id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Bill, rusqlite::Error> {
    Ok(Bill {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
