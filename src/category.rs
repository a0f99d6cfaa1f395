//! Reference data for spending categories.

use rusqlite::{Connection, Row};

use crate::{Error, database_id::CategoryId};

/// A category that spending transactions are filed under, e.g. "Groceries".
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The display name of the category.
    pub name: String,
}

/// Create a category and return it with its generated ID.
pub fn create_category(name: &str, connection: &Connection) -> Result<Category, Error> {
    connection.execute("INSERT INTO category_info (name) VALUES (?1);", (name,))?;

    let id = connection.last_insert_rowid();

    Ok(Category {
        id,
        name: name.to_owned(),
    })
}

/// Retrieve all categories ordered alphabetically by name.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT category_id, name FROM category_info ORDER BY name ASC;")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Initialize the category reference table.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS category_info (
            category_id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
