//! Defines the core data model and database queries for spending
//! transactions.

use std::ops::RangeInclusive;

use rusqlite::{Connection, Row};
use time::Date;

use crate::{
    Error,
    database_id::{CardId, CategoryId, SpendingId},
};

// ============================================================================
// MODELS
// ============================================================================

/// A record of money spent on a card, filed under a category.
///
/// Spending rows are immutable once created, except for deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct Spending {
    /// The ID of the spending transaction.
    pub id: SpendingId,
    /// The category the spending is filed under.
    pub category_id: CategoryId,
    /// The card the spending was charged to.
    pub card_id: CardId,
    /// The amount of money spent, normalized to two decimal places.
    pub amount: f64,
    /// When the spending happened.
    pub date: Date,
}

/// The data needed to create a [Spending] row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSpending {
    /// The category the spending is filed under.
    pub category_id: CategoryId,
    /// The card the spending was charged to.
    pub card_id: CardId,
    /// The amount of money spent, normalized to two decimal places.
    pub amount: f64,
    /// When the spending happened.
    pub date: Date,
}

/// A spending row joined with its category and card names for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingListRow {
    /// The ID of the spending transaction.
    pub id: SpendingId,
    /// When the spending happened.
    pub date: Date,
    /// The amount of money spent.
    pub amount: f64,
    /// The display name of the category.
    pub category: String,
    /// The display name of the card.
    pub card: String,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new spending transaction in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_spending(new: NewSpending, connection: &Connection) -> Result<Spending, Error> {
    let spending = connection
        .prepare(
            "INSERT INTO spending (category_id, card_id, amount, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, category_id, card_id, amount, date",
        )?
        .query_row(
            (new.category_id, new.card_id, new.amount, new.date),
            map_spending_row,
        )?;

    Ok(spending)
}

/// Retrieve a spending transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid spending row,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_spending(id: SpendingId, connection: &Connection) -> Result<Spending, Error> {
    let spending = connection
        .prepare("SELECT id, category_id, card_id, amount, date FROM spending WHERE id = :id")?
        .query_row(&[(":id", &id)], map_spending_row)?;

    Ok(spending)
}

/// Delete a spending transaction by its `id`, returning the number of rows
/// that were deleted (zero when `id` does not exist).
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn delete_spending(id: SpendingId, connection: &Connection) -> Result<usize, Error> {
    connection
        .execute("DELETE FROM spending WHERE id = :id", &[(":id", &id)])
        .map_err(|error| error.into())
}

/// Sum the spending amounts with a date inside `range` (inclusive on both
/// ends), returning `0.0` when no rows match.
///
/// Dates are stored as ISO `YYYY-MM-DD` strings, so the lexicographic
/// `BETWEEN` in SQL is also a chronological comparison.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn sum_spending_in_range(
    range: RangeInclusive<Date>,
    connection: &Connection,
) -> Result<f64, Error> {
    connection
        .query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM spending WHERE date BETWEEN ?1 AND ?2",
            (range.start(), range.end()),
            |row| row.get(0),
        )
        .map_err(|error| error.into())
}

/// Retrieve the `limit` most recent spending rows joined with their category
/// and card names, newest date first.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_recent_spending(
    limit: u32,
    connection: &Connection,
) -> Result<Vec<SpendingListRow>, Error> {
    connection
        .prepare(
            "SELECT s.id, s.date, s.amount, c.name, card.name
             FROM spending s
             JOIN category_info c ON s.category_id = c.category_id
             JOIN card_info card ON s.card_id = card.card_id
             ORDER BY s.date DESC, s.id DESC
             LIMIT :limit",
        )?
        .query_map(&[(":limit", &limit)], |row| {
            Ok(SpendingListRow {
                id: row.get(0)?,
                date: row.get(1)?,
                amount: row.get(2)?,
                category: row.get(3)?,
                card: row.get(4)?,
            })
        })?
        .map(|maybe_row| maybe_row.map_err(|error| error.into()))
        .collect()
}

/// Create the spending table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_spending_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS spending (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category_id INTEGER NOT NULL,
                card_id INTEGER NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    // Covers the weekly total and recent-activity queries.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_spending_date ON spending(date);",
        (),
    )?;

    Ok(())
}

fn map_spending_row(row: &Row) -> Result<Spending, rusqlite::Error> {
    Ok(Spending {
        id: row.get(0)?,
        category_id: row.get(1)?,
        card_id: row.get(2)?,
        amount: row.get(3)?,
        date: row.get(4)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
