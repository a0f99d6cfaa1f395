//! Database initialization for the application's tables.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{
    Error, bill::create_bill_table, bill_payment::create_bill_payment_table,
    card::create_card_table, category::create_category_table, spending::create_spending_table,
};

/// Create the application's tables if they do not exist.
///
/// All tables are created inside a single exclusive transaction so a
/// partially initialized schema is never committed.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_card_table(&transaction)?;
    create_category_table(&transaction)?;
    create_bill_table(&transaction)?;
    create_spending_table(&transaction)?;
    create_bill_payment_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
