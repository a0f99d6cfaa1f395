//! Defines the core data model and database queries for bill payments.

use std::ops::RangeInclusive;

use rusqlite::{Connection, Row};
use time::Date;

use crate::{
    Error,
    database_id::{BillId, BillPaymentId, CardId},
};

/// A record of a recurring bill being paid from a card.
///
/// Bill payments are immutable once created, except for deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct BillPayment {
    /// The ID of the bill payment.
    pub id: BillPaymentId,
    /// The bill definition this payment was for.
    pub bill_id: BillId,
    /// The card the payment was charged to.
    pub card_id: CardId,
    /// The amount paid, normalized to two decimal places.
    pub amount: f64,
    /// When the payment happened.
    pub date: Date,
}

/// The data needed to create a [BillPayment] row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBillPayment {
    /// The bill definition this payment was for.
    pub bill_id: BillId,
    /// The card the payment was charged to.
    pub card_id: CardId,
    /// The amount paid, normalized to two decimal places.
    pub amount: f64,
    /// When the payment happened.
    pub date: Date,
}

/// A bill payment joined with its bill and card names for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BillPaymentListRow {
    /// The ID of the bill payment.
    pub id: BillPaymentId,
    /// When the payment happened.
    pub date: Date,
    /// The amount paid.
    pub amount: f64,
    /// The display name of the bill definition.
    pub bill: String,
    /// The display name of the card.
    pub card: String,
}

/// Create a new bill payment in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_bill_payment(
    new: NewBillPayment,
    connection: &Connection,
) -> Result<BillPayment, Error> {
    let bill_payment = connection
        .prepare(
            "INSERT INTO bills (bill_id, card_id, amount, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, bill_id, card_id, amount, date",
        )?
        .query_row(
            (new.bill_id, new.card_id, new.amount, new.date),
            map_bill_payment_row,
        )?;

    Ok(bill_payment)
}

/// Retrieve a bill payment from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid bill payment,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_bill_payment(id: BillPaymentId, connection: &Connection) -> Result<BillPayment, Error> {
    let bill_payment = connection
        .prepare("SELECT id, bill_id, card_id, amount, date FROM bills WHERE id = :id")?
        .query_row(&[(":id", &id)], map_bill_payment_row)?;

    Ok(bill_payment)
}

/// Delete a bill payment by its `id`, returning the number of rows that were
/// deleted (zero when `id` does not exist).
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn delete_bill_payment(id: BillPaymentId, connection: &Connection) -> Result<usize, Error> {
    connection
        .execute("DELETE FROM bills WHERE id = :id", &[(":id", &id)])
        .map_err(|error| error.into())
}

/// Sum the bill payments charged to `card_id` with a date inside `range`
/// (inclusive on both ends), returning `0.0` when no rows match.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn sum_card_bill_payments_in_range(
    card_id: CardId,
    range: RangeInclusive<Date>,
    connection: &Connection,
) -> Result<f64, Error> {
    connection
        .query_row(
            "SELECT COALESCE(SUM(amount), 0.0)
             FROM bills
             WHERE card_id = ?1 AND date BETWEEN ?2 AND ?3",
            (card_id, range.start(), range.end()),
            |row| row.get(0),
        )
        .map_err(|error| error.into())
}

/// Retrieve the `limit` most recent bill payments joined with their bill and
/// card names, newest date first.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_recent_bill_payments(
    limit: u32,
    connection: &Connection,
) -> Result<Vec<BillPaymentListRow>, Error> {
    connection
        .prepare(
            "SELECT b.id, b.date, b.amount, bi.name, card.name
             FROM bills b
             JOIN bill_info bi ON b.bill_id = bi.bill_id
             JOIN card_info card ON b.card_id = card.card_id
             ORDER BY b.date DESC, b.id DESC
             LIMIT :limit",
        )?
        .query_map(&[(":limit", &limit)], |row| {
            Ok(BillPaymentListRow {
                id: row.get(0)?,
                date: row.get(1)?,
                amount: row.get(2)?,
                bill: row.get(3)?,
                card: row.get(4)?,
            })
        })?
        .map(|maybe_row| maybe_row.map_err(|error| error.into()))
        .collect()
}

/// Create the bills table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_bill_payment_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS bills (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                bill_id INTEGER NOT NULL,
                card_id INTEGER NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    // Covers the rolling card total and recent-activity queries.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_bills_card_date ON bills(card_id, date);",
        (),
    )?;

    Ok(())
}

fn map_bill_payment_row(row: &Row) -> Result<BillPayment, rusqlite::Error> {
    Ok(BillPayment {
        id: row.get(0)?,
        bill_id: row.get(1)?,
        card_id: row.get(2)?,
        amount: row.get(3)?,
        date: row.get(4)?,
    })
}

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        bill::create_bill,
        bill_payment::{
            NewBillPayment, create_bill_payment, delete_bill_payment, get_bill_payment,
            get_recent_bill_payments, sum_card_bill_payments_in_range,
        },
        card::create_card,
        db::initialize,
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn new_bill_payment(card_id: i64, amount: f64, date: time::Date) -> NewBillPayment {
        NewBillPayment {
            bill_id: 1,
            card_id,
            amount,
            date,
        }
    }

    #[test]
    fn create_and_get_round_trip() {
        let conn = get_test_connection();

        let inserted =
            create_bill_payment(new_bill_payment(1, 45.0, date!(2025 - 10 - 05)), &conn).unwrap();
        let selected = get_bill_payment(inserted.id, &conn).unwrap();

        assert_eq!(inserted, selected);
    }

    #[test]
    fn delete_of_missing_id_affects_no_rows() {
        let conn = get_test_connection();

        let rows_affected = delete_bill_payment(999, &conn).unwrap();

        assert_eq!(rows_affected, 0);
    }

    #[test]
    fn delete_removes_the_row() {
        let conn = get_test_connection();
        let payment =
            create_bill_payment(new_bill_payment(1, 45.0, date!(2025 - 10 - 05)), &conn).unwrap();

        let rows_affected = delete_bill_payment(payment.id, &conn).unwrap();

        assert_eq!(rows_affected, 1);
        assert_eq!(get_bill_payment(payment.id, &conn), Err(Error::NotFound));
    }

    #[test]
    fn card_sum_only_counts_matching_card_and_range() {
        let conn = get_test_connection();
        let range = date!(2025 - 10 - 01)..=date!(2025 - 10 - 13);
        create_bill_payment(new_bill_payment(1, 45.0, date!(2025 - 10 - 01)), &conn).unwrap();
        create_bill_payment(new_bill_payment(1, 10.0, date!(2025 - 10 - 13)), &conn).unwrap();
        // Wrong card.
        create_bill_payment(new_bill_payment(2, 99.0, date!(2025 - 10 - 05)), &conn).unwrap();
        // Outside the range.
        create_bill_payment(new_bill_payment(1, 99.0, date!(2025 - 10 - 14)), &conn).unwrap();

        let total = sum_card_bill_payments_in_range(1, range, &conn).unwrap();

        assert_eq!(total, 55.0);
    }

    #[test]
    fn card_sum_is_zero_with_no_matches() {
        let conn = get_test_connection();

        let total =
            sum_card_bill_payments_in_range(1, date!(2025 - 10 - 01)..=date!(2025 - 10 - 13), &conn)
                .unwrap();

        assert_eq!(total, 0.0);
    }

    #[test]
    fn recent_rows_are_joined_capped_and_newest_first() {
        let conn = get_test_connection();
        let rent = create_bill("Rent", &conn).unwrap();
        let card = create_card("Apple Card", &conn).unwrap();

        for day in 1..=3u8 {
            create_bill_payment(
                NewBillPayment {
                    bill_id: rent.id,
                    card_id: card.id,
                    amount: day as f64,
                    date: date!(2025 - 10 - 01).replace_day(day).unwrap(),
                },
                &conn,
            )
            .unwrap();
        }

        let rows = get_recent_bill_payments(2, &conn).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, date!(2025 - 10 - 03));
        assert_eq!(rows[0].bill, "Rent");
        assert_eq!(rows[0].card, "Apple Card");
        assert_eq!(rows[1].date, date!(2025 - 10 - 02));
    }
}
