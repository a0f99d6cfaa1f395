//! Reference data for payment cards.
//!
//! Cards are maintained out of band (by `init_db`), the web app only reads
//! them to populate dropdowns and resolve display names.

use rusqlite::{Connection, Row};

use crate::{Error, database_id::CardId};

/// A payment card that spending and bill payments are charged to.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// The ID of the card.
    pub id: CardId,
    /// The display name of the card, e.g. "Apple Card".
    pub name: String,
}

/// Create a card and return it with its generated ID.
pub fn create_card(name: &str, connection: &Connection) -> Result<Card, Error> {
    connection.execute("INSERT INTO card_info (name) VALUES (?1);", (name,))?;

    let id = connection.last_insert_rowid();

    Ok(Card {
        id,
        name: name.to_owned(),
    })
}

/// Retrieve a single card by ID.
pub fn get_card(card_id: CardId, connection: &Connection) -> Result<Card, Error> {
    connection
        .prepare("SELECT card_id, name FROM card_info WHERE card_id = :id;")?
        .query_row(&[(":id", &card_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all cards ordered alphabetically by name.
pub fn get_all_cards(connection: &Connection) -> Result<Vec<Card>, Error> {
    connection
        .prepare("SELECT card_id, name FROM card_info ORDER BY name ASC;")?
        .query_map([], map_row)?
        .map(|maybe_card| maybe_card.map_err(|error| error.into()))
        .collect()
}

/// Initialize the card reference table.
pub fn create_card_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS card_info (
            card_id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Card, rusqlite::Error> {
    Ok(Card {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

#[cfg(test)]
mod card_query_tests {
    use rusqlite::Connection;

    use crate::Error;

    use super::{create_card, create_card_table, get_all_cards, get_card};

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_card_table(&connection).expect("Could not create card table");
        connection
    }

    #[test]
    fn create_card_succeeds() {
        let connection = get_test_db_connection();

        let card = create_card("Apple Card", &connection).expect("Could not create card");

        assert!(card.id > 0);
        assert_eq!(card.name, "Apple Card");
    }

    #[test]
    fn get_card_succeeds() {
        let connection = get_test_db_connection();
        let inserted_card =
            create_card("Visa Debit", &connection).expect("Could not create test card");

        let selected_card = get_card(inserted_card.id, &connection);

        assert_eq!(Ok(inserted_card), selected_card);
    }

    #[test]
    fn get_card_fails_with_invalid_id() {
        let connection = get_test_db_connection();

        let selected_card = get_card(1337, &connection);

        assert_eq!(selected_card, Err(Error::NotFound));
    }

    #[test]
    fn get_all_cards_orders_by_name() {
        let connection = get_test_db_connection();
        create_card("Visa Debit", &connection).unwrap();
        create_card("Apple Card", &connection).unwrap();

        let cards = get_all_cards(&connection).expect("Could not get cards");

        let names: Vec<_> = cards.iter().map(|card| card.name.as_str()).collect();
        assert_eq!(names, vec!["Apple Card", "Visa Debit"]);
    }
}
