//! Defines the endpoint for recording a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use rusqlite::Connection;

use crate::{
    AppState, Error,
    bill_payment::create_bill_payment,
    endpoints,
    record::form::{NewEntry, RecordForm, validate},
    spending::create_spending,
};

/// The state needed to record a transaction.
#[derive(Debug, Clone)]
pub struct RecordTransactionState {
    /// The database connection for inserting transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for RecordTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for recording a new transaction.
///
/// Validation happens before the database is touched, so a rejected form
/// inserts nothing. On success exactly one row is inserted into the table
/// matching the submitted kind, and the client is redirected to the home
/// page.
pub async fn record_transaction_endpoint(
    State(state): State<RecordTransactionState>,
    Form(form): Form<RecordForm>,
) -> Response {
    let entry = match validate(form) {
        Ok(entry) => entry,
        Err(error) => return error.into_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    let result = match entry {
        NewEntry::Spending(new) => create_spending(new, &connection).map(|_| ()),
        NewEntry::BillPayment(new) => create_bill_payment(new, &connection).map(|_| ()),
    };

    if let Err(error) = result {
        tracing::error!("could not record transaction: {error}");
        return error.into_response();
    }

    Redirect::to(endpoints::HOME).into_response()
}
