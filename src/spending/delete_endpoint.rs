//! Defines the endpoint for deleting a spending transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error, database_id::SpendingId, endpoints, spending::core::delete_spending,
};

/// The state needed to delete a spending transaction.
#[derive(Debug, Clone)]
pub struct DeleteSpendingState {
    /// The database connection for managing spending transactions.
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteSpendingState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting a spending transaction by ID.
///
/// Redirects to the analytics view whether or not a row was deleted: deleting
/// an ID that does not exist is treated as already done, not as an error.
pub async fn delete_spending_endpoint(
    State(state): State<DeleteSpendingState>,
    Path(id): Path<SpendingId>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match delete_spending(id, &connection) {
        Ok(0) => tracing::warn!("no spending transaction with id {id} to delete"),
        Ok(_) => {}
        Err(error) => {
            tracing::error!("could not delete spending transaction {id}: {error}");
            return error.into_response();
        }
    }

    Redirect::to(endpoints::ANALYTICS).into_response()
}
