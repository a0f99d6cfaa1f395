//! Defines the endpoint for deleting a bill payment.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error, bill_payment::core::delete_bill_payment, database_id::BillPaymentId,
    endpoints,
};

/// The state needed to delete a bill payment.
#[derive(Debug, Clone)]
pub struct DeleteBillPaymentState {
    /// The database connection for managing bill payments.
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteBillPaymentState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting a bill payment by ID.
///
/// Redirects to the analytics view whether or not a row was deleted.
pub async fn delete_bill_payment_endpoint(
    State(state): State<DeleteBillPaymentState>,
    Path(id): Path<BillPaymentId>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match delete_bill_payment(id, &connection) {
        Ok(0) => tracing::warn!("no bill payment with id {id} to delete"),
        Ok(_) => {}
        Err(error) => {
            tracing::error!("could not delete bill payment {id}: {error}");
            return error.into_response();
        }
    }

    Redirect::to(endpoints::ANALYTICS).into_response()
}
