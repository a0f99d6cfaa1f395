//! The fallback page for unrouted paths.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// A route handler that serves the 404 page for any unmatched path.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Get a response containing the rendered 404 page.
pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Page Not Found",
            "404",
            "Whoops! That page does not exist.",
            "Check the address, or head back home below.",
        ),
    )
        .into_response()
}
