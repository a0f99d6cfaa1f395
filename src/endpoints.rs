//! The application's endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/delete/{id}', use
//! [format_endpoint].

/// The home page showing the weekly spending summary.
pub const HOME: &str = "/";
/// The page for recording a new transaction (GET form, POST submit).
pub const ADD_TRANSACTION: &str = "/add";
/// The page listing recent activity and the tracked card's rolling total.
pub const ANALYTICS: &str = "/analytics";
/// The route to delete a spending transaction.
pub const DELETE_SPENDING: &str = "/delete/{id}";
/// The route to delete a bill payment.
pub const DELETE_BILL: &str = "/delete_bill/{id}";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/delete/{id}', '{id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter. If no parameter is found in `endpoint_path`, the
/// function returns the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
