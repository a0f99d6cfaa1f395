//! Defines the route handler for the analytics page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    analytics::window::rolling_window,
    bill_payment::{
        BillPaymentListRow, get_recent_bill_payments, sum_card_bill_payments_in_range,
    },
    card::get_card,
    database_id::CardId,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, format_amount,
    },
    navigation::NavBar,
    spending::{SpendingListRow, get_recent_spending},
    timezone::now_local,
};

/// How many spending rows the recent-activity list shows.
const SPENDING_LIST_LIMIT: u32 = 10;
/// How many bill payment rows the recent-activity list shows.
const BILL_LIST_LIMIT: u32 = 8;

/// The state needed for the analytics page.
#[derive(Debug, Clone)]
pub struct AnalyticsPageState {
    /// The database connection for reading recent activity.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    /// The card whose rolling bill total is highlighted.
    pub tracked_card_id: CardId,
}

impl FromRef<AppState> for AnalyticsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
            tracked_card_id: state.tracked_card_id,
        }
    }
}

/// Display recent spending and bill payments plus the tracked card's bill
/// total over a 13-day window centered on today.
pub async fn get_analytics_page(
    State(state): State<AnalyticsPageState>,
) -> Result<Response, Error> {
    let today = now_local(&state.local_timezone)?.date();
    let window = rolling_window(today);

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let recent_spending = get_recent_spending(SPENDING_LIST_LIMIT, &connection)
        .inspect_err(|error| tracing::error!("could not get recent spending: {error}"))?;
    let recent_bill_payments = get_recent_bill_payments(BILL_LIST_LIMIT, &connection)
        .inspect_err(|error| tracing::error!("could not get recent bill payments: {error}"))?;
    let tracked_card_total =
        sum_card_bill_payments_in_range(state.tracked_card_id, window, &connection)
            .inspect_err(|error| tracing::error!("could not sum tracked card bills: {error}"))?;

    let tracked_card_name = match get_card(state.tracked_card_id, &connection) {
        Ok(card) => card.name,
        Err(Error::NotFound) => {
            tracing::warn!(
                "tracked card {} is not in the card_info table",
                state.tracked_card_id
            );
            format!("Card {}", state.tracked_card_id)
        }
        Err(error) => return Err(error),
    };

    Ok(analytics_view(
        &recent_spending,
        &recent_bill_payments,
        &tracked_card_name,
        tracked_card_total,
    )
    .into_response())
}

fn analytics_view(
    recent_spending: &[SpendingListRow],
    recent_bill_payments: &[BillPaymentListRow],
    tracked_card_name: &str,
    tracked_card_total: f64,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::ANALYTICS).into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            section id="tracked-card" class="mb-8 text-center"
            {
                h2 class="text-xl font-semibold" { (tracked_card_name) " bills, two weeks around today" }

                p id="tracked-card-total" class="text-4xl font-extrabold my-2"
                {
                    "$" (format_amount(tracked_card_total))
                }
            }

            section id="recent-spending" class="mb-8 w-full max-w-screen-md"
            {
                h2 class="text-xl font-semibold mb-4" { "Recent Spending" }

                @if recent_spending.is_empty() {
                    p { "No spending recorded yet." }
                } @else {
                    table class="w-full text-sm text-left"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th class=(TABLE_CELL_STYLE) { "Date" }
                                th class=(TABLE_CELL_STYLE) { "Category" }
                                th class=(TABLE_CELL_STYLE) { "Card" }
                                th class=(TABLE_CELL_STYLE) { "Amount" }
                                th class=(TABLE_CELL_STYLE) { "" }
                            }
                        }

                        tbody
                        {
                            @for row in recent_spending {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    td class=(TABLE_CELL_STYLE) { (row.date) }
                                    td class=(TABLE_CELL_STYLE) { (row.category) }
                                    td class=(TABLE_CELL_STYLE) { (row.card) }
                                    td class=(TABLE_CELL_STYLE) { "$" (format_amount(row.amount)) }
                                    td class=(TABLE_CELL_STYLE)
                                    {
                                        form
                                            method="POST"
                                            action=(format_endpoint(endpoints::DELETE_SPENDING, row.id))
                                        {
                                            button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section id="recent-bills" class="w-full max-w-screen-md"
            {
                h2 class="text-xl font-semibold mb-4" { "Recent Bill Payments" }

                @if recent_bill_payments.is_empty() {
                    p { "No bill payments recorded yet." }
                } @else {
                    table class="w-full text-sm text-left"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th class=(TABLE_CELL_STYLE) { "Date" }
                                th class=(TABLE_CELL_STYLE) { "Bill" }
                                th class=(TABLE_CELL_STYLE) { "Card" }
                                th class=(TABLE_CELL_STYLE) { "Amount" }
                                th class=(TABLE_CELL_STYLE) { "" }
                            }
                        }

                        tbody
                        {
                            @for row in recent_bill_payments {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    td class=(TABLE_CELL_STYLE) { (row.date) }
                                    td class=(TABLE_CELL_STYLE) { (row.bill) }
                                    td class=(TABLE_CELL_STYLE) { (row.card) }
                                    td class=(TABLE_CELL_STYLE) { "$" (format_amount(row.amount)) }
                                    td class=(TABLE_CELL_STYLE)
                                    {
                                        form
                                            method="POST"
                                            action=(format_endpoint(endpoints::DELETE_BILL, row.id))
                                        {
                                            button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Analytics", &content)
}
