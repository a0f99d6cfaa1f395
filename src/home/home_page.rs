//! Defines the route handler for the home page with the weekly summary.

use std::{
    ops::RangeInclusive,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error, endpoints,
    home::week::{format_clock, format_month_day, week_bounds},
    html::{PAGE_CONTAINER_STYLE, base, format_amount, link},
    navigation::NavBar,
    spending::sum_spending_in_range,
    timezone::now_local,
};

/// The state needed for the home page.
#[derive(Debug, Clone)]
pub struct HomePageState {
    /// The database connection for reading spending totals.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for HomePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display the weekly spending summary for the current Monday–Sunday week.
pub async fn get_home_page(State(state): State<HomePageState>) -> Result<Response, Error> {
    let now = now_local(&state.local_timezone)?;
    let week = week_bounds(now.date());

    let weekly_total = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        sum_spending_in_range(week.clone(), &connection)
            .inspect_err(|error| tracing::error!("could not sum weekly spending: {error}"))?
    };

    Ok(home_view(now, format_amount(weekly_total), &week).into_response())
}

fn home_view(now: OffsetDateTime, weekly_total: String, week: &RangeInclusive<Date>) -> Markup {
    let nav_bar = NavBar::new(endpoints::HOME).into_html();
    let add_link = link(endpoints::ADD_TRANSACTION, "add a transaction");

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            p class="text-sm text-gray-600 dark:text-gray-400"
            {
                (now.date()) " · " (format_clock(now.time()))
            }

            h1 class="text-2xl font-bold mt-4"
            {
                "Spent this week"
            }

            p id="weekly-total" class="text-5xl font-extrabold my-4"
            {
                "$" (weekly_total)
            }

            p id="week-window" class="text-sm text-gray-600 dark:text-gray-400"
            {
                (format_month_day(*week.start())) " – " (format_month_day(*week.end()))
            }

            p class="mt-8"
            {
                "Keep it up to date: " (add_link) "."
            }
        }
    );

    base("Home", &content)
}

#[cfg(test)]
mod home_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{body::Body, extract::State, http::StatusCode, response::Response};
    use rusqlite::Connection;
    use scraper::{Html, Selector};
    use time::{Duration, OffsetDateTime};

    use crate::{
        home::week::week_bounds,
        initialize_db,
        spending::{NewSpending, create_spending},
    };

    use super::{HomePageState, get_home_page};

    fn get_test_state() -> HomePageState {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();

        HomePageState {
            db_connection: Arc::new(Mutex::new(connection)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn insert_spending(state: &HomePageState, amount: f64, date: time::Date) {
        let connection = state.db_connection.lock().unwrap();
        create_spending(
            NewSpending {
                category_id: 1,
                card_id: 1,
                amount,
                date,
            },
            &connection,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn reports_zero_total_for_empty_week() {
        let state = get_test_state();

        let response = get_home_page(State(state)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let document = parse_html(response).await;
        assert_eq!(element_text(&document, "#weekly-total"), "$0.00");
    }

    #[tokio::test]
    async fn sums_rows_inside_the_current_week() {
        let state = get_test_state();
        let today = OffsetDateTime::now_utc().date();
        insert_spending(&state, 12.50, today);
        insert_spending(&state, 7.49, today);
        // Far outside any window containing today.
        insert_spending(&state, 100.0, today - Duration::days(30));

        let response = get_home_page(State(state)).await.unwrap();

        let document = parse_html(response).await;
        assert_eq!(element_text(&document, "#weekly-total"), "$19.99");
    }

    #[tokio::test]
    async fn shows_the_week_window_as_month_day_pairs() {
        let state = get_test_state();
        let week = week_bounds(OffsetDateTime::now_utc().date());

        let response = get_home_page(State(state)).await.unwrap();

        let document = parse_html(response).await;
        let window = element_text(&document, "#week-window");
        let expected = format!(
            "{:02}/{:02} – {:02}/{:02}",
            u8::from(week.start().month()),
            week.start().day(),
            u8::from(week.end().month()),
            week.end().day(),
        );
        assert_eq!(window, expected);
    }

    fn element_text(document: &Html, css_selector: &str) -> String {
        let selector = Selector::parse(css_selector).unwrap();
        let element = document
            .select(&selector)
            .next()
            .unwrap_or_else(|| panic!("no element matching {css_selector}"));

        element.text().collect::<String>().trim().to_owned()
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX)
            .await
            .expect("Could not get response body");
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }
}
