//! Defines the route handler for the page with the transaction entry form.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use time::Date;

use crate::{
    AppState, Error,
    bill::{Bill, get_all_bills},
    card::{Card, get_all_cards},
    category::{Category, get_all_categories},
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_INPUT_STYLE, FORM_LABEL_STYLE, base},
    navigation::NavBar,
    timezone::now_local,
};

/// The state needed for the transaction entry page.
#[derive(Debug, Clone)]
pub struct NewEntryPageState {
    /// The database connection for reading reference data.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewEntryPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the page for recording a transaction.
///
/// The form's dropdowns are populated with all cards, categories and bill
/// definitions.
pub async fn get_new_entry_page(
    State(state): State<NewEntryPageState>,
) -> Result<Response, Error> {
    let (cards, categories, bills) = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        (
            get_all_cards(&connection)?,
            get_all_categories(&connection)?,
            get_all_bills(&connection)?,
        )
    };

    let today = now_local(&state.local_timezone)?.date();

    Ok(new_entry_view(today, &cards, &categories, &bills).into_response())
}

fn new_entry_view(
    today: Date,
    cards: &[Card],
    categories: &[Category],
    bills: &[Bill],
) -> Markup {
    let nav_bar = NavBar::new(endpoints::ADD_TRANSACTION).into_html();

    let content = html!(
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="text-xl font-bold mb-4" { "Add Transaction" }

            form
                method="POST"
                action=(endpoints::ADD_TRANSACTION)
                class="space-y-4 w-full"
            {
                fieldset class="flex flex-row gap-4"
                {
                    legend class=(FORM_LABEL_STYLE) { "Type" }

                    label
                    {
                        input type="radio" name="type" value="spending" checked;
                        " Spending"
                    }

                    label
                    {
                        input type="radio" name="type" value="bill";
                        " Bill"
                    }
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                    input
                        type="number"
                        name="amount"
                        id="amount"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        class=(FORM_INPUT_STYLE)
                        required;
                }

                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                    input
                        type="date"
                        name="date"
                        id="date"
                        value=(today)
                        class=(FORM_INPUT_STYLE)
                        required;
                }

                div
                {
                    label for="card_id" class=(FORM_LABEL_STYLE) { "Card" }
                    select name="card_id" id="card_id" class=(FORM_INPUT_STYLE) required
                    {
                        option value="" { "Select a card" }
                        @for card in cards {
                            option value=(card.id) { (card.name) }
                        }
                    }
                }

                div
                {
                    label for="category_id" class=(FORM_LABEL_STYLE) { "Category (for spending)" }
                    select name="category_id" id="category_id" class=(FORM_INPUT_STYLE)
                    {
                        option value="" { "Select a category" }
                        @for category in categories {
                            option value=(category.id) { (category.name) }
                        }
                    }
                }

                div
                {
                    label for="bill_id" class=(FORM_LABEL_STYLE) { "Bill (for bill payments)" }
                    select name="bill_id" id="bill_id" class=(FORM_INPUT_STYLE)
                    {
                        option value="" { "Select a bill" }
                        @for bill in bills {
                            option value=(bill.id) { (bill.name) }
                        }
                    }
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
            }
        }
    );

    base("Add Transaction", &content)
}

#[cfg(test)]
mod view_tests {
    use std::sync::{Arc, Mutex};

    use axum::{body::Body, extract::State, http::StatusCode, response::Response};
    use rusqlite::Connection;
    use scraper::{ElementRef, Html, Selector};

    use crate::{
        bill::create_bill, card::create_card, category::create_category, endpoints, initialize_db,
    };

    use super::{NewEntryPageState, get_new_entry_page};

    fn get_test_state() -> NewEntryPageState {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();

        create_card("Apple Card", &connection).unwrap();
        create_card("Visa Debit", &connection).unwrap();
        create_category("Groceries", &connection).unwrap();
        create_bill("Rent", &connection).unwrap();

        NewEntryPageState {
            db_connection: Arc::new(Mutex::new(connection)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    #[tokio::test]
    async fn page_renders_form_with_dropdowns() {
        let state = get_test_state();

        let response = get_new_entry_page(State(state)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let document = parse_html(response).await;
        assert_valid_html(&document);

        let form = get_form(&document);
        assert_eq!(form.value().attr("action"), Some(endpoints::ADD_TRANSACTION));
        assert_eq!(form.value().attr("method"), Some("POST"));

        assert_kind_radios(&form);
        assert_amount_input(&form);
        assert_date_input(&form);
        assert_select_options(&form, "card_id", &["Select a card", "Apple Card", "Visa Debit"]);
        assert_select_options(&form, "category_id", &["Select a category", "Groceries"]);
        assert_select_options(&form, "bill_id", &["Select a bill", "Rent"]);
    }

    fn get_form(document: &Html) -> ElementRef<'_> {
        let form_selector = Selector::parse("form").unwrap();
        let forms = document.select(&form_selector).collect::<Vec<_>>();
        assert_eq!(forms.len(), 1, "want 1 form, got {}", forms.len());

        *forms.first().unwrap()
    }

    #[track_caller]
    fn assert_kind_radios(form: &ElementRef) {
        let radio_selector = Selector::parse("input[type=radio][name=type]").unwrap();
        let values: Vec<_> = form
            .select(&radio_selector)
            .filter_map(|input| input.value().attr("value"))
            .collect();

        assert_eq!(values, vec!["spending", "bill"]);
    }

    #[track_caller]
    fn assert_amount_input(form: &ElementRef) {
        let amount_selector = Selector::parse("input[type=number][name=amount]").unwrap();
        let inputs = form.select(&amount_selector).collect::<Vec<_>>();
        assert_eq!(inputs.len(), 1, "want 1 amount input, got {}", inputs.len());

        let input = inputs.first().unwrap();
        assert!(input.value().attr("required").is_some());
        assert_eq!(input.value().attr("min"), Some("0"));
        assert_eq!(input.value().attr("step"), Some("0.01"));
    }

    #[track_caller]
    fn assert_date_input(form: &ElementRef) {
        let date_selector = Selector::parse("input[type=date][name=date]").unwrap();
        let inputs = form.select(&date_selector).collect::<Vec<_>>();
        assert_eq!(inputs.len(), 1, "want 1 date input, got {}", inputs.len());

        let input = inputs.first().unwrap();
        assert!(input.value().attr("required").is_some());
        assert!(input.value().attr("value").is_some());
    }

    #[track_caller]
    fn assert_select_options(form: &ElementRef, name: &str, expected_options: &[&str]) {
        let select_selector = Selector::parse(&format!("select[name={name}]")).unwrap();
        let selects = form.select(&select_selector).collect::<Vec<_>>();
        assert_eq!(selects.len(), 1, "want 1 {name} select, got {}", selects.len());

        let option_selector = Selector::parse("option").unwrap();
        let options: Vec<String> = selects
            .first()
            .unwrap()
            .select(&option_selector)
            .map(|option| option.text().collect::<String>())
            .collect();

        assert_eq!(options, expected_options);
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
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
