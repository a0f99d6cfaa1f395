//! The transaction entry form and its validation rules.

use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    bill_payment::NewBillPayment,
    database_id::{BillId, CardId, CategoryId},
    spending::NewSpending,
};

/// Whether a submitted transaction is day-to-day spending or a bill payment.
///
/// Any other value fails form deserialization, so a bad `type` surfaces as a
/// client error rather than being silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Day-to-day spending, filed under a category.
    Spending,
    /// A payment towards a recurring bill.
    Bill,
}

/// The form data for recording a transaction.
///
/// Everything except `kind` is optional at the type level so that validation
/// can report precisely which fields are missing instead of failing with a
/// generic deserialization error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecordForm {
    /// Whether this is spending or a bill payment. Sent as the `type` field.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The value of the transaction in dollars.
    #[serde(default)]
    pub amount: Option<f64>,
    /// The date when the transaction occurred.
    #[serde(default)]
    pub date: Option<Date>,
    /// The card the transaction was charged to.
    #[serde(default)]
    pub card_id: Option<CardId>,
    /// The category for spending transactions.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// The bill definition for bill payments.
    #[serde(default)]
    pub bill_id: Option<BillId>,
}

/// A validated form, ready to be inserted into the matching table.
#[derive(Debug, Clone, PartialEq)]
pub enum NewEntry {
    /// Insert into the spending table.
    Spending(NewSpending),
    /// Insert into the bills table.
    BillPayment(NewBillPayment),
}

/// Check a submitted form against the recording rules and normalize its
/// amount to two decimal places.
///
/// # Errors
/// This function will return a:
/// - [Error::MissingRequiredFields] if amount, date or card are absent,
/// - [Error::MissingCategory] for spending without a category,
/// - or [Error::MissingBill] for a bill payment without a bill.
pub fn validate(form: RecordForm) -> Result<NewEntry, Error> {
    let (Some(amount), Some(date), Some(card_id)) = (form.amount, form.date, form.card_id) else {
        return Err(Error::MissingRequiredFields);
    };

    let amount = round_to_cents(amount);

    match form.kind {
        TransactionKind::Spending => {
            let category_id = form.category_id.ok_or(Error::MissingCategory)?;

            Ok(NewEntry::Spending(NewSpending {
                category_id,
                card_id,
                amount,
                date,
            }))
        }
        TransactionKind::Bill => {
            let bill_id = form.bill_id.ok_or(Error::MissingBill)?;

            Ok(NewEntry::BillPayment(NewBillPayment {
                bill_id,
                card_id,
                amount,
                date,
            }))
        }
    }
}

/// Round a dollar amount to two decimal places, half away from zero.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}


#[cfg(test)]
mod deserialization_tests {
    use time::macros::date;

    use super::{RecordForm, TransactionKind};

    #[test]
    fn parses_a_complete_spending_submission() {
        let form: RecordForm = serde_html_form::from_str(
            "type=spending&amount=12.50&date=2025-08-04&card_id=1&category_id=2",
        )
        .unwrap();

        assert_eq!(form.kind, TransactionKind::Spending);
        assert_eq!(form.amount, Some(12.5));
        assert_eq!(form.date, Some(date!(2025 - 08 - 04)));
        assert_eq!(form.card_id, Some(1));
        assert_eq!(form.category_id, Some(2));
        assert_eq!(form.bill_id, None);
    }

    #[test]
    fn absent_fields_parse_as_none() {
        let form: RecordForm = serde_html_form::from_str("type=bill").unwrap();

        assert_eq!(form.kind, TransactionKind::Bill);
        assert_eq!(form.amount, None);
        assert_eq!(form.date, None);
        assert_eq!(form.card_id, None);
        assert_eq!(form.bill_id, None);
    }

    #[test]
    fn empty_select_values_parse_as_none() {
        // A browser submits `category_id=` when no dropdown option is chosen.
        let form: RecordForm = serde_html_form::from_str(
            "type=spending&amount=9.99&date=2025-08-04&card_id=1&category_id=",
        )
        .unwrap();

        assert_eq!(form.category_id, None);
    }

    #[test]
    fn unknown_kind_fails_deserialization() {
        let result = serde_html_form::from_str::<RecordForm>(
            "type=transfer&amount=9.99&date=2025-08-04&card_id=1",
        );

        assert!(result.is_err());
    }
}
