//! Recording new transactions: the entry form and its submit endpoint.

mod create_endpoint;
mod form;
mod new_entry_page;

pub use create_endpoint::record_transaction_endpoint;
pub use form::{NewEntry, RecordForm, TransactionKind, round_to_cents, validate};
pub use new_entry_page::get_new_entry_page;
