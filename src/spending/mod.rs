//! Spending transactions: records of money spent on a card, filed under a
//! category.

mod core;
mod delete_endpoint;

pub use self::core::{
    NewSpending, Spending, SpendingListRow, create_spending, create_spending_table,
    delete_spending, get_recent_spending, get_spending, sum_spending_in_range,
};
pub use delete_endpoint::delete_spending_endpoint;
