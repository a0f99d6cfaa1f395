//! Bill payments: records of a recurring bill being paid from a card.

mod core;
mod delete_endpoint;

pub use self::core::{
    BillPayment, BillPaymentListRow, NewBillPayment, create_bill_payment,
    create_bill_payment_table, delete_bill_payment, get_bill_payment, get_recent_bill_payments,
    sum_card_bill_payments_in_range,
};
pub use delete_endpoint::delete_bill_payment_endpoint;
