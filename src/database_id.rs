//! Database ID type definitions.

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;

/// The ID of a row in the spending table.
pub type SpendingId = DatabaseId;
/// The ID of a row in the bills (bill payment) table.
pub type BillPaymentId = DatabaseId;
/// The ID of a payment card.
pub type CardId = DatabaseId;
/// The ID of a spending category.
pub type CategoryId = DatabaseId;
/// The ID of a recurring bill definition.
pub type BillId = DatabaseId;
