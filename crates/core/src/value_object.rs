//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Ledger history entries (purchase orders, restock receipts, return
/// requests) carry no identity of their own and are compared field by field.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
