//! Inventory ledger.
//!
//! In-memory bookkeeping for item stock, reorder points, suppliers, purchase
//! orders, restock history and return requests. The only IO is the plain-text
//! restocking report export.

pub mod config;
pub mod export;
pub mod item;
pub mod ledger;
pub mod purchasing;
pub mod returns;
pub mod supplier;

pub use config::LedgerConfig;
pub use export::ExportError;
pub use item::{ExpiryStatus, InventoryItem};
pub use ledger::InventoryLedger;
pub use purchasing::{PurchaseOrder, RestockRecord, RestockSummary};
pub use returns::{ReturnRequest, ReturnStatus};
pub use supplier::Supplier;

pub use stockbook_core::{
    Clock, DomainError, DomainResult, FixedClock, ItemId, Key, SupplierId, SystemClock,
};
