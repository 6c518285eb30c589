//! Service layer for SmartSave
//!
//! The service layer provides business logic on top of the storage layer,
//! handling write-through persistence and the notifications a mutation
//! produces.

pub mod ledger;

pub use ledger::{ExpenseReceipt, LedgerService};
