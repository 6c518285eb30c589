//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger for terminal display,
//! including tables, progress bars and status indicators.

pub mod category;
pub mod expense;
pub mod goal;
pub mod summary;

pub use category::{format_budget_overview, format_category_table};
pub use expense::format_expense_list;
pub use goal::format_goal_list;
pub use summary::format_summary;
