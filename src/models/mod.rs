//! Core data models for SmartSave
//!
//! This module contains the data structures that represent the budgeting
//! domain: money, the fixed spending categories, expenses, savings goals and
//! the ledger that owns them.

pub mod alert;
pub mod category;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod ledger;
pub mod money;

pub use alert::{AlertLevel, BudgetHealth};
pub use category::{Category, CategoryKind};
pub use expense::Expense;
pub use goal::SavingsGoal;
pub use ids::{ExpenseId, GoalId};
pub use ledger::{Contribution, Ledger, Totals};
pub use money::Money;
