//! Expense model
//!
//! An expense is a single positive outflow booked against one category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryKind;
use super::ids::ExpenseId;
use super::money::Money;

/// Description stored when the user leaves it blank
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// The category this expense counts against
    pub category: CategoryKind,

    /// Free text, never empty
    #[serde(default = "default_description")]
    pub description: String,

    /// When the expense was recorded
    pub date: DateTime<Utc>,

    /// `date` as epoch milliseconds, used for recency ordering
    pub timestamp: i64,
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

impl Expense {
    /// Create a new expense recorded at `date`
    pub fn new(
        id: ExpenseId,
        amount: Money,
        category: CategoryKind,
        description: &str,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            amount,
            category,
            description: normalize_description(description),
            date,
            timestamp: date.timestamp_millis(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.id.in_range() {
            return Err(ExpenseValidationError::IdOutOfRange(self.id));
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

/// Trim a description, substituting the placeholder when nothing is left
pub fn normalize_description(description: &str) -> String {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        default_description()
    } else {
        trimmed.to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.amount, self.description, self.category)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    IdOutOfRange(ExpenseId),
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdOutOfRange(id) => write!(f, "Expense ID {} is out of range", id),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
