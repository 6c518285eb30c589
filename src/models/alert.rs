//! Derived budget classifications
//!
//! Nothing here is stored. Alert levels and budget health are recomputed from
//! the ledger whenever they are needed.

use serde::Serialize;
use std::fmt;

use super::category::Category;
use super::money::Money;

/// Usage at or above which a category is `Warning`
pub const WARNING_THRESHOLD: f64 = 75.0;

/// Usage at or above which a category is `Critical`
pub const CRITICAL_THRESHOLD: f64 = 90.0;

/// How close a category is to its allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Normal,
    Warning,
    Critical,
}

impl AlertLevel {
    /// Classify a usage percentage
    pub fn from_usage(usage_percent: f64) -> Self {
        if usage_percent >= CRITICAL_THRESHOLD {
            Self::Critical
        } else if usage_percent >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    /// User-facing notification text, or `None` for `Normal`
    pub fn message(&self, category: &Category) -> Option<String> {
        let usage = category.usage_percent();
        match self {
            Self::Normal => None,
            Self::Warning => Some(format!(
                "You're approaching your {} budget limit ({:.0}%)",
                category.name, usage
            )),
            Self::Critical => Some(format!(
                "Warning: You've spent {:.0}% of your {} budget!",
                usage, category.name
            )),
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Normal => "OK",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        };
        f.pad(label)
    }
}

/// Overall state of the remaining monthly budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    /// More than 10% of the budget is left
    Healthy,
    /// Less than 10% of the budget is left
    Low,
    /// Spending has exceeded the budget
    Overspent,
}

impl BudgetHealth {
    /// Classify what is left of `budget`
    pub fn classify(budget: Money, remaining: Money) -> Self {
        if remaining.is_negative() {
            Self::Overspent
        } else if remaining.cents() * 10 < budget.cents() {
            Self::Low
        } else {
            Self::Healthy
        }
    }
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Healthy => "on track",
            Self::Low => "running low",
            Self::Overspent => "over budget",
        };
        f.pad(label)
    }
}
