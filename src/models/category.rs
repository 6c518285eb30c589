//! Spending categories
//!
//! The category set is fixed and closed: seven kinds, each with a display
//! name, an icon and a share of the monthly budget. Every ledger carries all
//! seven for its whole life; only `allocated` and `spent` ever change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::SmartSaveError;

/// One of the fixed spending categories
///
/// The serialized form (`food`, `personal-care`, ...) is the identifier used
/// in the saved ledger and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKind {
    Food,
    Transport,
    Entertainment,
    Shopping,
    PersonalCare,
    Subscription,
    Other,
}

impl CategoryKind {
    /// All categories in display order
    pub const ALL: [CategoryKind; 7] = [
        CategoryKind::Food,
        CategoryKind::Transport,
        CategoryKind::Entertainment,
        CategoryKind::Shopping,
        CategoryKind::PersonalCare,
        CategoryKind::Subscription,
        CategoryKind::Other,
    ];

    /// Position in [`CategoryKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier
    pub const fn id(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::PersonalCare => "personal-care",
            Self::Subscription => "subscription",
            Self::Other => "other",
        }
    }

    /// Default display name
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::PersonalCare => "Personal Care",
            Self::Subscription => "Subscriptions",
            Self::Other => "Other",
        }
    }

    /// Default icon glyph
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Transport => "🚌",
            Self::Entertainment => "🎮",
            Self::Shopping => "🛍️",
            Self::PersonalCare => "💄",
            Self::Subscription => "📱",
            Self::Other => "📝",
        }
    }

    /// Share of the monthly budget, in whole percent
    ///
    /// The shares of all kinds sum to exactly 100.
    pub const fn weight_percent(self) -> i64 {
        match self {
            Self::Food => 35,
            Self::Transport => 15,
            Self::Entertainment => 20,
            Self::Shopping => 15,
            Self::PersonalCare => 5,
            Self::Subscription => 5,
            Self::Other => 5,
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

impl FromStr for CategoryKind {
    type Err = SmartSaveError;

    /// Accepts the identifier or the display name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.id().eq_ignore_ascii_case(needle)
                    || kind.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| SmartSaveError::UnknownCategory(needle.to_string()))
    }
}

/// A spending category's state within a ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub kind: CategoryKind,

    /// Display name (defaults to the kind's name)
    pub name: String,

    /// Icon glyph (defaults to the kind's icon)
    pub icon: String,

    /// This category's share of the budget
    pub allocated: Money,

    /// Sum of the category's retained expenses; may exceed `allocated`
    pub spent: Money,
}

impl Category {
    /// Create an empty category with default name and icon
    pub fn new(kind: CategoryKind) -> Self {
        Self {
            kind,
            name: kind.display_name().to_string(),
            icon: kind.icon().to_string(),
            allocated: Money::zero(),
            spent: Money::zero(),
        }
    }

    /// Spent as a percentage of allocated; 0 when nothing is allocated
    pub fn usage_percent(&self) -> f64 {
        self.spent.percent_of(self.allocated)
    }

    /// Allocated minus spent (negative when overspent)
    pub fn remaining(&self) -> Money {
        self.allocated - self.spent
    }

    /// Whether spending has gone past the allocation
    pub fn is_over_budget(&self) -> bool {
        self.usage_percent() > 100.0
    }
}

/// Split `budget` into per-category shares by weight
///
/// Shares are rounded down to the cent and the rounding remainder is given
/// to [`CategoryKind::Other`], so the shares always sum to `budget` exactly.
pub fn distribute(budget: Money) -> [Money; 7] {
    let total = i128::from(budget.cents());
    let mut shares = [Money::zero(); 7];
    let mut assigned: i128 = 0;

    for kind in CategoryKind::ALL {
        let share = total * i128::from(kind.weight_percent()) / 100;
        assigned += share;
        shares[kind.index()] = Money::from_cents(share as i64);
    }

    let other = CategoryKind::Other.index();
    shares[other] += Money::from_cents((total - assigned) as i64);
    shares
}
