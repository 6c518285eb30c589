//! Savings goal model
//!
//! A goal accumulates contributions up to its target. `current` never goes
//! down and never exceeds `target`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Unique identifier
    pub id: GoalId,

    /// What the user is saving for
    pub name: String,

    /// Amount to reach (always positive)
    pub target: Money,

    /// Amount saved so far, in `[0, target]`
    #[serde(default)]
    pub current: Money,

    /// When the goal was created
    pub created: DateTime<Utc>,
}

impl SavingsGoal {
    /// Create a new goal with nothing saved yet
    pub fn new(id: GoalId, name: impl Into<String>, target: Money, created: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            target,
            current: Money::zero(),
            created,
        }
    }

    /// Whether the target has been reached
    pub fn is_completed(&self) -> bool {
        self.current >= self.target
    }

    /// Progress towards the target as a percentage in `[0, 100]`
    pub fn progress_percent(&self) -> f64 {
        self.current.percent_of(self.target).clamp(0.0, 100.0)
    }

    /// Amount still needed to reach the target
    pub fn remaining(&self) -> Money {
        self.target - self.current
    }

    /// Add a positive contribution, clamping at the target
    ///
    /// Returns `true` only when this contribution moved the goal from below
    /// its target to reaching it.
    pub fn contribute(&mut self, amount: Money) -> bool {
        let was_completed = self.is_completed();
        self.current = (self.current + amount).min(self.target);
        !was_completed && self.is_completed()
    }

    /// Clamp `current` into `[0, target]`, returning whether it changed
    pub fn clamp_current(&mut self) -> bool {
        let clamped = self.current.max(Money::zero()).min(self.target);
        let changed = clamped != self.current;
        self.current = clamped;
        changed
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if !self.id.in_range() {
            return Err(GoalValidationError::IdOutOfRange(self.id));
        }
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target));
        }
        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} / {})", self.name, self.current, self.target)
    }
}

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    IdOutOfRange(GoalId),
    EmptyName,
    NonPositiveTarget(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdOutOfRange(id) => write!(f, "Goal ID {} is out of range", id),
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(target) => {
                write!(f, "Goal target must be positive, got {}", target)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> SavingsGoal {
        SavingsGoal::new(GoalId::from_raw(1), "Laptop", Money::from_units(500), Utc::now())
    }

    #[test]
    fn test_contribute_clamps_at_target() {
        let mut goal = laptop();
        assert!(goal.contribute(Money::from_units(600)));
        assert_eq!(goal.current, Money::from_units(500));
        assert!(goal.is_completed());
        assert_eq!(goal.progress_percent(), 100.0);
    }

    #[test]
    fn test_completion_reported_once() {
        let mut goal = laptop();
        assert!(!goal.contribute(Money::from_units(200)));
        assert!(!goal.contribute(Money::from_units(200)));
        assert!(goal.contribute(Money::from_units(100)));
        assert!(!goal.contribute(Money::from_units(50)));
        assert_eq!(goal.current, goal.target);
    }

    #[test]
    fn test_clamp_current() {
        let mut goal = laptop();
        goal.current = Money::from_units(900);
        assert!(goal.clamp_current());
        assert_eq!(goal.current, goal.target);

        goal.current = Money::from_units(-5);
        assert!(goal.clamp_current());
        assert_eq!(goal.current, Money::zero());
        assert!(!goal.clamp_current());
    }

    #[test]
    fn test_validate() {
        let mut goal = laptop();
        assert!(goal.validate().is_ok());

        goal.name = "  ".into();
        assert_eq!(goal.validate(), Err(GoalValidationError::EmptyName));

        goal.name = "Trip".into();
        goal.target = Money::zero();
        assert!(matches!(
            goal.validate(),
            Err(GoalValidationError::NonPositiveTarget(_))
        ));

        goal.target = Money::from_units(10);
        goal.id = GoalId::from_raw(u64::MAX);
        assert!(matches!(
            goal.validate(),
            Err(GoalValidationError::IdOutOfRange(_))
        ));
    }
}
