//! Ledger service
//!
//! Wraps the ledger mutators with write-through persistence. Every successful
//! mutation saves the whole ledger before returning. A failed save is
//! reported to the caller but the in-memory change stays in place, so reads
//! after a persistence error reflect what the user asked for.

use serde_json::Value;
use tracing::{debug, info};

use crate::error::SmartSaveResult;
use crate::models::{
    AlertLevel, CategoryKind, Contribution, Expense, ExpenseId, GoalId, Ledger, Money,
    SavingsGoal, Totals,
};
use crate::storage::{merge_value, MergeMode, MergeReport, Storage};

/// Service for budget, expense and goal management
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

/// What recording an expense produced
#[derive(Debug, Clone)]
pub struct ExpenseReceipt {
    pub expense: Expense,
    /// The category's alert level after the expense
    pub alert: AlertLevel,
    /// Notification text when `alert` is not `Normal`
    pub message: Option<String>,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// A copy of the current ledger
    pub fn ledger(&self) -> SmartSaveResult<Ledger> {
        self.storage.ledger.get()
    }

    /// Dashboard totals
    pub fn totals(&self) -> SmartSaveResult<Totals> {
        Ok(self.storage.ledger.get()?.totals())
    }

    /// Set the monthly budget and re-derive the allocations
    pub fn set_budget(&self, amount: Money) -> SmartSaveResult<()> {
        self.storage.ledger.update(|ledger| ledger.set_budget(amount))?;
        debug!(budget = %amount, "budget set");
        self.storage.ledger.save()
    }

    /// Record an expense and report the category's resulting alert level
    pub fn add_expense(
        &self,
        amount: Money,
        category: CategoryKind,
        description: &str,
    ) -> SmartSaveResult<ExpenseReceipt> {
        let receipt = self.storage.ledger.update(|ledger| {
            let expense = ledger.add_expense(amount, category, description)?;
            let alert = ledger.budget_alert_level(category);
            let message = alert.message(ledger.category(category));
            Ok(ExpenseReceipt {
                expense,
                alert,
                message,
            })
        })?;

        debug!(
            id = %receipt.expense.id,
            amount = %amount,
            category = category.id(),
            alert = %receipt.alert,
            "expense added"
        );
        self.storage.ledger.save()?;
        Ok(receipt)
    }

    /// Delete an expense; `None` when no expense has that id
    pub fn delete_expense(&self, id: ExpenseId) -> SmartSaveResult<Option<Expense>> {
        let removed = self
            .storage
            .ledger
            .update(|ledger| Ok(ledger.delete_expense(id)))?;

        match &removed {
            Some(expense) => {
                debug!(id = %expense.id, "expense deleted");
                self.storage.ledger.save()?;
            }
            None => debug!(id = %id, "no expense to delete"),
        }
        Ok(removed)
    }

    /// Create a savings goal
    pub fn create_goal(&self, name: &str, target: Money) -> SmartSaveResult<SavingsGoal> {
        let goal = self
            .storage
            .ledger
            .update(|ledger| ledger.create_savings_goal(name, target))?;
        debug!(id = %goal.id, target = %target, "savings goal created");
        self.storage.ledger.save()?;
        Ok(goal)
    }

    /// Contribute to a goal; `None` when no goal has that id
    pub fn contribute(&self, id: GoalId, amount: Money) -> SmartSaveResult<Option<Contribution>> {
        let contribution = self
            .storage
            .ledger
            .update(|ledger| ledger.contribute_to_goal(id, amount))?;

        match &contribution {
            Some(c) => {
                debug!(id = %id, applied = %c.applied, completed = c.completed, "goal contribution");
                self.storage.ledger.save()?;
            }
            None => debug!(id = %id, "no goal to contribute to"),
        }
        Ok(contribution)
    }

    /// Merge an imported document over the current ledger
    ///
    /// Any ill-shaped field or entry rejects the whole import and the current
    /// ledger is kept.
    pub fn import(&self, value: &Value) -> SmartSaveResult<MergeReport> {
        let current = self.storage.ledger.get()?;
        let (merged, report) = merge_value(&current, value, MergeMode::Strict)?;
        info!(
            budget = %merged.budget(),
            expenses = merged.expenses().len(),
            goals = merged.savings_goals().len(),
            "imported ledger"
        );

        self.storage.ledger.replace(merged)?;
        self.storage.ledger.save()?;
        Ok(report)
    }
}
