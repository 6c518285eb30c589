//! The ledger aggregate
//!
//! A [`Ledger`] owns the monthly budget, the seven category allocations, the
//! expense list and the savings goals. All mutation goes through validated
//! methods that check every precondition before touching state, so a rejected
//! call leaves the ledger exactly as it was.
//!
//! `Category::spent` is maintained incrementally by [`Ledger::add_expense`]
//! and [`Ledger::delete_expense`]; amounts are integer cents so the running
//! total always equals the sum of the retained expenses.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::alert::{AlertLevel, BudgetHealth};
use super::category::{distribute, Category, CategoryKind};
use super::expense::Expense;
use super::goal::SavingsGoal;
use super::ids::{ExpenseId, GoalId, IdSequence};
use super::money::Money;
use crate::error::{SmartSaveError, SmartSaveResult};

/// Dashboard totals derived from the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub budget: Money,
    pub total_spent: Money,
    pub total_saved: Money,
    pub remaining: Money,
}

impl Totals {
    /// Classify the remaining budget
    pub fn health(&self) -> BudgetHealth {
        BudgetHealth::classify(self.budget, self.remaining)
    }
}

/// Result of a contribution to an existing goal
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    /// The goal after the contribution
    pub goal: SavingsGoal,

    /// How much was actually added after clamping at the target
    pub applied: Money,

    /// True only on the contribution that first reached the target
    pub completed: bool,
}

/// The budgeting ledger
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    budget: Money,
    expenses: Vec<Expense>,
    savings_goals: Vec<SavingsGoal>,
    categories: [Category; 7],
    ids: IdSequence,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger: no budget, zero allocations, no expenses or goals
    pub fn new() -> Self {
        Self {
            budget: Money::zero(),
            expenses: Vec::new(),
            savings_goals: Vec::new(),
            categories: CategoryKind::ALL.map(Category::new),
            ids: IdSequence::default(),
        }
    }

    /// Rebuild a ledger from already validated parts
    ///
    /// Allocations are derived from `budget`, `spent` is summed from
    /// `expenses`, and the id sequence resumes after the highest id present.
    pub(crate) fn from_parts(
        budget: Money,
        expenses: Vec<Expense>,
        savings_goals: Vec<SavingsGoal>,
        labels: [(String, String); 7],
    ) -> Self {
        let mut categories = CategoryKind::ALL.map(Category::new);
        for (category, (name, icon)) in categories.iter_mut().zip(labels) {
            category.name = name;
            category.icon = icon;
        }

        let mut ids = IdSequence::default();
        expenses.iter().for_each(|e| ids.observe(e.id.raw()));
        savings_goals.iter().for_each(|g| ids.observe(g.id.raw()));

        let mut ledger = Self {
            budget,
            expenses,
            savings_goals,
            categories,
            ids,
        };
        ledger.reallocate();
        let spent = ledger.categories_spent_from_expenses();
        for (category, spent) in ledger.categories.iter_mut().zip(spent) {
            category.spent = spent;
        }
        ledger
    }

    /// The monthly budget
    pub fn budget(&self) -> Money {
        self.budget
    }

    /// Expenses in list order (most recently added first)
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Savings goals in creation order
    pub fn savings_goals(&self) -> &[SavingsGoal] {
        &self.savings_goals
    }

    /// All seven categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// A single category
    pub fn category(&self, kind: CategoryKind) -> &Category {
        &self.categories[kind.index()]
    }

    /// Look up an expense by id
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Look up a goal by id
    pub fn goal(&self, id: GoalId) -> Option<&SavingsGoal> {
        self.savings_goals.iter().find(|g| g.id == id)
    }

    /// Set the monthly budget and re-derive every category allocation
    ///
    /// # Errors
    ///
    /// `InvalidAmount` when `amount` is not positive or above [`Money::MAX`];
    /// nothing is changed.
    pub fn set_budget(&mut self, amount: Money) -> SmartSaveResult<()> {
        check_amount(amount)?;
        self.budget = amount;
        self.reallocate();
        Ok(())
    }

    fn reallocate(&mut self) {
        let shares = distribute(self.budget);
        for (category, share) in self.categories.iter_mut().zip(shares) {
            category.allocated = share;
        }
    }

    /// Record an expense now
    ///
    /// The expense is prepended to the list and its amount added to the
    /// category's `spent`.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` when `amount` is not positive, above [`Money::MAX`], or
    /// would take total spending past [`Money::MAX`]; nothing is changed.
    pub fn add_expense(
        &mut self,
        amount: Money,
        category: CategoryKind,
        description: &str,
    ) -> SmartSaveResult<Expense> {
        self.add_expense_at(amount, category, description, Utc::now())
    }

    /// Record an expense with an explicit timestamp
    pub fn add_expense_at(
        &mut self,
        amount: Money,
        category: CategoryKind,
        description: &str,
        date: DateTime<Utc>,
    ) -> SmartSaveResult<Expense> {
        check_amount(amount)?;
        if self.total_spent().checked_add(amount).is_none() {
            return Err(SmartSaveError::amount_over_limit(
                amount,
                format_args!("{} in total spending", Money::MAX),
            ));
        }

        let id = ExpenseId::from_raw(self.ids.next_raw());
        let expense = Expense::new(id, amount, category, description, date);

        self.categories[category.index()].spent += amount;
        self.expenses.insert(0, expense.clone());
        Ok(expense)
    }

    /// Remove an expense, reversing its effect on the category
    ///
    /// Returns the removed expense, or `None` (and changes nothing) when no
    /// expense has that id.
    pub fn delete_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let position = self.expenses.iter().position(|e| e.id == id)?;
        let expense = self.expenses.remove(position);
        self.categories[expense.category.index()].spent -= expense.amount;
        Some(expense)
    }

    /// `spent / allocated * 100` for a category; 0 when nothing is allocated
    pub fn budget_usage_percent(&self, kind: CategoryKind) -> f64 {
        self.category(kind).usage_percent()
    }

    /// Alert classification for a category's current usage
    pub fn budget_alert_level(&self, kind: CategoryKind) -> AlertLevel {
        AlertLevel::from_usage(self.budget_usage_percent(kind))
    }

    /// Create a savings goal with nothing saved yet
    ///
    /// # Errors
    ///
    /// `Validation` for a blank name. `InvalidAmount` for a non-positive target,
    /// or one that would take the sum of all targets past [`Money::MAX`].
    pub fn create_savings_goal(&mut self, name: &str, target: Money) -> SmartSaveResult<SavingsGoal> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SmartSaveError::Validation("Goal name cannot be empty".into()));
        }
        check_amount(target)?;
        let targets = self.savings_goals.iter().map(|g| g.target);
        if sum_within_limit(targets.chain([target])).is_none() {
            return Err(SmartSaveError::amount_over_limit(
                target,
                format_args!("{} across all goal targets", Money::MAX),
            ));
        }

        let id = GoalId::from_raw(self.ids.next_raw());
        let goal = SavingsGoal::new(id, name, target, Utc::now());
        self.savings_goals.push(goal.clone());
        Ok(goal)
    }

    /// Add money to a goal, clamping at its target
    ///
    /// Returns `Ok(None)` when no goal has that id.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` when `amount` is not positive or above [`Money::MAX`];
    /// nothing is changed.
    pub fn contribute_to_goal(
        &mut self,
        id: GoalId,
        amount: Money,
    ) -> SmartSaveResult<Option<Contribution>> {
        check_amount(amount)?;

        let Some(goal) = self.savings_goals.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };

        let before = goal.current;
        let completed = goal.contribute(amount);
        Ok(Some(Contribution {
            applied: goal.current - before,
            goal: goal.clone(),
            completed,
        }))
    }

    /// Dashboard totals
    pub fn totals(&self) -> Totals {
        let total_spent: Money = self.expenses.iter().map(|e| e.amount).sum();
        let total_saved: Money = self.savings_goals.iter().map(|g| g.current).sum();
        Totals {
            budget: self.budget,
            total_spent,
            total_saved,
            remaining: self.budget - total_spent,
        }
    }

    /// Expenses sorted newest first by timestamp
    pub fn expenses_by_recency(&self) -> Vec<&Expense> {
        let mut sorted: Vec<&Expense> = self.expenses.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted
    }

    /// Expenses booked against one category, in list order
    pub fn expenses_in(&self, kind: CategoryKind) -> impl Iterator<Item = &Expense> {
        self.expenses.iter().filter(move |e| e.category == kind)
    }

    fn total_spent(&self) -> Money {
        self.categories.iter().map(|c| c.spent).sum()
    }

    /// Per-category spend recomputed from scratch from the expense list
    pub fn categories_spent_from_expenses(&self) -> [Money; 7] {
        let mut spent = [Money::zero(); 7];
        for expense in &self.expenses {
            spent[expense.category.index()] += expense.amount;
        }
        spent
    }

    /// Whether every category's running `spent` matches its expenses
    pub fn is_consistent(&self) -> bool {
        self.categories_spent_from_expenses()
            .iter()
            .zip(self.categories.iter())
            .all(|(expected, category)| *expected == category.spent)
    }
}

/// Reject amounts that are not positive or exceed [`Money::MAX`]
fn check_amount(amount: Money) -> SmartSaveResult<()> {
    if !amount.is_positive() {
        return Err(SmartSaveError::invalid_amount(amount));
    }
    if amount > Money::MAX {
        return Err(SmartSaveError::amount_over_limit(amount, Money::MAX));
    }
    Ok(())
}

/// Sum `amounts`, or `None` once the running total passes [`Money::MAX`]
fn sum_within_limit(amounts: impl IntoIterator<Item = Money>) -> Option<Money> {
    amounts
        .into_iter()
        .try_fold(Money::zero(), |total, amount| total.checked_add(amount))
}
