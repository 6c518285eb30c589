//! Saved ledger format and merging
//!
//! The whole ledger is persisted as one JSON document:
//!
//! ```json
//! {
//!   "budget": 1000,
//!   "expenses": [{"id": 1, "amount": 12.5, "category": "food",
//!                 "description": "lunch", "date": "...", "timestamp": 1}],
//!   "savingsGoals": [{"id": 2, "name": "Laptop", "target": 500,
//!                     "current": 0, "created": "..."}],
//!   "categories": {"food": {"name": "Food", "icon": "🍔", "budget": 350, "spent": 12.5}}
//! }
//! ```
//!
//! Loading and importing both merge such a document over an existing ledger
//! field by field. Allocations are always re-derived from `budget` and
//! `spent` is always recomputed from the merged expense list, so a merged
//! ledger satisfies the same invariants as one built through the mutators.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{SmartSaveError, SmartSaveResult};
use crate::models::expense::normalize_description;
use crate::models::{CategoryKind, Expense, Ledger, Money, SavingsGoal};

/// Serialized form of a whole ledger
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    pub budget: Money,
    pub expenses: Vec<Expense>,
    pub savings_goals: Vec<SavingsGoal>,
    pub categories: BTreeMap<CategoryKind, CategorySnapshot>,
}

/// Serialized form of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySnapshot {
    pub name: String,
    pub icon: String,
    /// The category's allocation
    pub budget: Money,
    pub spent: Money,
}

impl From<&Ledger> for LedgerSnapshot {
    fn from(ledger: &Ledger) -> Self {
        let categories = ledger
            .categories()
            .iter()
            .map(|c| {
                (
                    c.kind,
                    CategorySnapshot {
                        name: c.name.clone(),
                        icon: c.icon.clone(),
                        budget: c.allocated,
                        spent: c.spent,
                    },
                )
            })
            .collect();

        Self {
            budget: ledger.budget(),
            expenses: ledger.expenses().to_vec(),
            savings_goals: ledger.savings_goals().to_vec(),
            categories,
        }
    }
}

/// How to treat values that cannot be merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Skip the offending field or entry, keeping what was there before
    Lenient,
    /// Reject the whole document
    Strict,
}

/// What a lenient merge had to leave out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub skipped: Vec<String>,
}

impl MergeReport {
    /// Whether everything in the document was merged
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Partial view of a saved category; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CategoryPatch {
    name: Option<String>,
    icon: Option<String>,
    spent: Option<Money>,
}

struct Merger {
    mode: MergeMode,
    report: MergeReport,
}

impl Merger {
    fn reject(&mut self, what: &str, reason: impl fmt::Display) -> SmartSaveResult<()> {
        match self.mode {
            MergeMode::Strict => Err(SmartSaveError::MalformedPersistedState(format!(
                "{}: {}",
                what, reason
            ))),
            MergeMode::Lenient => {
                warn!(field = what, %reason, "skipping malformed saved value");
                self.report.skipped.push(format!("{}: {}", what, reason));
                Ok(())
            }
        }
    }

    fn decode<T: DeserializeOwned>(&mut self, what: &str, value: &Value) -> SmartSaveResult<Option<T>> {
        match T::deserialize(value) {
            Ok(decoded) => Ok(Some(decoded)),
            Err(e) => {
                self.reject(what, e)?;
                Ok(None)
            }
        }
    }

    fn array<'v>(&mut self, what: &str, value: &'v Value) -> SmartSaveResult<Option<&'v Vec<Value>>> {
        match value.as_array() {
            Some(items) => Ok(Some(items)),
            None => {
                self.reject(what, "expected a list")?;
                Ok(None)
            }
        }
    }

    fn budget(&mut self, value: &Value) -> SmartSaveResult<Option<Money>> {
        let Some(budget) = self.decode::<Money>("budget", value)? else {
            return Ok(None);
        };
        if budget.is_negative() {
            self.reject("budget", "must not be negative")?;
            return Ok(None);
        }
        Ok(Some(budget))
    }

    fn expenses(&mut self, items: &[Value]) -> SmartSaveResult<Vec<Expense>> {
        let mut seen = HashSet::new();
        let mut total = Money::zero();
        let mut expenses = Vec::with_capacity(items.len());

        for (i, item) in items.iter().enumerate() {
            let what = format!("expenses[{}]", i);
            let Some(mut expense) = self.decode::<Expense>(&what, item)? else {
                continue;
            };
            if let Err(e) = expense.validate() {
                self.reject(&what, e)?;
                continue;
            }
            if seen.contains(&expense.id) {
                self.reject(&what, format!("duplicate id {}", expense.id))?;
                continue;
            }
            let Some(next_total) = total.checked_add(expense.amount) else {
                self.reject(&what, format!("total spending would exceed {}", Money::MAX))?;
                continue;
            };
            total = next_total;
            seen.insert(expense.id);
            expense.description = normalize_description(&expense.description);
            expenses.push(expense);
        }

        Ok(expenses)
    }

    fn goals(&mut self, items: &[Value]) -> SmartSaveResult<Vec<SavingsGoal>> {
        let mut seen = HashSet::new();
        let mut targets = Money::zero();
        let mut goals = Vec::with_capacity(items.len());

        for (i, item) in items.iter().enumerate() {
            let what = format!("savingsGoals[{}]", i);
            let Some(mut goal) = self.decode::<SavingsGoal>(&what, item)? else {
                continue;
            };
            if let Err(e) = goal.validate() {
                self.reject(&what, e)?;
                continue;
            }
            if seen.contains(&goal.id) {
                self.reject(&what, format!("duplicate id {}", goal.id))?;
                continue;
            }
            let Some(next_targets) = targets.checked_add(goal.target) else {
                self.reject(&what, format!("goal targets would exceed {}", Money::MAX))?;
                continue;
            };
            targets = next_targets;
            seen.insert(goal.id);
            if goal.clamp_current() {
                warn!(goal = %goal.id, "saved goal progress was outside its target; clamped");
            }
            goals.push(goal);
        }

        Ok(goals)
    }
}

/// Merge a saved or imported document over `base`
///
/// Fields missing from `value` (or `null`) keep their value from `base`.
/// Unknown keys are ignored. `base` itself is never modified; on error the
/// caller still holds it unchanged.
///
/// # Errors
///
/// `MalformedPersistedState` when `value` is not an object, or in
/// [`MergeMode::Strict`] when any present field or entry is ill-shaped.
pub fn merge_value(
    base: &Ledger,
    value: &Value,
    mode: MergeMode,
) -> SmartSaveResult<(Ledger, MergeReport)> {
    let obj = value.as_object().ok_or_else(|| {
        SmartSaveError::MalformedPersistedState("expected an object at the top level".into())
    })?;
    let present = |key: &str| obj.get(key).filter(|v| !v.is_null());

    let mut merger = Merger {
        mode,
        report: MergeReport::default(),
    };

    let mut budget = base.budget();
    if let Some(value) = present("budget") {
        if let Some(merged) = merger.budget(value)? {
            budget = merged;
        }
    }

    let mut expenses = base.expenses().to_vec();
    if let Some(value) = present("expenses") {
        if let Some(items) = merger.array("expenses", value)? {
            expenses = merger.expenses(items)?;
        }
    }

    let mut goals = base.savings_goals().to_vec();
    if let Some(value) = present("savingsGoals") {
        if let Some(items) = merger.array("savingsGoals", value)? {
            goals = merger.goals(items)?;
        }
    }

    let mut labels = CategoryKind::ALL.map(|kind| {
        let category = base.category(kind);
        (category.name.clone(), category.icon.clone())
    });
    let mut saved_spent: Vec<(CategoryKind, Money)> = Vec::new();

    if let Some(value) = present("categories") {
        match value.as_object() {
            Some(categories) => {
                for (key, entry) in categories {
                    let Some(kind) = CategoryKind::ALL.into_iter().find(|k| k.id() == key) else {
                        debug!(category = %key, "ignoring unknown saved category");
                        continue;
                    };
                    let what = format!("categories.{}", key);
                    let Some(patch) = merger.decode::<CategoryPatch>(&what, entry)? else {
                        continue;
                    };
                    let (name, icon) = &mut labels[kind.index()];
                    if let Some(saved) = patch.name.filter(|n| !n.trim().is_empty()) {
                        *name = saved;
                    }
                    if let Some(saved) = patch.icon.filter(|i| !i.trim().is_empty()) {
                        *icon = saved;
                    }
                    if let Some(spent) = patch.spent {
                        saved_spent.push((kind, spent));
                    }
                }
            }
            None => merger.reject("categories", "expected an object")?,
        }
    }

    let ledger = Ledger::from_parts(budget, expenses, goals, labels);

    for (kind, spent) in saved_spent {
        let actual = ledger.category(kind).spent;
        if spent != actual {
            warn!(
                category = kind.id(),
                saved = %spent,
                recomputed = %actual,
                "saved category spend disagreed with its expenses; using the expenses"
            );
        }
    }

    Ok((ledger, merger.report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.set_budget(Money::from_units(1000)).unwrap();
        ledger
            .add_expense(Money::from_cents(1250), CategoryKind::Food, "lunch")
            .unwrap();
        let goal = ledger
            .create_savings_goal("Laptop", Money::from_units(500))
            .unwrap();
        ledger
            .contribute_to_goal(goal.id, Money::from_units(25))
            .unwrap();
        ledger
    }

    #[test]
    fn test_snapshot_shape() {
        let ledger = sample_ledger();
        let value = serde_json::to_value(LedgerSnapshot::from(&ledger)).unwrap();

        assert_eq!(value["budget"], json!(1000));
        assert_eq!(value["expenses"][0]["amount"], json!(12.5));
        assert_eq!(value["expenses"][0]["category"], json!("food"));
        assert_eq!(value["savingsGoals"][0]["current"], json!(25));
        assert_eq!(value["categories"]["food"]["budget"], json!(350));
        assert_eq!(value["categories"]["food"]["spent"], json!(12.5));
        assert_eq!(value["categories"]["personal-care"]["name"], json!("Personal Care"));
    }

    #[test]
    fn test_snapshot_merges_back_to_same_ledger() {
        let ledger = sample_ledger();
        let value = serde_json::to_value(LedgerSnapshot::from(&ledger)).unwrap();

        let (merged, report) = merge_value(&Ledger::new(), &value, MergeMode::Strict).unwrap();
        assert!(report.is_clean());
        assert_eq!(merged.budget(), ledger.budget());
        assert_eq!(merged.expenses(), ledger.expenses());
        assert_eq!(merged.savings_goals(), ledger.savings_goals());
        assert_eq!(merged.categories(), ledger.categories());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let value = json!({"budget": 500});
        let (ledger, report) = merge_value(&Ledger::new(), &value, MergeMode::Lenient).unwrap();

        assert!(report.is_clean());
        assert_eq!(ledger.budget(), Money::from_units(500));
        assert_eq!(
            ledger.category(CategoryKind::Food).allocated,
            Money::from_units(175)
        );
        assert!(ledger.expenses().is_empty());
        assert!(ledger.savings_goals().is_empty());
    }

    #[test]
    fn test_spent_is_recomputed_from_expenses() {
        let value = json!({
            "budget": 100,
            "expenses": [
                {"id": 1, "amount": 10, "category": "food", "description": "a",
                 "date": "2025-01-01T00:00:00Z", "timestamp": 1735689600000_i64}
            ],
            "categories": {"food": {"name": "Food", "icon": "🍔", "budget": 35, "spent": 999}}
        });
        let (ledger, _) = merge_value(&Ledger::new(), &value, MergeMode::Lenient).unwrap();

        assert_eq!(ledger.category(CategoryKind::Food).spent, Money::from_units(10));
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_lenient_skips_bad_entries() {
        let value = json!({
            "budget": "lots",
            "expenses": [
                {"id": 1, "amount": 5, "category": "food",
                 "date": "2025-01-01T00:00:00Z", "timestamp": 1},
                {"id": 2, "amount": 5, "category": "groceries",
                 "date": "2025-01-01T00:00:00Z", "timestamp": 2},
                {"id": 3, "amount": -5, "category": "food",
                 "date": "2025-01-01T00:00:00Z", "timestamp": 3}
            ],
            "savingsGoals": {"not": "a list"}
        });
        let (ledger, report) = merge_value(&Ledger::new(), &value, MergeMode::Lenient).unwrap();

        assert_eq!(ledger.budget(), Money::zero());
        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(ledger.expenses()[0].description, "No description");
        assert_eq!(report.skipped.len(), 4);
    }

    #[test]
    fn test_strict_rejects_bad_entries() {
        let value = json!({
            "expenses": [
                {"id": 2, "amount": 5, "category": "groceries",
                 "date": "2025-01-01T00:00:00Z", "timestamp": 2}
            ]
        });
        let err = merge_value(&Ledger::new(), &value, MergeMode::Strict).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("expenses[0]"));
    }

    #[test]
    fn test_strict_rejects_duplicate_ids() {
        let expense = json!({"id": 7, "amount": 5, "category": "food",
                             "date": "2025-01-01T00:00:00Z", "timestamp": 7});
        let value = json!({"expenses": [expense.clone(), expense]});
        assert!(merge_value(&Ledger::new(), &value, MergeMode::Strict).is_err());
    }

    fn expense_json(id: u64, amount: f64) -> Value {
        json!({"id": id, "amount": amount, "category": "food",
               "date": "2025-01-01T00:00:00Z", "timestamp": 1})
    }

    #[test]
    fn test_strict_rejects_amounts_past_the_limit() {
        let huge = json!({"expenses": [expense_json(1, 9e16), expense_json(2, 9e16)]});
        let err = merge_value(&Ledger::new(), &huge, MergeMode::Strict).unwrap_err();
        assert!(err.is_malformed());

        let overflowing = json!({"expenses": [expense_json(1, 1e12), expense_json(2, 0.01)]});
        let err = merge_value(&Ledger::new(), &overflowing, MergeMode::Strict).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("expenses[1]"));
    }

    #[test]
    fn test_lenient_skips_entries_past_the_limit() {
        let value = json!({
            "expenses": [expense_json(1, 1e12), expense_json(2, 1e12)],
            "savingsGoals": [
                {"id": 3, "name": "Moon", "target": 1e12, "created": "2025-01-01T00:00:00Z"},
                {"id": 4, "name": "Mars", "target": 1, "created": "2025-01-01T00:00:00Z"}
            ]
        });
        let (ledger, report) = merge_value(&Ledger::new(), &value, MergeMode::Lenient).unwrap();

        assert_eq!(report.skipped.len(), 2);
        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(ledger.savings_goals().len(), 1);
        assert_eq!(ledger.totals().total_spent, Money::MAX);
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_ids_past_the_ceiling_are_rejected() {
        let value = json!({"expenses": [expense_json(u64::MAX, 5.0)]});
        let err = merge_value(&Ledger::new(), &value, MergeMode::Strict).unwrap_err();
        assert!(err.is_malformed());

        let value = json!({"expenses": [expense_json(u64::MAX, 5.0), expense_json(9, 5.0)]});
        let (mut ledger, report) = merge_value(&Ledger::new(), &value, MergeMode::Lenient).unwrap();
        assert_eq!(report.skipped.len(), 1);

        let first = ledger.add_expense(Money::from_units(1), CategoryKind::Food, "").unwrap();
        let second = ledger.add_expense(Money::from_units(1), CategoryKind::Food, "").unwrap();
        assert_ne!(first.id, second.id);
        assert!(first.id.in_range() && second.id.in_range());
    }

    #[test]
    fn test_top_level_must_be_object() {
        for mode in [MergeMode::Lenient, MergeMode::Strict] {
            let err = merge_value(&Ledger::new(), &json!([1, 2, 3]), mode).unwrap_err();
            assert!(err.is_malformed());
        }
    }

    #[test]
    fn test_merge_over_existing_state() {
        let base = sample_ledger();
        let value = json!({"budget": 2000, "theme": "dark", "categories": {"food": {"name": "Eating"}, "pets": {}}});

        let (merged, report) = merge_value(&base, &value, MergeMode::Strict).unwrap();
        assert!(report.is_clean());
        assert_eq!(merged.budget(), Money::from_units(2000));
        assert_eq!(merged.expenses(), base.expenses());
        assert_eq!(merged.savings_goals(), base.savings_goals());
        assert_eq!(merged.category(CategoryKind::Food).name, "Eating");
        assert_eq!(merged.category(CategoryKind::Food).icon, "🍔");
        assert_eq!(
            merged.category(CategoryKind::Food).allocated,
            Money::from_units(700)
        );
    }

    #[test]
    fn test_goal_progress_is_clamped() {
        let value = json!({
            "savingsGoals": [
                {"id": 1, "name": "Bike", "target": 100, "current": 150,
                 "created": "2025-01-01T00:00:00Z"}
            ]
        });
        let (ledger, _) = merge_value(&Ledger::new(), &value, MergeMode::Strict).unwrap();
        assert_eq!(ledger.savings_goals()[0].current, Money::from_units(100));
    }
}
