//! Property-based invariant tests for the ledger.
//!
//! 1. A budget is split exactly: allocations sum to the budget
//! 2. Each category gets its weighted share (Other absorbs rounding)
//! 3. Category spend always equals the sum of its retained expenses
//! 4. Deleting and re-adding an expense restores the category's spend
//! 5. Goal progress never exceeds the target; completion fires once
//! 6. Usage percentages are always finite
//! 7. A saved ledger merges back to the same ledger
//! 8. Total spending never passes `Money::MAX`; a rejected add changes nothing

use proptest::prelude::*;
use smartsave::models::{CategoryKind, Ledger, Money};
use smartsave::storage::{merge_value, LedgerSnapshot, MergeMode};

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Add(i64, usize),
    Delete(usize),
    SetBudget(i64),
}

fn kind_strategy() -> impl Strategy<Value = usize> {
    0usize..CategoryKind::ALL.len()
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (1i64..100_000, kind_strategy()).prop_map(|(c, k)| Op::Add(c, k)),
        2 => any::<usize>().prop_map(Op::Delete),
        1 => (1i64..10_000_000).prop_map(Op::SetBudget),
    ]
}

fn apply(ledger: &mut Ledger, op: &Op) {
    match op {
        Op::Add(cents, k) => {
            ledger
                .add_expense(Money::from_cents(*cents), CategoryKind::ALL[*k], "prop")
                .unwrap();
        }
        Op::Delete(i) => {
            if !ledger.expenses().is_empty() {
                let id = ledger.expenses()[i % ledger.expenses().len()].id;
                assert!(ledger.delete_expense(id).is_some());
            }
        }
        Op::SetBudget(cents) => ledger.set_budget(Money::from_cents(*cents)).unwrap(),
    }
}

fn expected_spent(ledger: &Ledger, kind: CategoryKind) -> Money {
    ledger.expenses_in(kind).map(|e| e.amount).sum()
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn allocations_sum_to_budget(cents in 1i64..1_000_000_000_000) {
        let mut ledger = Ledger::new();
        ledger.set_budget(Money::from_cents(cents)).unwrap();

        let total: Money = ledger.categories().iter().map(|c| c.allocated).sum();
        prop_assert_eq!(total, Money::from_cents(cents));
    }

    #[test]
    fn allocations_follow_weights(cents in 1i64..1_000_000_000) {
        let mut ledger = Ledger::new();
        ledger.set_budget(Money::from_cents(cents)).unwrap();

        for kind in CategoryKind::ALL {
            let exact = cents * kind.weight_percent() / 100;
            let allocated = ledger.category(kind).allocated.cents();
            if kind == CategoryKind::Other {
                prop_assert!(allocated >= exact && allocated - exact < 7);
            } else {
                prop_assert_eq!(allocated, exact);
            }
        }
    }

    #[test]
    fn set_budget_is_idempotent(cents in 1i64..1_000_000_000) {
        let mut once = Ledger::new();
        once.set_budget(Money::from_cents(cents)).unwrap();
        let mut twice = once.clone();
        twice.set_budget(Money::from_cents(cents)).unwrap();
        prop_assert_eq!(once.categories(), twice.categories());
    }

    #[test]
    fn spent_matches_expenses_after_every_op(ops in prop::collection::vec(op_strategy(), 1..80)) {
        let mut ledger = Ledger::new();
        for op in &ops {
            apply(&mut ledger, op);
            for kind in CategoryKind::ALL {
                prop_assert_eq!(ledger.category(kind).spent, expected_spent(&ledger, kind));
                prop_assert!(!ledger.category(kind).spent.is_negative());
            }
        }
        prop_assert!(ledger.is_consistent());
    }

    #[test]
    fn delete_then_readd_restores_spent(
        ops in prop::collection::vec(op_strategy(), 1..40),
        pick in any::<usize>(),
    ) {
        let mut ledger = Ledger::new();
        for op in &ops {
            apply(&mut ledger, op);
        }
        prop_assume!(!ledger.expenses().is_empty());

        let expense = ledger.expenses()[pick % ledger.expenses().len()].clone();
        let before = ledger.category(expense.category).spent;

        ledger.delete_expense(expense.id).unwrap();
        ledger
            .add_expense(expense.amount, expense.category, &expense.description)
            .unwrap();

        prop_assert_eq!(ledger.category(expense.category).spent, before);
    }

    #[test]
    fn goal_progress_is_clamped_and_completes_once(
        target in 1i64..1_000_000,
        contributions in prop::collection::vec(1i64..500_000, 1..30),
    ) {
        let mut ledger = Ledger::new();
        let goal = ledger
            .create_savings_goal("Goal", Money::from_cents(target))
            .unwrap();

        let mut completions = 0;
        let mut added = 0i64;
        for cents in contributions {
            let c = ledger
                .contribute_to_goal(goal.id, Money::from_cents(cents))
                .unwrap()
                .unwrap();
            added += cents;
            if c.completed {
                completions += 1;
            }
            prop_assert!(c.goal.current <= c.goal.target);
            prop_assert_eq!(c.goal.current.cents(), added.min(target));
        }

        let reached = added >= target;
        prop_assert_eq!(completions, usize::from(reached));
    }

    #[test]
    fn usage_percent_is_finite(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut ledger = Ledger::new();
        for op in &ops {
            apply(&mut ledger, op);
        }
        for kind in CategoryKind::ALL {
            let usage = ledger.budget_usage_percent(kind);
            prop_assert!(usage.is_finite());
            if ledger.category(kind).allocated.is_zero() {
                prop_assert_eq!(usage, 0.0);
            }
        }
    }

    #[test]
    fn snapshot_merges_back(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut ledger = Ledger::new();
        for op in &ops {
            apply(&mut ledger, op);
        }

        let value = serde_json::to_value(LedgerSnapshot::from(&ledger)).unwrap();
        let (merged, report) = merge_value(&Ledger::new(), &value, MergeMode::Strict).unwrap();

        prop_assert!(report.is_clean());
        prop_assert_eq!(merged.budget(), ledger.budget());
        prop_assert_eq!(merged.expenses(), ledger.expenses());
        prop_assert_eq!(merged.savings_goals(), ledger.savings_goals());
        prop_assert_eq!(merged.categories(), ledger.categories());
    }

    #[test]
    fn spending_never_passes_limit(
        amounts in prop::collection::vec((1i64..=Money::MAX.cents(), kind_strategy()), 1..20),
    ) {
        let mut ledger = Ledger::new();
        for (cents, k) in &amounts {
            let before = ledger.clone();
            let fits = ledger.totals().total_spent.cents() + cents <= Money::MAX.cents();

            let result = ledger.add_expense(Money::from_cents(*cents), CategoryKind::ALL[*k], "big");
            prop_assert_eq!(result.is_ok(), fits);
            if !fits {
                prop_assert_eq!(&ledger, &before);
            }
            prop_assert!(ledger.totals().total_spent <= Money::MAX);
            prop_assert!(ledger.is_consistent());
        }
    }
}
