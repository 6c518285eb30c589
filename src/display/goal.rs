//! Savings goal display formatting

use crate::models::SavingsGoal;

use super::summary::format_bar;

/// Format a single goal with a progress bar
pub fn format_goal_row(goal: &SavingsGoal, symbol: &str) -> String {
    let progress = goal.progress_percent();
    let done = if goal.is_completed() { " ✓" } else { "" };

    format!(
        "{:<16} {:<20} {} {:>5.1}%  {} / {}{}",
        goal.id,
        goal.name,
        format_bar(progress, 100.0, 20),
        progress,
        goal.current.format_with_symbol(symbol),
        goal.target.format_with_symbol(symbol),
        done
    )
}

/// Format all goals
pub fn format_goal_list(goals: &[SavingsGoal], symbol: &str) -> String {
    if goals.is_empty() {
        return "No savings goals yet.\n\nRun 'smartsave goal create <name> <target>' to start one.\n"
            .to_string();
    }

    let mut output = String::from("Savings Goals:\n");
    for goal in goals {
        output.push_str("  ");
        output.push_str(&format_goal_row(goal, symbol));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalId, Money};
    use chrono::Utc;

    fn goal(current: i64) -> SavingsGoal {
        let mut goal = SavingsGoal::new(
            GoalId::from_raw(7),
            "Laptop",
            Money::from_units(500),
            Utc::now(),
        );
        goal.contribute(Money::from_units(current));
        goal
    }

    #[test]
    fn test_format_goal_row() {
        let output = format_goal_row(&goal(125), "$");
        assert!(output.contains("goal-7"));
        assert!(output.contains(" 25.0%"));
        assert!(output.contains("$125.00 / $500.00"));
        assert!(output.contains("█████░░░░░░░░░░░░░░░"));
        assert!(!output.contains('✓'));
    }

    #[test]
    fn test_completed_goal_is_marked() {
        assert!(format_goal_row(&goal(500), "$").ends_with(" ✓"));
    }

    #[test]
    fn test_empty_goal_list() {
        assert!(format_goal_list(&[], "$").contains("No savings goals yet"));
    }
}
