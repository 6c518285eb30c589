//! Canned budgeting assistant
//!
//! [`respond`] maps a category, a free-text question and the category's
//! figures to a reply. It is a pure lookup: no state, no I/O, the same inputs
//! always give the same text.

pub mod rules;

use crate::models::{CategoryKind, Money};

use rules::{fallback, table, SHARED};

/// Reply to `input` about `kind`
///
/// Shared greeting and help rules are tried first, then the category's own
/// table, then its fallback. Replies may mention the category's figures.
pub fn respond(kind: CategoryKind, input: &str, spent: Money, allocated: Money) -> String {
    let normalized = normalize(input);

    let template = SHARED
        .iter()
        .chain(table(kind))
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.reply)
        .unwrap_or_else(|| fallback(kind));

    render(template, spent, allocated)
}

/// Lower-case words joined by single spaces, padded with a space each side
fn normalize(input: &str) -> String {
    let lower = input.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    format!(" {} ", words.join(" "))
}

fn render(template: &str, spent: Money, allocated: Money) -> String {
    let usage = spent.percent_of(allocated);
    template
        .replace("{spent}", &spent.to_string())
        .replace("{allocated}", &allocated.to_string())
        .replace("{remaining}", &(allocated - spent).to_string())
        .replace("{usage}", &format!("{:.0}%", usage))
}
