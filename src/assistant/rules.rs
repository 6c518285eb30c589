//! Static reply tables
//!
//! Rules are checked top to bottom and the first rule with any keyword
//! contained in the normalized input wins. The input is normalized to
//! lower-case words separated by single spaces, with a space on each side.
//! Every keyword starts with a space so it only matches at the start of a
//! word; a keyword that also ends with a space (`" car "`) matches the whole
//! word only, one without (`" grocer"`) matches any word it begins.

use crate::models::CategoryKind;

/// One keyword rule
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl Rule {
    /// Whether any keyword occurs in `input`, which must already be normalized
    pub fn matches(&self, input: &str) -> bool {
        self.keywords.iter().any(|k| input.contains(k))
    }
}

/// Rules that apply before any category table
pub const SHARED: &[Rule] = &[
    Rule {
        keywords: &[" hello ", " hi ", " hey "],
        reply: "Hi! I can help you make the most of your budget. \
                So far you've spent {spent} of {allocated} here.",
    },
    Rule {
        keywords: &[" help ", " what can you "],
        reply: "Ask me for tips, or ask how much you have left. \
                I'll answer with what I know about this category.",
    },
    Rule {
        keywords: &[" left ", " remaining ", " how much "],
        reply: "You have {remaining} left out of {allocated} ({usage} used).",
    },
];

const FOOD: &[Rule] = &[
    Rule {
        keywords: &[" grocer", " supermarket"],
        reply: "Plan meals for the week and shop with a list. \
                Store brands are usually just as good and much cheaper.",
    },
    Rule {
        keywords: &[" restaurant", " eat out ", " eating out ", " takeout ", " delivery "],
        reply: "Eating out adds up fast. Try capping it at once a week \
                and cooking in batches the rest of the time.",
    },
    Rule {
        keywords: &[" coffee", " cafe", " latte"],
        reply: "A daily coffee can cost more than you think. \
                Brewing at home a few days a week keeps more of your {allocated}.",
    },
    Rule {
        keywords: &[" cheap", " save ", " saving", " tip ", " tips ", " budget"],
        reply: "Cook in bulk, bring lunch to campus and check for student \
                discounts at local spots.",
    },
];

const TRANSPORT: &[Rule] = &[
    Rule {
        keywords: &[" bus ", " buses ", " train", " metro", " subway", " pass ", " passes "],
        reply: "If you ride more than a few times a week a monthly or \
                student transit pass almost always pays for itself.",
    },
    Rule {
        keywords: &[" uber", " lyft", " taxi", " ride ", " rides "],
        reply: "Ride-hailing is the priciest way around. \
                Share rides or save them for late nights.",
    },
    Rule {
        keywords: &[" gas ", " fuel", " car ", " cars ", " parking "],
        reply: "Combine errands into one trip and compare fuel prices \
                before you fill up.",
    },
    Rule {
        keywords: &[" bike", " walk", " cycl"],
        reply: "Biking or walking short trips is free and keeps {remaining} in your pocket.",
    },
];

const ENTERTAINMENT: &[Rule] = &[
    Rule {
        keywords: &[" movie", " cinema", " film"],
        reply: "Look for discount nights and student tickets, \
                or host a movie night at home instead.",
    },
    Rule {
        keywords: &[" game", " gaming ", " steam "],
        reply: "Wait for seasonal sales before buying new games. \
                Many great titles are free to play.",
    },
    Rule {
        keywords: &[" concert", " event", " ticket", " party ", " parties "],
        reply: "Check your campus calendar first. \
                Lots of events are free for students.",
    },
    Rule {
        keywords: &[" free ", " cheap", " idea ", " ideas "],
        reply: "Parks, museums on free days, campus clubs and libraries \
                are all great zero-cost options.",
    },
];

const SHOPPING: &[Rule] = &[
    Rule {
        keywords: &[" clothes ", " clothing ", " shoes ", " fashion"],
        reply: "Try thrift stores and end-of-season sales. \
                Wait a day before buying anything you didn't plan for.",
    },
    Rule {
        keywords: &[" online ", " amazon", " cart ", " carts "],
        reply: "Leave items in your cart for 48 hours. \
                If you still want them after that, check for a coupon first.",
    },
    Rule {
        keywords: &[" textbook", " book", " laptop", " electronics "],
        reply: "Rent or buy used textbooks and look for student pricing \
                on electronics.",
    },
    Rule {
        keywords: &[" impulse", " stop ", " control "],
        reply: "Make a list before you shop and stick to it. \
                You've used {usage} of this category already.",
    },
];

const PERSONAL_CARE: &[Rule] = &[
    Rule {
        keywords: &[" haircut", " hair ", " salon", " barber"],
        reply: "Beauty schools often offer cheap haircuts, \
                and stretching time between cuts helps too.",
    },
    Rule {
        keywords: &[" skincare ", " makeup ", " cosmetic"],
        reply: "Stick to a few basics that work for you. \
                Drugstore brands are often as effective as premium ones.",
    },
    Rule {
        keywords: &[" gym", " fitness ", " workout"],
        reply: "Your campus gym is probably included in your fees. \
                Use it before paying for a membership.",
    },
];

const SUBSCRIPTION: &[Rule] = &[
    Rule {
        keywords: &[" netflix ", " spotify ", " streaming ", " hulu ", " disney"],
        reply: "Rotate streaming services month to month instead of \
                paying for all of them, and look for student plans.",
    },
    Rule {
        keywords: &[" cancel", " too many ", " unused "],
        reply: "List every subscription you pay for and cancel anything \
                you haven't used in the last month.",
    },
    Rule {
        keywords: &[" phone", " mobile ", " internet ", " data "],
        reply: "Compare prepaid and family plans. \
                A cheaper carrier can save a lot over a year.",
    },
];

const OTHER: &[Rule] = &[
    Rule {
        keywords: &[" emergenc", " unexpected "],
        reply: "Try to keep some of this category untouched as a buffer \
                for surprises.",
    },
    Rule {
        keywords: &[" gift", " birthday", " holiday"],
        reply: "Set a spending limit per gift ahead of time. \
                Handmade or experience gifts go a long way.",
    },
];

/// The keyword table for a category
pub fn table(kind: CategoryKind) -> &'static [Rule] {
    match kind {
        CategoryKind::Food => FOOD,
        CategoryKind::Transport => TRANSPORT,
        CategoryKind::Entertainment => ENTERTAINMENT,
        CategoryKind::Shopping => SHOPPING,
        CategoryKind::PersonalCare => PERSONAL_CARE,
        CategoryKind::Subscription => SUBSCRIPTION,
        CategoryKind::Other => OTHER,
    }
}

/// Reply used when no rule matches
pub fn fallback(kind: CategoryKind) -> &'static str {
    match kind {
        CategoryKind::Food => {
            "Food is usually the biggest slice of a student budget. \
             You've spent {spent} of {allocated} so far."
        }
        CategoryKind::Transport => {
            "Getting around doesn't have to be expensive. \
             You've spent {spent} of {allocated} on transport."
        }
        CategoryKind::Entertainment => {
            "Fun matters too. You have {remaining} left for entertainment this month."
        }
        CategoryKind::Shopping => {
            "Before buying, ask whether you need it or just want it. \
             You've used {usage} of your shopping budget."
        }
        CategoryKind::PersonalCare => {
            "Looking after yourself is worth budgeting for. \
             You have {remaining} left here."
        }
        CategoryKind::Subscription => {
            "Subscriptions are easy to forget about. \
             You've spent {spent} of {allocated} on them."
        }
        CategoryKind::Other => {
            "This category covers everything else. You have {remaining} of {allocated} left."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_normalized() {
        let all = CategoryKind::ALL.iter().flat_map(|k| table(*k)).chain(SHARED);
        for rule in all {
            assert!(!rule.keywords.is_empty());
            for keyword in rule.keywords {
                assert!(keyword.starts_with(' '), "{:?}", keyword);
                assert!(!keyword.trim().is_empty());
                assert!(
                    keyword.chars().all(|c| c == ' ' || c.is_ascii_lowercase()),
                    "{:?}",
                    keyword
                );
            }
        }
    }

    #[test]
    fn test_whole_word_keywords() {
        let left = &SHARED[2];
        assert!(left.matches(" is anything left "));
        assert!(!left.matches(" any leftovers "));

        let car = &TRANSPORT[2];
        assert!(car.matches(" my car broke "));
        assert!(!car.matches(" credit card "));

        let pass = &TRANSPORT[0];
        assert!(!pass.matches(" passenger fees "));
    }

    #[test]
    fn test_stem_keywords_match_word_starts() {
        assert!(FOOD[0].matches(" cheap groceries "));
        assert!(!FOOD[0].matches(" antigrocer "));
    }

    #[test]
    fn test_every_category_has_rules() {
        for kind in CategoryKind::ALL {
            assert!(!table(kind).is_empty(), "{} has no rules", kind.id());
            assert!(!fallback(kind).is_empty());
        }
    }
}
