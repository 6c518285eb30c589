//! Strongly-typed ID wrappers for ledger entities
//!
//! Ids are plain `u64` values on the wire so saved ledgers written with
//! millisecond-timestamp ids load unchanged. Newtype wrappers keep expense
//! and goal ids from being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::Utc;

/// Largest raw id accepted from a saved or imported ledger
///
/// Keeping stored ids at or below this leaves the sequence room to keep
/// handing out fresh, larger ids.
pub const MAX_RAW_ID: u64 = i64::MAX as u64;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create an ID from a raw value
            pub const fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the underlying value
            pub const fn raw(&self) -> u64 {
                self.0
            }

            /// Whether the id is at or below [`MAX_RAW_ID`]
            pub const fn in_range(&self) -> bool {
                self.0 <= MAX_RAW_ID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&format!("{}{}", $display_prefix, self.0))
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(GoalId, "goal-");

/// Hands out unique, strictly increasing raw ids
///
/// The next id is the current epoch time in milliseconds, bumped past the
/// last id handed out when two requests land in the same millisecond or the
/// clock moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    /// Observe an externally assigned id so it is never handed out again
    pub fn observe(&mut self, raw: u64) {
        self.last = self.last.max(raw);
    }

    /// Allocate the next id
    pub fn next_raw(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last.saturating_add(1));
        self.last
    }
}
