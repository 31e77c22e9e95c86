//! Reach tiers derived from follower count.

use serde::{Deserialize, Serialize};

/// Followers at or above which a creator is macro tier.
pub const MACRO_MIN_FOLLOWERS: u64 = 500_000;
/// Followers at or above which a creator is mid tier.
pub const MID_MIN_FOLLOWERS: u64 = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Macro,
    Mid,
    Micro,
}

impl Tier {
    #[must_use]
    pub fn of(follower_count: u64) -> Self {
        if follower_count >= MACRO_MIN_FOLLOWERS {
            Tier::Macro
        } else if follower_count >= MID_MIN_FOLLOWERS {
            Tier::Mid
        } else {
            Tier::Micro
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Macro => write!(f, "macro"),
            Tier::Mid => write!(f, "mid"),
            Tier::Micro => write!(f, "micro"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive_lower_bounds() {
        assert_eq!(Tier::of(500_000), Tier::Macro);
        assert_eq!(Tier::of(499_999), Tier::Mid);
        assert_eq!(Tier::of(50_000), Tier::Mid);
        assert_eq!(Tier::of(49_999), Tier::Micro);
        assert_eq!(Tier::of(0), Tier::Micro);
    }

    #[test]
    fn display_matches_serde_names() {
        for tier in [Tier::Macro, Tier::Mid, Tier::Micro] {
            let json = serde_json::to_string(&tier).unwrap();
            assert_eq!(json, format!("\"{tier}\""));
        }
    }
}
