//! Fixed award thresholds per age group.
//!
//! The table is process-wide constant configuration, not user data. Each
//! value is the inclusive minimum of cumulative hours for that level; gold
//! has no upper bound.

use crate::models::age_group::AgeGroup;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    pub bronze: f64,
    pub silver: f64,
    pub gold: f64,
}

/// Exhaustive match: adding a new age group without a threshold row is a
/// compile error, not a silent lookup miss.
pub const fn for_group(group: AgeGroup) -> TierThresholds {
    match group {
        AgeGroup::Kids => TierThresholds {
            bronze: 26.0,
            silver: 50.0,
            gold: 75.0,
        },
        AgeGroup::Teens => TierThresholds {
            bronze: 50.0,
            silver: 75.0,
            gold: 100.0,
        },
        AgeGroup::YoungAdults => TierThresholds {
            bronze: 100.0,
            silver: 175.0,
            gold: 250.0,
        },
        AgeGroup::Adults => TierThresholds {
            bronze: 100.0,
            silver: 250.0,
            gold: 500.0,
        },
    }
}
