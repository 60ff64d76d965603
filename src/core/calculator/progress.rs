//! Award tier progress calculation.
//!
//! Pure and total: reads its arguments, allocates a fresh result, touches no
//! shared state. Levels are evaluated top-down (gold, then silver, then
//! bronze) so a total satisfying several inclusive minimums resolves to the
//! highest. For the kids table a 60-hour total is silver, never bronze.

use crate::core::calculator::thresholds::{self, TierThresholds};
use crate::models::age_group::AgeGroup;
use crate::models::session::Session;
use crate::models::tier::{NextTier, Tier};
use crate::models::tier_status::TierStatus;

/// Award standing for the given age group and full session set.
///
/// `total_hours` is the plain sum of the supplied durations; the caller is
/// responsible for passing the authoritative set. Durations are expected
/// non-negative (enforced at the entry boundary, not here).
pub fn compute_tier_status(group: AgeGroup, sessions: &[Session]) -> TierStatus {
    let total: f64 = sessions.iter().map(|s| s.duration_hours).sum();
    tier_status_for_total(group, total)
}

/// Same computation starting from an already-summed hour total.
pub fn tier_status_for_total(group: AgeGroup, total_hours: f64) -> TierStatus {
    let t: TierThresholds = thresholds::for_group(group);

    let (current_tier, next_tier, next_tier_hours, raw_percent) = if total_hours >= t.gold {
        (Tier::Gold, NextTier::Completed, t.gold, 100.0)
    } else if total_hours >= t.silver {
        (
            Tier::Silver,
            NextTier::Gold,
            t.gold,
            (total_hours - t.silver) / (t.gold - t.silver) * 100.0,
        )
    } else if total_hours >= t.bronze {
        (
            Tier::Bronze,
            NextTier::Silver,
            t.silver,
            (total_hours - t.bronze) / (t.silver - t.bronze) * 100.0,
        )
    } else {
        (
            Tier::None,
            NextTier::Bronze,
            t.bronze,
            total_hours / t.bronze * 100.0,
        )
    };

    TierStatus {
        total_hours,
        current_tier,
        next_tier,
        next_tier_hours,
        progress_percent: raw_percent.clamp(0.0, 100.0),
    }
}
