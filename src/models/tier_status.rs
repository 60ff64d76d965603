use crate::models::tier::{NextTier, Tier};
use serde::Serialize;

/// Snapshot of a user's award standing. Computed on demand from the full
/// session set, never persisted or cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierStatus {
    pub total_hours: f64,
    pub current_tier: Tier,
    pub next_tier: NextTier,
    /// Hour minimum of `next_tier` (the gold minimum when already at gold).
    pub next_tier_hours: f64,
    /// Linear progress from the current tier floor to the next, in [0, 100].
    pub progress_percent: f64,
}

impl TierStatus {
    /// Raw hours still missing toward the next tier, floored at zero.
    pub fn hours_remaining(&self) -> f64 {
        (self.next_tier_hours - self.total_hours).max(0.0)
    }
}
