use crate::core::calculator::progress;
use crate::models::{age_group::AgeGroup, session::Session, tier_status::TierStatus};

pub struct Core;

impl Core {
    pub fn build_tier_status(group: AgeGroup, sessions: &[Session]) -> TierStatus {
        progress::compute_tier_status(group, sessions)
    }
}
