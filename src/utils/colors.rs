//! ANSI color helper utilities for terminal output.

use crate::models::tier::Tier;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub const BRONZE: &str = "\x1b[33m";
pub const SILVER: &str = "\x1b[37m";
pub const GOLD: &str = "\x1b[93m";

/// ANSI color for an award level badge.
pub fn color_for_tier(tier: Tier) -> &'static str {
    match tier {
        Tier::Bronze => BRONZE,
        Tier::Silver => SILVER,
        Tier::Gold => GOLD,
        Tier::None => GREY,
    }
}

