use serde::Serialize;

/// Award level. Ordering is meaningful: None < Bronze < Silver < Gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Tier {
    None,
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::None => "none",
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
        }
    }

    /// Uppercase display form ("BRONZE", "SILVER", ...).
    pub fn display(&self) -> &'static str {
        match self {
            Tier::None => "--",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
        }
    }
}

/// The level above the current one; Completed once gold is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NextTier {
    Bronze,
    Silver,
    Gold,
    Completed,
}

impl NextTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            NextTier::Bronze => "bronze",
            NextTier::Silver => "silver",
            NextTier::Gold => "gold",
            NextTier::Completed => "completed",
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            NextTier::Bronze => "BRONZE",
            NextTier::Silver => "SILVER",
            NextTier::Gold => "GOLD",
            NextTier::Completed => "COMPLETED",
        }
    }
}
