use serde::Serialize;

/// Life-stage bucket used to select the award hour thresholds.
/// Derived once at signup from the numeric age and stored with the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgeGroup {
    Kids,        // 5-10
    Teens,       // 11-15
    YoungAdults, // 16-18
    Adults,      // 19+ and any age outside the defined buckets
}

impl AgeGroup {
    /// Map a numeric age onto its group. Ages outside the kid/teen/young-adult
    /// buckets fall into Adults.
    pub fn from_age(age: u32) -> Self {
        match age {
            5..=10 => AgeGroup::Kids,
            11..=15 => AgeGroup::Teens,
            16..=18 => AgeGroup::YoungAdults,
            _ => AgeGroup::Adults,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AgeGroup::Kids => "kids",
            AgeGroup::Teens => "teens",
            AgeGroup::YoungAdults => "young_adults",
            AgeGroup::Adults => "adults",
        }
    }

    /// Convert DB string → enum. Returns None for anything outside the four
    /// known groups; callers decide whether that is a hard error.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "kids" => Some(AgeGroup::Kids),
            "teens" => Some(AgeGroup::Teens),
            "young_adults" => Some(AgeGroup::YoungAdults),
            "adults" => Some(AgeGroup::Adults),
            _ => None,
        }
    }

    /// Human-readable label shown in `whoami` and `progress`.
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Kids => "Kids (5-10 years)",
            AgeGroup::Teens => "Teens (11-15 years)",
            AgeGroup::YoungAdults => "Young Adults (16-18 years)",
            AgeGroup::Adults => "Adults (19+ years)",
        }
    }

    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Kids,
        AgeGroup::Teens,
        AgeGroup::YoungAdults,
        AgeGroup::Adults,
    ];
}
