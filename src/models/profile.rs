use crate::models::age_group::AgeGroup;
use chrono::Local;
use serde::Serialize;

/// A volunteer profile. The age group is derived from `age` once, at signup,
/// and stored alongside it; the thresholds table is keyed on the group, not
/// the raw age.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub email: String,
    pub phone: String,
    pub age_group: AgeGroup,
    pub created_at: String, // ⇔ users.created_at (TEXT, ISO8601)
}

impl Profile {
    pub fn new(name: String, age: u32, email: String, phone: String) -> Self {
        Self {
            id: 0,
            name,
            age,
            email,
            phone,
            age_group: AgeGroup::from_age(age),
            created_at: Local::now().to_rfc3339(),
        }
    }
}
