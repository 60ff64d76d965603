use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,                 // ⇔ sessions.user_id
    pub date: NaiveDate,              // ⇔ sessions.date (TEXT "YYYY-MM-DD")
    pub start_time: Option<NaiveTime>, // ⇔ sessions.start_time (TEXT "HH:MM:SS")
    pub end_time: Option<NaiveTime>,  // ⇔ sessions.end_time (TEXT "HH:MM:SS")
    pub duration_hours: f64,          // ⇔ sessions.duration_hours (REAL, >= 0)
    pub description: String,          // ⇔ sessions.description
    pub source: String,               // ⇔ sessions.source ('cli' | 'clock')
    pub created_at: String,           // ⇔ sessions.created_at (TEXT, ISO8601)
}

impl Session {
    /// High-level constructor for sessions created from the CLI.
    /// - `id = 0` until the row is inserted
    /// - `created_at = now() in ISO8601`
    pub fn new(
        user_id: i64,
        date: NaiveDate,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
        duration_hours: f64,
        description: String,
        source: &str,
    ) -> Self {
        Self {
            id: 0,
            user_id,
            date,
            start_time,
            end_time,
            duration_hours,
            description,
            source: source.to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        match self.start_time {
            Some(t) => t.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        }
    }

    pub fn end_str(&self) -> String {
        match self.end_time {
            Some(t) => t.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        }
    }
}
