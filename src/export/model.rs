use crate::models::session::Session;
use serde::Serialize;

/// Flat session shape shared by the CSV and JSON writers.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_hours: f64,
    pub description: String,
    pub source: String,
}

impl From<&Session> for SessionExport {
    fn from(s: &Session) -> Self {
        Self {
            id: s.id,
            date: s.date_str(),
            start_time: s.start_str(),
            end_time: s.end_str(),
            duration_hours: s.duration_hours,
            description: s.description.clone(),
            source: s.source.clone(),
        }
    }
}

pub(crate) fn headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "start_time",
        "end_time",
        "duration_hours",
        "description",
        "source",
    ]
}
