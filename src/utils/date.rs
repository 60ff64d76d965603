use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a period expression into inclusive date bounds.
///
/// Accepted forms:
/// - `YYYY-MM-DD` → that single day
/// - `YYYY-MM`    → the whole month
/// - `YYYY`       → the whole year
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first.year(), first.month())));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}

/// Resolve either a single period or a `start:end` range into bounds.
pub fn range_bounds(expr: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if expr.contains(':') {
        let parts: Vec<&str> = expr.split(':').collect();
        if parts.len() != 2 {
            return Err(format!("Invalid range: {}", expr));
        }
        let (start, _) = period_bounds(parts[0])?;
        let (_, end) = period_bounds(parts[1])?;
        if end < start {
            return Err(format!("Range end before start: {}", expr));
        }
        return Ok((start, end));
    }

    period_bounds(expr)
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    // month is always 1..=12 here, so the first of the next month exists
    first_of_next
        .and_then(|d| d.pred_opt())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap())
}
