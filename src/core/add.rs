use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_session, load_session_by_id, update_session};
use crate::errors::{AppError, AppResult};
use crate::models::profile::Profile;
use crate::models::session::Session;
use crate::ui::messages::success;
use crate::utils::formatting::format_hours;
use crate::utils::time::hours_between;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        user: &Profile,
        date: NaiveDate,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
        hours: Option<f64>,
        desc: Option<String>,
        edit_id: Option<i64>,
    ) -> AppResult<()> {
        // ------------------------------------------------
        // 1️⃣ EDIT MODE
        // ------------------------------------------------
        if let Some(id) = edit_id {
            let mut session = load_session_by_id(pool, user.id, id)?;

            session.date = date;

            if let Some(d) = desc {
                session.description = d;
            }

            // --hours replaces the duration outright and detaches the entry
            // from any stored time range.
            if let Some(h) = hours {
                validate_hours(h)?;
                session.duration_hours = h;
                session.start_time = None;
                session.end_time = None;
            } else if start.is_some() || end.is_some() {
                // Merge with the stored range, then recompute the duration.
                let merged_start = start.or(session.start_time).ok_or_else(|| {
                    AppError::InvalidTime("Session has no start time; pass --start too.".into())
                })?;
                let merged_end = end.or(session.end_time).ok_or_else(|| {
                    AppError::InvalidTime("Session has no end time; pass --end too.".into())
                })?;

                if merged_end <= merged_start {
                    return Err(AppError::InvalidTime(
                        "END must be later than START.".into(),
                    ));
                }

                session.start_time = Some(merged_start);
                session.end_time = Some(merged_end);
                session.duration_hours = hours_between(merged_start, merged_end);
            }

            update_session(&pool.conn, &session)?;

            crate::db::log::vlog(
                &pool.conn,
                "edit",
                &format!("session:{}", id),
                &format!(
                    "Updated session on {} ({} h)",
                    session.date_str(),
                    format_hours(session.duration_hours, cfg.hours_precision)
                ),
            )?;

            success(format!("✏️ Session {} updated.", id));
            return Ok(());
        }

        // ------------------------------------------------
        // 2️⃣ INSERT MODE
        // ------------------------------------------------

        // CASE A: free-standing duration
        if let Some(h) = hours {
            if start.is_some() || end.is_some() {
                return Err(AppError::InvalidDuration(
                    "Use either --start/--end or --hours, not both.".into(),
                ));
            }
            validate_hours(h)?;

            let session = Session::new(
                user.id,
                date,
                None,
                None,
                h,
                resolve_description(desc, cfg),
                "cli",
            );
            let id = insert_session(&pool.conn, &session)?;

            crate::db::log::vlog(
                &pool.conn,
                "add",
                &format!("session:{}", id),
                &format!(
                    "Added {} h on {}",
                    format_hours(h, cfg.hours_precision),
                    session.date_str()
                ),
            )?;

            success(format!(
                "Recorded {} hours on {}.",
                format_hours(h, cfg.hours_precision),
                session.date_str()
            ));
            return Ok(());
        }

        // CASE B: time range
        if let (Some(start_time), Some(end_time)) = (start, end) {
            if end_time <= start_time {
                return Err(AppError::InvalidTime(
                    "END must be later than START.".into(),
                ));
            }

            let duration = hours_between(start_time, end_time);

            let session = Session::new(
                user.id,
                date,
                Some(start_time),
                Some(end_time),
                duration,
                resolve_description(desc, cfg),
                "cli",
            );
            let id = insert_session(&pool.conn, &session)?;

            crate::db::log::vlog(
                &pool.conn,
                "add",
                &format!("session:{}", id),
                &format!(
                    "Added {} → {} on {}",
                    session.start_str(),
                    session.end_str(),
                    session.date_str()
                ),
            )?;

            success(format!(
                "Recorded {} → {} on {} ({} hours).",
                session.start_str(),
                session.end_str(),
                session.date_str(),
                format_hours(duration, cfg.hours_precision)
            ));
            return Ok(());
        }

        // CASE C: half a range
        if start.is_some() || end.is_some() {
            return Err(AppError::InvalidTime(
                "Both --start and --end are required for a time range.".into(),
            ));
        }

        Err(AppError::InvalidDuration(
            "Nothing to do: specify --start/--end or --hours.".into(),
        ))
    }
}

/// Negative durations are rejected outright, never clamped to zero: a clamp
/// would silently distort the hour total the award tiers are computed from.
fn validate_hours(h: f64) -> AppResult<()> {
    if !h.is_finite() || h < 0.0 {
        return Err(AppError::InvalidDuration(format!(
            "Duration must be a non-negative number of hours, got {}",
            h
        )));
    }
    Ok(())
}

fn resolve_description(desc: Option<String>, cfg: &Config) -> String {
    match desc {
        Some(d) if !d.trim().is_empty() => d,
        _ => cfg.default_description.clone(),
    }
}
