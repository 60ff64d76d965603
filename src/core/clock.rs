use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::insert_session;
use crate::db::state::{clear_state, clock_key, get_state, set_state};
use crate::errors::{AppError, AppResult};
use crate::models::profile::Profile;
use crate::models::session::Session;
use crate::ui::messages::success;
use crate::utils::formatting::format_hours;
use chrono::{DateTime, Local};

/// Clock-in/clock-out logic.
///
/// The open clock entry is a single RFC3339 instant in the `state` table,
/// keyed per user, so it survives across CLI invocations. The resulting
/// session duration is free-standing: elapsed wall-clock seconds converted
/// to hours, not a start/end subtraction re-derived later.
pub struct ClockLogic;

impl ClockLogic {
    pub fn clock_in(pool: &mut DbPool, user: &Profile) -> AppResult<()> {
        let key = clock_key(user.id);

        if let Some(existing) = get_state(&pool.conn, &key)? {
            return Err(AppError::Clock(format!(
                "Already clocked in since {}. Run 'volog clock --out' first.",
                existing
            )));
        }

        let now = Local::now();
        set_state(&pool.conn, &key, &now.to_rfc3339())?;

        crate::db::log::vlog(&pool.conn, "clock_in", &user.email, "Clock started")?;

        success(format!("Clocked in at {}.", now.format("%H:%M:%S")));
        Ok(())
    }

    pub fn clock_out(
        pool: &mut DbPool,
        cfg: &Config,
        user: &Profile,
        desc: Option<String>,
    ) -> AppResult<()> {
        let key = clock_key(user.id);

        let raw = get_state(&pool.conn, &key)?
            .ok_or_else(|| AppError::Clock("Not clocked in. Run 'volog clock --in' first.".into()))?;

        let start: DateTime<Local> = DateTime::parse_from_rfc3339(&raw)
            .map_err(|_| AppError::Clock(format!("Corrupt clock-in timestamp: {}", raw)))?
            .with_timezone(&Local);

        let now = Local::now();
        let elapsed_secs = (now - start).num_seconds();
        if elapsed_secs < 0 {
            return Err(AppError::InvalidDuration(
                "Clock-out happened before clock-in (system clock moved backwards).".into(),
            ));
        }

        let duration_hours = elapsed_secs as f64 / 3600.0;

        let description = match desc {
            Some(d) if !d.trim().is_empty() => d,
            _ => cfg.default_description.clone(),
        };

        let session = Session::new(
            user.id,
            start.date_naive(),
            Some(start.time()),
            Some(now.time()),
            duration_hours,
            description,
            "clock",
        );
        let id = insert_session(&pool.conn, &session)?;

        clear_state(&pool.conn, &key)?;

        crate::db::log::vlog(
            &pool.conn,
            "clock_out",
            &format!("session:{}", id),
            &format!(
                "Clock stopped after {} h",
                format_hours(duration_hours, cfg.hours_precision)
            ),
        )?;

        success(format!(
            "Volunteer session recorded ({} hours).",
            format_hours(duration_hours, cfg.hours_precision)
        ));
        Ok(())
    }
}
