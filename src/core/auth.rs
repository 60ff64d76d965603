use crate::db::pool::DbPool;
use crate::db::state::{CURRENT_USER_KEY, clear_state, get_state, set_state};
use crate::db::users::{find_user_by_email, insert_user, load_user_by_id};
use crate::errors::{AppError, AppResult};
use crate::models::profile::Profile;
use crate::ui::messages::success;

/// High-level profile/login logic.
///
/// There is no real authentication here (out of scope): a login is just a
/// pointer in the `state` table selecting whose session log the other
/// commands operate on.
pub struct AuthLogic;

impl AuthLogic {
    /// Create a profile and log it in. The age group is derived from the age
    /// once, here, and never recomputed.
    pub fn signup(
        pool: &mut DbPool,
        name: &str,
        age: u32,
        email: &str,
        phone: &str,
    ) -> AppResult<Profile> {
        if name.trim().is_empty() {
            return Err(AppError::Other("Name must not be empty.".into()));
        }
        if age == 0 || age > 120 {
            return Err(AppError::InvalidAge(age.to_string()));
        }
        if find_user_by_email(pool, email)?.is_some() {
            return Err(AppError::DuplicateEmail(email.to_string()));
        }

        let mut profile = Profile::new(
            name.trim().to_string(),
            age,
            email.trim().to_lowercase(),
            phone.trim().to_string(),
        );
        profile.id = insert_user(&pool.conn, &profile)?;

        set_state(&pool.conn, CURRENT_USER_KEY, &profile.id.to_string())?;

        crate::db::log::vlog(
            &pool.conn,
            "signup",
            &profile.email,
            &format!("Created profile '{}' ({})", profile.name, profile.age_group.label()),
        )?;

        success(format!(
            "Welcome, {}! Profile created ({}).",
            profile.name,
            profile.age_group.label()
        ));

        Ok(profile)
    }

    pub fn login(pool: &mut DbPool, email: &str) -> AppResult<Profile> {
        let email = email.trim().to_lowercase();
        let profile =
            find_user_by_email(pool, &email)?.ok_or_else(|| AppError::UnknownUser(email.clone()))?;

        set_state(&pool.conn, CURRENT_USER_KEY, &profile.id.to_string())?;

        crate::db::log::vlog(&pool.conn, "login", &profile.email, "Logged in")?;

        success(format!("Logged in as {} <{}>.", profile.name, profile.email));
        Ok(profile)
    }

    pub fn logout(pool: &mut DbPool) -> AppResult<()> {
        clear_state(&pool.conn, CURRENT_USER_KEY)?;
        success("Logged out.");
        Ok(())
    }

    /// The profile the session-log commands operate on, if any.
    pub fn current_user(pool: &mut DbPool) -> AppResult<Option<Profile>> {
        let raw = get_state(&pool.conn, CURRENT_USER_KEY)?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let id: i64 = raw
            .parse()
            .map_err(|_| AppError::Other(format!("Corrupt current_user state: {}", raw)))?;

        match load_user_by_id(pool, id)? {
            Some(p) => Ok(Some(p)),
            None => {
                // Stale pointer (profile deleted out of band): clear it.
                clear_state(&pool.conn, CURRENT_USER_KEY)?;
                Ok(None)
            }
        }
    }

    /// Like current_user, but an error when nobody is logged in.
    pub fn require_user(pool: &mut DbPool) -> AppResult<Profile> {
        Self::current_user(pool)?.ok_or(AppError::NotLoggedIn)
    }
}
