use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::calculator::thresholds;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_sessions;
use crate::errors::AppResult;
use crate::models::tier::{NextTier, Tier};
use crate::utils::colors::{CYAN, GREY, RESET, color_for_tier};
use crate::utils::formatting::{bold, format_hours, progress_bar};
use crate::utils::table::Table;

const BAR_WIDTH: usize = 24;

/// Render the award standing for the current profile: the CLI counterpart
/// of the award progress screen.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let user = AuthLogic::require_user(&mut pool)?;

    let sessions = load_sessions(&mut pool, user.id)?;
    let status = Core::build_tier_status(user.age_group, &sessions);

    println!(
        "{}",
        bold(&format!(
            "🏅 Volunteer Service Award · {}",
            user.age_group.label()
        ))
    );
    println!();

    println!(
        "{}• Total hours:{}   {}",
        CYAN,
        RESET,
        format_hours(status.total_hours, cfg.hours_precision)
    );

    match status.current_tier {
        Tier::None => println!("{}• Current level:{} {}not yet qualified{}", CYAN, RESET, GREY, RESET),
        tier => println!(
            "{}• Current level:{} {}{}{}",
            CYAN,
            RESET,
            color_for_tier(tier),
            tier.display(),
            RESET
        ),
    }

    match status.next_tier {
        NextTier::Completed => {
            println!("{}• Next level:{}    completed, gold achieved!", CYAN, RESET);
        }
        next => {
            println!(
                "{}• Next level:{}    {} ({}+ hours)",
                CYAN,
                RESET,
                next.display(),
                status.next_tier_hours
            );
        }
    }

    println!();
    println!(
        "   [{}] {:.1}%",
        progress_bar(status.progress_percent, BAR_WIDTH),
        status.progress_percent
    );

    if status.next_tier != NextTier::Completed {
        // Remainder computed from raw totals; rounded once, here.
        println!(
            "   {} more hours to {}",
            format_hours(status.hours_remaining(), cfg.hours_precision),
            status.next_tier.display()
        );
    }

    println!();
    print_requirements(&user.age_group, status.current_tier);

    Ok(())
}

/// Award requirements table for the user's age group, with the reached
/// level marked.
fn print_requirements(group: &crate::models::age_group::AgeGroup, current: Tier) {
    let t = thresholds::for_group(*group);

    // Plain cells: the table pads on display width and ANSI codes would
    // inflate it.
    let mut table = Table::new(vec!["AWARD", "HOURS REQUIRED", ""]);
    for (tier, min) in [
        (Tier::Bronze, t.bronze),
        (Tier::Silver, t.silver),
        (Tier::Gold, t.gold),
    ] {
        let marker = if current >= tier { "✔" } else { "" };
        table.add_row(vec![
            tier.display().to_string(),
            format!("{}+ hours", min),
            marker.to_string(),
        ]);
    }

    println!("Award requirements:\n");
    print!("{}", table.render());
}
