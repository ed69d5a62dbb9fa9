//! Weekly plan generation
//!
//! Deterministic rules engine: one `PlayerContext` in, one seven-day plan
//! out. Match weeks are built backwards from the match day; match-free
//! weeks front-load the five standard sessions. A fatigue pass then
//! dampens volume across the whole week.

use crate::error::TrainerError;
use crate::models::plan::{PlayerContext, Session, WeekPlan};
use crate::sessions::{self, PreMatchLevel};

/// Suffix appended to every session the fatigue pass reduces
const FATIGUE_NOTE: &str = " [Vol. -30% por fatiga alta]";

/// Fatigue at or above this level triggers the dampening pass
const FATIGUE_DAMPEN_THRESHOLD: u8 = 4;

/// Generate the week plan for the given context. Pure and deterministic:
/// identical contexts always produce identical plans.
pub fn generate_plan(ctx: &PlayerContext) -> Result<WeekPlan, TrainerError> {
    ctx.validate()?;

    let mut slots: [Session; 7] = std::array::from_fn(|_| sessions::rest());

    if ctx.has_match {
        // validate() guarantees the day is present on this branch
        if let Some(match_day) = ctx.match_day {
            // Fixed application order: match day, +1, -3, -2, -1.
            // Later writes win if offsets ever landed on the same slot.
            slots[match_day.index()] = sessions::match_day();
            slots[match_day.offset(1).index()] = sessions::regenerative();
            slots[match_day.offset(-3).index()] =
                sessions::pre_match(PreMatchLevel::Medium, ctx.objective);
            slots[match_day.offset(-2).index()] =
                sessions::pre_match(PreMatchLevel::Low, ctx.objective);
            slots[match_day.offset(-1).index()] = sessions::activation();
        }
    } else {
        // Monday through Friday; Saturday and Sunday stay on rest
        for (slot, session) in slots.iter_mut().zip(sessions::no_match_week(ctx.objective)) {
            *slot = session;
        }
    }

    Ok(dampen_for_fatigue(WeekPlan::from_sessions(slots), ctx.fatigue))
}

/// Volume reduction for high fatigue, as a transform producing a new plan.
/// Every session above intensity 1 drops one level; rest days and
/// already-minimal sessions stay untouched.
fn dampen_for_fatigue(plan: WeekPlan, fatigue: u8) -> WeekPlan {
    if fatigue < FATIGUE_DAMPEN_THRESHOLD {
        return plan;
    }

    let days = plan
        .days
        .into_iter()
        .map(|mut planned| {
            if planned.session.intensity > 1 {
                planned.session.intensity -= 1;
                planned.session.detail.push_str(FATIGUE_NOTE);
            }
            planned
        })
        .collect();

    WeekPlan { days }
}
