//! Daily-claim streak tracking and reward scaling.

use chrono::{DateTime, Utc};

pub const BASE_GEMS: i64 = 150;
pub const GEMS_PER_3_DAYS: i64 = 100;
pub const BASE_REROLLS: i64 = 1;
pub const REROLLS_PER_3_DAYS: i64 = 2;
pub const BASE_EXP: i64 = 50;
pub const EXP_PER_DAY: i64 = 10;

/// Result of checking a claim against the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimCheck {
    /// A claim was already made on today's calendar date (UTC).
    AlreadyClaimedToday,
    /// Claim permitted; `streak` is the new streak value to persist.
    Eligible { streak: i64 },
}

/// Evaluate daily-claim eligibility and the streak transition.
///
/// Dates are compared as UTC calendar days, not 24-hour windows: a claim
/// late on one day and early the next still counts as consecutive.
pub fn evaluate_claim(
    last_daily: Option<DateTime<Utc>>,
    current_streak: i64,
    now: DateTime<Utc>,
) -> ClaimCheck {
    let today = now.date_naive();

    match last_daily {
        None => ClaimCheck::Eligible { streak: 1 },
        Some(last) => {
            let last_day = last.date_naive();
            if last_day == today {
                return ClaimCheck::AlreadyClaimedToday;
            }
            let gap_days = (today - last_day).num_days();
            if gap_days == 1 {
                ClaimCheck::Eligible {
                    streak: current_streak + 1,
                }
            } else {
                // missed at least one day, streak starts over
                ClaimCheck::Eligible { streak: 1 }
            }
        }
    }
}

/// The amounts granted by one daily claim at a given streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyReward {
    pub gems: i64,
    pub rerolls: i64,
    pub exp: i64,
}

/// Compute the scaled reward for a claim at `streak`.
///
/// Gems and rerolls step up every third streak day; exp scales linearly.
pub fn reward_for(streak: i64) -> DailyReward {
    let streak_tier = streak / 3;
    DailyReward {
        gems: BASE_GEMS + streak_tier * GEMS_PER_3_DAYS,
        rerolls: BASE_REROLLS + streak_tier * REROLLS_PER_3_DAYS,
        exp: BASE_EXP + streak * EXP_PER_DAY,
    }
}
