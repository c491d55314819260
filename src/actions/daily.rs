//! Daily reward claim.

use super::Actions;
use crate::domain::UserId;
use crate::engine::{leveling, rewards, ClaimCheck, DailyReward};
use crate::error::AppError;
use tracing::info;

/// Cooldown key for the daily claim action.
pub const DAILY_ACTION: &str = "daily";

#[derive(Debug, Clone, Copy)]
pub struct DailyClaim {
    pub reward: DailyReward,
    pub streak: i64,
    pub level: i64,
    pub exp: i64,
    pub leveled_up: bool,
}

impl Actions {
    /// Claim the daily reward, extending or resetting the streak.
    ///
    /// The reward, the streak, and any resulting level change are written
    /// back in a single profile update so a failure cannot leave a
    /// half-applied claim.
    pub async fn claim_daily(&self, user: &UserId) -> Result<DailyClaim, AppError> {
        self.ensure_off_cooldown(user, DAILY_ACTION, self.config.daily_cooldown_secs)?;

        let mut profile = self.require_profile(user).await?;
        let now = self.clock.now();

        let streak = match rewards::evaluate_claim(profile.last_daily, profile.daily_streak, now) {
            ClaimCheck::AlreadyClaimedToday => return Err(AppError::AlreadyClaimedToday),
            ClaimCheck::Eligible { streak } => streak,
        };

        let reward = rewards::reward_for(streak);
        let progress = leveling::normalize(profile.level, profile.exp + reward.exp);
        let leveled_up = progress.level > profile.level;

        profile.gems += reward.gems;
        profile.trait_rerolls += reward.rerolls;
        profile.level = progress.level;
        profile.exp = progress.exp;
        profile.daily_streak = streak;
        profile.last_daily = Some(now);

        self.profiles.update(&profile).await?;

        info!(
            "daily claim for {user}: streak {streak}, +{} gems, +{} rerolls, +{} exp",
            reward.gems, reward.rerolls, reward.exp
        );

        Ok(DailyClaim {
            reward,
            streak,
            level: profile.level,
            exp: profile.exp,
            leveled_up,
        })
    }
}
