//! Chance minigames.

use super::Actions;
use crate::domain::UserId;
use crate::error::AppError;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const COINFLIP_ACTION: &str = "coinflip";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinSide {
    Heads,
    Tails,
}

#[derive(Debug, Clone, Copy)]
pub struct CoinflipResult {
    pub side: CoinSide,
}

impl Actions {
    /// Flip a coin. No profile required, but throttled per user.
    pub fn coinflip(&self, user: &UserId) -> Result<CoinflipResult, AppError> {
        self.ensure_off_cooldown(user, COINFLIP_ACTION, self.config.coinflip_cooldown_secs)?;

        let side = if rand::thread_rng().gen_bool(0.5) {
            CoinSide::Heads
        } else {
            CoinSide::Tails
        };

        Ok(CoinflipResult { side })
    }
}
