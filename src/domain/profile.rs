//! Player profile: the persistent economy/progression record.

use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A player's persistent profile row.
///
/// `level`/`exp` are kept normalized: `exp` is progress toward the next
/// level and stays below `leveling::max_exp(level)` once written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    pub gems: i64,
    pub trait_rerolls: i64,
    pub level: i64,
    pub exp: i64,
    pub daily_streak: i64,
    pub last_daily: Option<DateTime<Utc>>,
}

impl Profile {
    /// A freshly created profile with starting balances.
    pub fn new(user_id: UserId) -> Self {
        Profile {
            user_id,
            gems: 0,
            trait_rerolls: 0,
            level: 1,
            exp: 0,
            daily_streak: 0,
            last_daily: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_defaults() {
        let p = Profile::new(UserId::new("u1".to_string()));
        assert_eq!(p.level, 1);
        assert_eq!(p.exp, 0);
        assert_eq!(p.gems, 0);
        assert_eq!(p.trait_rerolls, 0);
        assert_eq!(p.daily_streak, 0);
        assert!(p.last_daily.is_none());
    }
}
