//! Profile lifecycle actions: create, view, and guarded delete.

use super::Actions;
use crate::confirm::{ConfirmOutcome, ConfirmSignal};
use crate::domain::{Profile, Slot, UserId};
use crate::engine::{leveling, power};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use tracing::info;

/// Confirmation-flow key for profile deletion.
pub const DELETE_ACTION: &str = "profile_delete";

#[derive(Debug, Clone)]
pub struct ProfileCreated {
    pub profile: Profile,
    /// Starter-kit item names actually granted.
    pub granted_items: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProfileView {
    pub user_id: UserId,
    pub level: i64,
    pub exp: i64,
    pub max_exp: i64,
    pub power: i64,
    pub gems: i64,
    pub trait_rerolls: i64,
    pub daily_streak: i64,
    /// Equipped item name per slot, in display order.
    pub equipped: Vec<(Slot, Option<String>)>,
}

#[derive(Debug, Clone, Copy)]
pub struct DeletePrompt {
    pub deadline: DateTime<Utc>,
}

/// What happened to a pending delete after a signal arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Canceled,
    TimedOut,
    NonePending,
}

impl Actions {
    /// Create a profile and grant the configured starter kit.
    pub async fn create_profile(&self, user: &UserId) -> Result<ProfileCreated, AppError> {
        if self.profiles.get(user).await?.is_some() {
            return Err(AppError::ProfileAlreadyExists(user.to_string()));
        }

        let profile = Profile::new(user.clone());
        self.profiles.insert(&profile).await?;

        let granted_items = if self.config.starter_items.is_empty() {
            Vec::new()
        } else {
            // only grant names the catalog actually knows
            let definitions = self
                .catalog
                .find_by_names(&self.config.starter_items)
                .await?;
            let names: Vec<String> = definitions
                .into_iter()
                .map(|def| def.item_name)
                .collect();
            if !names.is_empty() {
                self.ownership.insert(user, &names).await?;
            }
            names
        };

        info!("created profile for {user} ({} starter items)", granted_items.len());
        Ok(ProfileCreated {
            profile,
            granted_items,
        })
    }

    /// View a profile with derived level progress, power, and equipment.
    ///
    /// A stale (level, exp) pair is re-normalized and written back before
    /// the view is returned.
    pub async fn view_profile(&self, user: &UserId) -> Result<ProfileView, AppError> {
        let mut profile = self.require_profile(user).await?;

        let progress = leveling::normalize(profile.level, profile.exp);
        if progress.level != profile.level || progress.exp != profile.exp {
            profile.level = progress.level;
            profile.exp = progress.exp;
            self.profiles.update(&profile).await?;
        }

        let items = self.owned_items(user).await?;
        let equipped = Slot::ALL
            .iter()
            .map(|slot| {
                let name = items
                    .iter()
                    .find(|item| item.record.is_equipped && item.slot() == Some(*slot))
                    .map(|item| item.name().to_string());
                (*slot, name)
            })
            .collect();

        Ok(ProfileView {
            user_id: profile.user_id.clone(),
            level: profile.level,
            exp: profile.exp,
            max_exp: leveling::max_exp(profile.level),
            power: power::total_power(&items, profile.level),
            gems: profile.gems,
            trait_rerolls: profile.trait_rerolls,
            daily_streak: profile.daily_streak,
            equipped,
        })
    }

    /// Start the two-step delete flow and return the prompt deadline.
    pub async fn request_delete(&self, user: &UserId) -> Result<DeletePrompt, AppError> {
        self.require_profile(user).await?;
        let deadline = self.confirmations.begin(user, DELETE_ACTION);
        Ok(DeletePrompt { deadline })
    }

    /// Feed a confirm/cancel signal into the pending delete flow.
    ///
    /// Only a confirmed session deletes anything; the ownership rows go
    /// first so a cascade-less backend cannot orphan them.
    pub async fn resolve_delete(
        &self,
        user: &UserId,
        signal: ConfirmSignal,
    ) -> Result<DeleteOutcome, AppError> {
        match self.confirmations.resolve(user, DELETE_ACTION, signal) {
            ConfirmOutcome::Confirmed => {
                self.ownership.delete_for_user(user).await?;
                self.profiles.delete(user).await?;
                info!("deleted profile for {user}");
                Ok(DeleteOutcome::Deleted)
            }
            ConfirmOutcome::Canceled => Ok(DeleteOutcome::Canceled),
            ConfirmOutcome::TimedOut => Ok(DeleteOutcome::TimedOut),
            ConfirmOutcome::NonePending => Ok(DeleteOutcome::NonePending),
        }
    }
}
