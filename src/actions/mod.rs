//! Action layer: orchestrates stores, engines, and flow guards.
//!
//! Each public method is one inbound user action. Methods return plain
//! result values; rendering and input collection belong to the caller.

pub mod daily;
pub mod games;
pub mod inventory;
pub mod profile;

pub use daily::DailyClaim;
pub use games::{CoinSide, CoinflipResult};
pub use inventory::{EquipOutcome, InventoryEntry, InventoryView, UnequipOutcome};
pub use profile::{DeleteOutcome, DeletePrompt, ProfileCreated, ProfileView};

use crate::clock::Clock;
use crate::config::Config;
use crate::confirm::ConfirmationFlow;
use crate::domain::{OwnedItem, Profile, UserId};
use crate::error::AppError;
use crate::store::{EquipmentCatalog, OwnershipStore, ProfileStore};
use crate::throttle::CooldownThrottle;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// The engine's action surface, one instance per process.
pub struct Actions {
    profiles: Arc<dyn ProfileStore>,
    catalog: Arc<dyn EquipmentCatalog>,
    ownership: Arc<dyn OwnershipStore>,
    clock: Arc<dyn Clock>,
    throttle: CooldownThrottle,
    confirmations: ConfirmationFlow,
    config: Config,
}

impl Actions {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        catalog: Arc<dyn EquipmentCatalog>,
        ownership: Arc<dyn OwnershipStore>,
        clock: Arc<dyn Clock>,
        config: Config,
    ) -> Self {
        let throttle = CooldownThrottle::new(clock.clone());
        let confirmations = ConfirmationFlow::new(clock.clone(), config.confirm_timeout_secs);
        Actions {
            profiles,
            catalog,
            ownership,
            clock,
            throttle,
            confirmations,
            config,
        }
    }

    /// Drop expired cooldown windows and confirmation sessions.
    ///
    /// Called periodically so the in-process key spaces stay bounded.
    pub fn sweep_ephemeral(&self) {
        self.throttle.sweep();
        self.confirmations.sweep();
    }

    pub(crate) fn ensure_off_cooldown(
        &self,
        user: &UserId,
        action: &str,
        window_secs: i64,
    ) -> Result<(), AppError> {
        let wait = self.throttle.check(user, action, window_secs);
        if wait > 0 {
            return Err(AppError::CooldownActive(wait));
        }
        Ok(())
    }

    pub(crate) async fn require_profile(&self, user: &UserId) -> Result<Profile, AppError> {
        self.profiles
            .get(user)
            .await?
            .ok_or_else(|| AppError::ProfileNotFound(user.to_string()))
    }

    /// Ownership records joined with their catalog definitions, in grant
    /// order. Records whose catalog entry has vanished are skipped with a
    /// warning rather than failing the whole action.
    pub(crate) async fn owned_items(&self, user: &UserId) -> Result<Vec<OwnedItem>, AppError> {
        let records = self.ownership.list_for_user(user).await?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let mut names: Vec<String> = records.iter().map(|rec| rec.item_name.clone()).collect();
        names.sort();
        names.dedup();

        let definitions = self.catalog.find_by_names(&names).await?;
        let by_name: HashMap<&str, _> = definitions
            .iter()
            .map(|def| (def.item_name.as_str(), def))
            .collect();

        Ok(records
            .into_iter()
            .filter_map(|rec| match by_name.get(rec.item_name.as_str()) {
                Some(def) => Some(OwnedItem::new(rec, (*def).clone())),
                None => {
                    warn!(
                        "user {} owns {:?} which has no catalog entry, skipping",
                        user, rec.item_name
                    );
                    None
                }
            })
            .collect())
    }
}
