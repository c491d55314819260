pub mod actions;
pub mod api;
pub mod clock;
pub mod config;
pub mod confirm;
pub mod db;
pub mod domain;
pub mod engine;
pub mod error;
pub mod store;
pub mod throttle;

pub use actions::Actions;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use confirm::{ConfirmOutcome, ConfirmSignal, ConfirmationFlow};
pub use db::init_db;
pub use domain::{
    Category, EquipmentDefinition, OwnedItem, OwnershipRecord, Profile, Rarity, Slot, UserId,
};
pub use error::AppError;
pub use store::{EquipmentCatalog, MemoryStore, OwnershipStore, ProfileStore, SqliteStore};
pub use throttle::CooldownThrottle;
