//! In-memory store double for tests and local development.

use super::{EquipmentCatalog, OwnershipStore, ProfileStore, StoreError};
use crate::domain::{EquipmentDefinition, OwnershipRecord, Profile, UserId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory implementation of all three persistence seams.
///
/// Ownership rows keep insertion order, matching the sqlite backend's
/// grant-order listing.
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: Mutex<HashMap<UserId, Profile>>,
    catalog: Mutex<Vec<EquipmentDefinition>>,
    ownership: Mutex<Vec<OwnershipRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a catalog definition.
    pub fn with_definition(self, definition: EquipmentDefinition) -> Self {
        self.catalog
            .lock()
            .expect("catalog lock poisoned")
            .push(definition);
        self
    }

    /// Seed multiple catalog definitions.
    pub fn with_definitions(self, definitions: Vec<EquipmentDefinition>) -> Self {
        self.catalog
            .lock()
            .expect("catalog lock poisoned")
            .extend(definitions);
        self
    }

    /// Seed an existing profile row.
    pub fn with_profile(self, profile: Profile) -> Self {
        self.profiles
            .lock()
            .expect("profiles lock poisoned")
            .insert(profile.user_id.clone(), profile);
        self
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get(&self, user: &UserId) -> Result<Option<Profile>, StoreError> {
        Ok(self
            .profiles
            .lock()
            .expect("profiles lock poisoned")
            .get(user)
            .cloned())
    }

    async fn insert(&self, profile: &Profile) -> Result<(), StoreError> {
        self.profiles
            .lock()
            .expect("profiles lock poisoned")
            .insert(profile.user_id.clone(), profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &Profile) -> Result<(), StoreError> {
        self.profiles
            .lock()
            .expect("profiles lock poisoned")
            .insert(profile.user_id.clone(), profile.clone());
        Ok(())
    }

    async fn delete(&self, user: &UserId) -> Result<(), StoreError> {
        self.profiles
            .lock()
            .expect("profiles lock poisoned")
            .remove(user);
        Ok(())
    }
}

#[async_trait]
impl EquipmentCatalog for MemoryStore {
    async fn find_by_names(
        &self,
        names: &[String],
    ) -> Result<Vec<EquipmentDefinition>, StoreError> {
        let catalog = self.catalog.lock().expect("catalog lock poisoned");
        Ok(catalog
            .iter()
            .filter(|def| names.contains(&def.item_name))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl OwnershipStore for MemoryStore {
    async fn list_for_user(&self, user: &UserId) -> Result<Vec<OwnershipRecord>, StoreError> {
        let ownership = self.ownership.lock().expect("ownership lock poisoned");
        Ok(ownership
            .iter()
            .filter(|rec| &rec.user_id == user)
            .cloned()
            .collect())
    }

    async fn set_equipped(&self, id: Uuid, equipped: bool) -> Result<(), StoreError> {
        let mut ownership = self.ownership.lock().expect("ownership lock poisoned");
        for rec in ownership.iter_mut() {
            if rec.id == id {
                rec.is_equipped = equipped;
            }
        }
        Ok(())
    }

    async fn bulk_set_equipped(&self, ids: &[Uuid], equipped: bool) -> Result<(), StoreError> {
        let mut ownership = self.ownership.lock().expect("ownership lock poisoned");
        for rec in ownership.iter_mut() {
            if ids.contains(&rec.id) {
                rec.is_equipped = equipped;
            }
        }
        Ok(())
    }

    async fn insert(&self, user: &UserId, item_names: &[String]) -> Result<(), StoreError> {
        let mut ownership = self.ownership.lock().expect("ownership lock poisoned");
        for name in item_names {
            ownership.push(OwnershipRecord::new(user.clone(), name.clone()));
        }
        Ok(())
    }

    async fn delete_for_user(&self, user: &UserId) -> Result<(), StoreError> {
        let mut ownership = self.ownership.lock().expect("ownership lock poisoned");
        ownership.retain(|rec| &rec.user_id != user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id.to_string())
    }

    #[tokio::test]
    async fn test_profile_round_trip() {
        let store = MemoryStore::new();
        let profile = Profile::new(user("u1"));

        ProfileStore::insert(&store, &profile).await.unwrap();
        assert_eq!(store.get(&user("u1")).await.unwrap(), Some(profile));

        store.delete(&user("u1")).await.unwrap();
        assert_eq!(store.get(&user("u1")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ownership_preserves_grant_order() {
        let store = MemoryStore::new();
        OwnershipStore::insert(
            &store,
            &user("u1"),
            &["Iron Sword".to_string(), "Ironwood Staff".to_string()],
        )
        .await
        .unwrap();

        let records = store.list_for_user(&user("u1")).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].item_name, "Iron Sword");
        assert_eq!(records[1].item_name, "Ironwood Staff");
    }

    #[tokio::test]
    async fn test_delete_for_user_is_scoped() {
        let store = MemoryStore::new();
        OwnershipStore::insert(&store, &user("u1"), &["Iron Sword".to_string()])
            .await
            .unwrap();
        OwnershipStore::insert(&store, &user("u2"), &["Iron Sword".to_string()])
            .await
            .unwrap();

        store.delete_for_user(&user("u1")).await.unwrap();
        assert!(store.list_for_user(&user("u1")).await.unwrap().is_empty());
        assert_eq!(store.list_for_user(&user("u2")).await.unwrap().len(), 1);
    }
}
