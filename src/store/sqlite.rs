//! SQLite-backed implementation of the persistence seams.

use super::{EquipmentCatalog, OwnershipStore, ProfileStore, StoreError};
use crate::domain::{
    Category, EquipmentDefinition, OwnershipRecord, Profile, Rarity, Slot, StatBonuses, UserId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::warn;
use uuid::Uuid;

/// Store over a sqlite connection pool.
///
/// One struct backs all three seams; the schema lives in `db/schema.sql`.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteStore { pool }
    }

    fn profile_from_row(row: &SqliteRow) -> Profile {
        let last_daily: Option<String> = row.get("last_daily");
        let last_daily = last_daily.and_then(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| warn!("ignoring unparseable last_daily {:?}: {}", s, e))
                .ok()
        });

        Profile {
            user_id: UserId::new(row.get("user_id")),
            gems: row.get("gems"),
            trait_rerolls: row.get("trait_rerolls"),
            level: row.get("level"),
            exp: row.get("exp"),
            daily_streak: row.get("daily_streak"),
            last_daily,
        }
    }

    fn definition_from_row(row: &SqliteRow) -> Result<EquipmentDefinition, StoreError> {
        let item_name: String = row.get("item_name");

        let category: String = row.get("category");
        let category = Category::from_str(&category)
            .ok_or_else(|| StoreError::Malformed(format!("unknown category {category:?}")))?;

        let slot: Option<String> = row.get("slot");
        let slot = match slot {
            None => None,
            Some(s) => Some(
                Slot::from_str(&s)
                    .ok_or_else(|| StoreError::Malformed(format!("unknown slot {s:?}")))?,
            ),
        };

        let rarity: String = row.get("rarity");
        let rarity = Rarity::from_str(&rarity)
            .ok_or_else(|| StoreError::Malformed(format!("unknown rarity {rarity:?}")))?;

        let stat_bonus: String = row.get("stat_bonus");
        let stat_bonus: StatBonuses = serde_json::from_str(&stat_bonus).map_err(|e| {
            StoreError::Malformed(format!("bad stat_bonus for {item_name:?}: {e}"))
        })?;

        Ok(EquipmentDefinition {
            item_name,
            category,
            slot,
            stat_bonus,
            rarity,
        })
    }

    fn record_from_row(row: &SqliteRow) -> Result<OwnershipRecord, StoreError> {
        let id: String = row.get("id");
        let id = Uuid::parse_str(&id)
            .map_err(|e| StoreError::Malformed(format!("bad ownership id {id:?}: {e}")))?;

        Ok(OwnershipRecord {
            id,
            user_id: UserId::new(row.get("user_id")),
            item_name: row.get("item_name"),
            is_equipped: row.get("is_equipped"),
        })
    }
}

#[async_trait]
impl ProfileStore for SqliteStore {
    async fn get(&self, user: &UserId) -> Result<Option<Profile>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, gems, trait_rerolls, level, exp, daily_streak, last_daily
            FROM profiles
            WHERE user_id = ?
            "#,
        )
        .bind(user.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(Self::profile_from_row))
    }

    async fn insert(&self, profile: &Profile) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, gems, trait_rerolls, level, exp, daily_streak, last_daily)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(profile.user_id.as_str())
        .bind(profile.gems)
        .bind(profile.trait_rerolls)
        .bind(profile.level)
        .bind(profile.exp)
        .bind(profile.daily_streak)
        .bind(profile.last_daily.map(|dt| dt.to_rfc3339()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, profile: &Profile) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE profiles
            SET gems = ?, trait_rerolls = ?, level = ?, exp = ?, daily_streak = ?, last_daily = ?
            WHERE user_id = ?
            "#,
        )
        .bind(profile.gems)
        .bind(profile.trait_rerolls)
        .bind(profile.level)
        .bind(profile.exp)
        .bind(profile.daily_streak)
        .bind(profile.last_daily.map(|dt| dt.to_rfc3339()))
        .bind(profile.user_id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, user: &UserId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM profiles WHERE user_id = ?")
            .bind(user.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl EquipmentCatalog for SqliteStore {
    async fn find_by_names(
        &self,
        names: &[String],
    ) -> Result<Vec<EquipmentDefinition>, StoreError> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; names.len()].join(", ");
        let sql = format!(
            "SELECT item_name, category, slot, stat_bonus, rarity \
             FROM equipment WHERE item_name IN ({placeholders})"
        );

        let mut query = sqlx::query(&sql);
        for name in names {
            query = query.bind(name);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(Self::definition_from_row).collect()
    }
}

#[async_trait]
impl OwnershipStore for SqliteStore {
    async fn list_for_user(&self, user: &UserId) -> Result<Vec<OwnershipRecord>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, item_name, is_equipped
            FROM user_equipment
            WHERE user_id = ?
            ORDER BY rowid ASC
            "#,
        )
        .bind(user.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::record_from_row).collect()
    }

    async fn set_equipped(&self, id: Uuid, equipped: bool) -> Result<(), StoreError> {
        sqlx::query("UPDATE user_equipment SET is_equipped = ? WHERE id = ?")
            .bind(equipped)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn bulk_set_equipped(&self, ids: &[Uuid], equipped: bool) -> Result<(), StoreError> {
        if ids.is_empty() {
            return Ok(());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql =
            format!("UPDATE user_equipment SET is_equipped = ? WHERE id IN ({placeholders})");

        let mut query = sqlx::query(&sql).bind(equipped);
        for id in ids {
            query = query.bind(id.to_string());
        }

        query.execute(&self.pool).await?;
        Ok(())
    }

    async fn insert(&self, user: &UserId, item_names: &[String]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        for name in item_names {
            sqlx::query(
                r#"
                INSERT INTO user_equipment (id, user_id, item_name, is_equipped)
                VALUES (?, ?, ?, 0)
                "#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(user.as_str())
            .bind(name)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete_for_user(&self, user: &UserId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM user_equipment WHERE user_id = ?")
            .bind(user.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
