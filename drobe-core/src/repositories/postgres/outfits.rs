// drobe-core/src/repositories/postgres/outfits.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use drobe_common::models::{CurrentOutfit, OutfitPicks, OutfitSlot};
use drobe_common::traits::repository_traits::OutfitRepository;
use crate::Error;

/// Postgres-backed storage for the per-user current outfit row.
///
/// Slot column names are interpolated from `OutfitSlot::as_str()`, a closed
/// enum, never from caller input. Every write here is a single statement, so
/// concurrent writers interleave at row granularity without torn state.
pub struct PostgresOutfitRepository {
    pool: Pool<Postgres>,
}

impl PostgresOutfitRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn row_to_outfit(row: &PgRow) -> Result<CurrentOutfit, Error> {
        Ok(CurrentOutfit {
            outfit_id: row.try_get("outfit_id")?,
            user_id: row.try_get("user_id")?,
            accessories: row.try_get("accessories")?,
            tops: row.try_get("tops")?,
            bottoms: row.try_get("bottoms")?,
            shoes: row.try_get("shoes")?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
        })
    }
}

#[async_trait]
impl OutfitRepository for PostgresOutfitRepository {
    async fn get_for_user(&self, user_id: &str) -> Result<Option<CurrentOutfit>, Error> {
        let row = sqlx::query(
            r#"
            SELECT outfit_id, user_id, accessories, tops, bottoms, shoes,
                   created_at, updated_at
            FROM current_outfits
            WHERE user_id = $1
            "#,
        )
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_outfit(&r)?)),
            None => Ok(None),
        }
    }

    async fn upsert_slot(
        &self,
        user_id: &str,
        slot: OutfitSlot,
        item_id: Option<Uuid>,
    ) -> Result<Uuid, Error> {
        let sql = format!(
            r#"
            INSERT INTO current_outfits (outfit_id, user_id, {col}, created_at, updated_at)
            VALUES ($1, $2, $3, now(), now())
            ON CONFLICT (user_id)
            DO UPDATE SET {col} = EXCLUDED.{col}, updated_at = now()
            RETURNING outfit_id
            "#,
            col = slot.as_str(),
        );

        let row = sqlx::query(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(item_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("outfit_id")?)
    }

    async fn adopt_slot_if_empty(
        &self,
        user_id: &str,
        slot: OutfitSlot,
        item_id: Uuid,
    ) -> Result<Uuid, Error> {
        // First-added-wins: COALESCE keeps an existing choice, and the
        // timestamp only moves when the slot actually changes.
        let sql = format!(
            r#"
            INSERT INTO current_outfits (outfit_id, user_id, {col}, created_at, updated_at)
            VALUES ($1, $2, $3, now(), now())
            ON CONFLICT (user_id)
            DO UPDATE SET
                {col} = COALESCE(current_outfits.{col}, EXCLUDED.{col}),
                updated_at = CASE
                    WHEN current_outfits.{col} IS NULL THEN now()
                    ELSE current_outfits.updated_at
                END
            RETURNING outfit_id
            "#,
            col = slot.as_str(),
        );

        let row = sqlx::query(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(item_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("outfit_id")?)
    }

    async fn replace_all(&self, user_id: &str, picks: &OutfitPicks) -> Result<Uuid, Error> {
        let row = sqlx::query(
            r#"
            INSERT INTO current_outfits (
                outfit_id, user_id, accessories, tops, bottoms, shoes,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, now(), now())
            ON CONFLICT (user_id)
            DO UPDATE SET
                accessories = EXCLUDED.accessories,
                tops = EXCLUDED.tops,
                bottoms = EXCLUDED.bottoms,
                shoes = EXCLUDED.shoes,
                updated_at = now()
            RETURNING outfit_id
            "#,
        )
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(picks.accessories)
            .bind(picks.tops)
            .bind(picks.bottoms)
            .bind(picks.shoes)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("outfit_id")?)
    }
}
