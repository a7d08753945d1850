// drobe-core/src/repositories/postgres/items.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use drobe_common::models::{Category, Item};
use drobe_common::traits::repository_traits::ItemRepository;
use crate::Error;

/// Postgres-backed storage for wardrobe items.
pub struct PostgresItemRepository {
    pool: Pool<Postgres>,
}

impl PostgresItemRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn row_to_item(row: &PgRow) -> Result<Item, Error> {
        let category: Option<String> = row.try_get("category")?;
        let season: Option<String> = row.try_get("season")?;
        let color: Option<String> = row.try_get("color")?;

        Ok(Item {
            item_id: row.try_get("item_id")?,
            user_id: row.try_get("user_id")?,
            category: category.map(|s| s.parse()).transpose()?,
            brand: row.try_get("brand")?,
            season: season.map(|s| s.parse()).transpose()?,
            color: color.map(|s| s.parse()).transpose()?,
            size: row.try_get("size")?,
            image: row.try_get("image")?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
        })
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn create(&self, item: &Item) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO items (
                item_id, user_id, category, brand, season, color, size, image,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
            .bind(item.item_id)
            .bind(&item.user_id)
            .bind(item.category.map(|c| c.to_string()))
            .bind(&item.brand)
            .bind(item.season.map(|s| s.to_string()))
            .bind(item.color.map(|c| c.to_string()))
            .bind(&item.size)
            .bind(item.image)
            .bind(item.created_at)
            .bind(item.updated_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get(&self, item_id: Uuid) -> Result<Option<Item>, Error> {
        let row = sqlx::query(
            r#"
            SELECT item_id, user_id, category, brand, season, color, size, image,
                   created_at, updated_at
            FROM items
            WHERE item_id = $1
            "#,
        )
            .bind(item_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_item(&r)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, item: &Item) -> Result<(), Error> {
        // user_id and created_at are immutable once written.
        sqlx::query(
            r#"
            UPDATE items
            SET category = $1,
                brand = $2,
                season = $3,
                color = $4,
                size = $5,
                image = $6,
                updated_at = $7
            WHERE item_id = $8
            "#,
        )
            .bind(item.category.map(|c| c.to_string()))
            .bind(&item.brand)
            .bind(item.season.map(|s| s.to_string()))
            .bind(item.color.map(|c| c.to_string()))
            .bind(&item.size)
            .bind(item.image)
            .bind(item.updated_at)
            .bind(item.item_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_clearing_refs(&self, item: &Item) -> Result<(), Error> {
        // One statement, so the row rewrite and the slot clear commit (or
        // fail) together.
        sqlx::query(
            r#"
            WITH cleared AS (
                UPDATE current_outfits
                SET accessories = CASE WHEN accessories = $8 THEN NULL ELSE accessories END,
                    tops        = CASE WHEN tops        = $8 THEN NULL ELSE tops END,
                    bottoms     = CASE WHEN bottoms     = $8 THEN NULL ELSE bottoms END,
                    shoes       = CASE WHEN shoes       = $8 THEN NULL ELSE shoes END,
                    updated_at  = now()
                WHERE user_id = $9
                  AND (accessories = $8 OR tops = $8 OR bottoms = $8 OR shoes = $8)
            )
            UPDATE items
            SET category = $1,
                brand = $2,
                season = $3,
                color = $4,
                size = $5,
                image = $6,
                updated_at = $7
            WHERE item_id = $8
            "#,
        )
            .bind(item.category.map(|c| c.to_string()))
            .bind(&item.brand)
            .bind(item.season.map(|s| s.to_string()))
            .bind(item.color.map(|c| c.to_string()))
            .bind(&item.size)
            .bind(item.image)
            .bind(item.updated_at)
            .bind(item.item_id)
            .bind(&item.user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, user_id: &str, item_id: Uuid) -> Result<(), Error> {
        sqlx::query(
            r#"
            WITH cleared AS (
                UPDATE current_outfits
                SET accessories = CASE WHEN accessories = $2 THEN NULL ELSE accessories END,
                    tops        = CASE WHEN tops        = $2 THEN NULL ELSE tops END,
                    bottoms     = CASE WHEN bottoms     = $2 THEN NULL ELSE bottoms END,
                    shoes       = CASE WHEN shoes       = $2 THEN NULL ELSE shoes END,
                    updated_at  = now()
                WHERE user_id = $1
                  AND (accessories = $2 OR tops = $2 OR bottoms = $2 OR shoes = $2)
            )
            DELETE FROM items WHERE item_id = $2
            "#,
        )
            .bind(user_id)
            .bind(item_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Item>, Error> {
        let rows = sqlx::query(
            r#"
            SELECT item_id, user_id, category, brand, season, color, size, image,
                   created_at, updated_at
            FROM items
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn list_for_user_in_category(
        &self,
        user_id: &str,
        category: Category,
    ) -> Result<Vec<Item>, Error> {
        let rows = sqlx::query(
            r#"
            SELECT item_id, user_id, category, brand, season, color, size, image,
                   created_at, updated_at
            FROM items
            WHERE user_id = $1 AND category = $2
            ORDER BY created_at ASC
            "#,
        )
            .bind(user_id)
            .bind(category.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_item).collect()
    }
}
