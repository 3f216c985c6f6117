use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::rows::{DigestRow, MealRow, ProfileRow, WaterRow};
use super::{NutritionStore, StoreError};
use crate::nutrition::{Digest, MealEntry, Profile, WaterEntry};

/// Read-only access to the hosted Postgres database filled by the chat bot.
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        Ok(Self { db })
    }
}

#[async_trait]
impl NutritionStore for PgStore {
    async fn list_meals_between(
        &self,
        user_id: Uuid,
        from: OffsetDateTime,
        to: OffsetDateTime,
    ) -> Result<Vec<MealEntry>, StoreError> {
        let rows = sqlx::query_as::<_, MealRow>(
            r#"
            SELECT id, dish, meal_type, eaten_at,
                   kcal::float8 AS kcal, prot::float8 AS prot,
                   fat::float8 AS fat, carb::float8 AS carb
            FROM meals
            WHERE user_id = $1 AND eaten_at >= $2 AND eaten_at < $3
            ORDER BY eaten_at ASC
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.db)
        .await?;
        Ok(rows.into_iter().map(MealEntry::from).collect())
    }

    async fn list_water_between(
        &self,
        user_id: Uuid,
        from: OffsetDateTime,
        to: OffsetDateTime,
    ) -> Result<Vec<WaterEntry>, StoreError> {
        let rows = sqlx::query_as::<_, WaterRow>(
            r#"
            SELECT id, amount::float8 AS amount, logged_at
            FROM water
            WHERE user_id = $1 AND logged_at >= $2 AND logged_at < $3
            ORDER BY logged_at ASC
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.db)
        .await?;
        Ok(rows.into_iter().map(WaterEntry::from).collect())
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT first_name,
                   daily_calories_goal::float8 AS daily_calories_goal,
                   daily_protein_goal::float8 AS daily_protein_goal,
                   daily_fat_goal::float8 AS daily_fat_goal,
                   daily_carbs_goal::float8 AS daily_carbs_goal
            FROM profiles
            WHERE user_id = $1
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(Profile::from))
    }

    async fn latest_digest(&self, user_id: Uuid) -> Result<Option<Digest>, StoreError> {
        let row = sqlx::query_as::<_, DigestRow>(
            r#"
            SELECT for_date, summary_md, recommendation
            FROM digests
            WHERE user_id = $1
            ORDER BY for_date DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(Digest::from))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }
}
