use crate::error::CoreError;
use crate::models::UserId;
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl super::WishlistRepository for SqliteRepository {
    async fn find_wishlist_plant_ids(&self, user: UserId) -> Result<Vec<i64>, CoreError> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            "SELECT plant_id FROM user_wishlist_plants WHERE user_id = $1 ORDER BY id",
        )
        .bind(user)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    async fn is_plant_on_wishlist(&self, user: UserId, plant_id: i64) -> Result<bool, CoreError> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT id FROM user_wishlist_plants WHERE user_id = $1 AND plant_id = $2",
        )
        .bind(user)
        .bind(plant_id)
        .fetch_optional(self.pool())
        .await?;
        Ok(row.is_some())
    }

    async fn toggle_wishlist(
        &self,
        user: UserId,
        plant_id: i64,
        currently_on: bool,
    ) -> Result<bool, CoreError> {
        if currently_on {
            sqlx::query("DELETE FROM user_wishlist_plants WHERE user_id = $1 AND plant_id = $2")
                .bind(user)
                .bind(plant_id)
                .execute(self.pool())
                .await?;
            tracing::debug!(user = %user, plant_id, "removed from wishlist");
            return Ok(false);
        }

        self.ensure_plant_exists(plant_id).await?;
        sqlx::query(
            r#"INSERT INTO user_wishlist_plants (user_id, plant_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, plant_id) DO NOTHING"#,
        )
        .bind(user)
        .bind(plant_id)
        .bind(Utc::now())
        .execute(self.pool())
        .await?;
        tracing::debug!(user = %user, plant_id, "added to wishlist");
        Ok(true)
    }

    async fn count_wishlist_plants(&self, user: UserId) -> Result<i64, CoreError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM user_wishlist_plants WHERE user_id = $1")
                .bind(user)
                .fetch_one(self.pool())
                .await?;
        Ok(count.0)
    }
}
