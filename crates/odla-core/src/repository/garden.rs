use crate::error::CoreError;
use crate::models::{Plant, UserId};
use crate::repository::plants::{plant_columns, PlantRow};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl super::GardenRepository for SqliteRepository {
    async fn find_garden_plant_ids(&self, user: UserId) -> Result<Vec<i64>, CoreError> {
        let rows: Vec<(i64,)> =
            sqlx::query_as("SELECT plant_id FROM user_plants WHERE user_id = $1 ORDER BY id")
                .bind(user)
                .fetch_all(self.pool())
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    async fn find_owned_plants(&self, user: UserId) -> Result<Vec<Plant>, CoreError> {
        let rows: Vec<PlantRow> = sqlx::query_as(&format!(
            r#"SELECT {} FROM plants p
            INNER JOIN user_plants up ON up.plant_id = p.id
            WHERE up.user_id = $1
            ORDER BY up.id"#,
            plant_columns("p")
        ))
        .bind(user)
        .fetch_all(self.pool())
        .await?;

        tracing::debug!(user = %user, count = rows.len(), "fetched owned plants");
        Ok(rows.into_iter().map(Plant::from).collect())
    }

    async fn add_plant_to_garden(&self, user: UserId, plant_id: i64) -> Result<(), CoreError> {
        self.ensure_plant_exists(plant_id).await?;

        sqlx::query(
            r#"INSERT INTO user_plants (user_id, plant_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, plant_id) DO NOTHING"#,
        )
        .bind(user)
        .bind(plant_id)
        .bind(Utc::now())
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn remove_plant_from_garden(&self, user: UserId, plant_id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM user_plants WHERE user_id = $1 AND plant_id = $2")
            .bind(user)
            .bind(plant_id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(format!(
                "Plant {plant_id} is not in your garden"
            )));
        }
        Ok(())
    }

    async fn is_plant_in_garden(&self, user: UserId, plant_id: i64) -> Result<bool, CoreError> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM user_plants WHERE user_id = $1 AND plant_id = $2")
                .bind(user)
                .bind(plant_id)
                .fetch_optional(self.pool())
                .await?;
        Ok(row.is_some())
    }

    async fn count_garden_plants(&self, user: UserId) -> Result<i64, CoreError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_plants WHERE user_id = $1")
            .bind(user)
            .fetch_one(self.pool())
            .await?;
        Ok(count.0)
    }
}

impl SqliteRepository {
    pub(crate) async fn ensure_plant_exists(&self, plant_id: i64) -> Result<(), CoreError> {
        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM plants WHERE id = $1")
            .bind(plant_id)
            .fetch_optional(self.pool())
            .await?;

        match exists {
            Some(_) => Ok(()),
            None => Err(CoreError::NotFound(format!("Plant with id {plant_id} not found"))),
        }
    }
}
