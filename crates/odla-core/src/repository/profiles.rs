use crate::error::CoreError;
use crate::models::{UserId, UserProfile};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl super::ProfileRepository for SqliteRepository {
    async fn find_profile(&self, user: UserId) -> Result<Option<UserProfile>, CoreError> {
        let profile = sqlx::query_as("SELECT id, full_name, created_at FROM profiles WHERE id = $1")
            .bind(user)
            .fetch_optional(self.pool())
            .await?;
        Ok(profile)
    }

    async fn find_first_profile(&self) -> Result<Option<UserProfile>, CoreError> {
        let profile = sqlx::query_as(
            "SELECT id, full_name, created_at FROM profiles ORDER BY created_at, rowid LIMIT 1",
        )
        .fetch_optional(self.pool())
        .await?;
        Ok(profile)
    }

    async fn ensure_profile(&self, user: UserId) -> Result<UserProfile, CoreError> {
        sqlx::query(
            r#"INSERT INTO profiles (id, full_name, created_at)
            VALUES ($1, NULL, $2)
            ON CONFLICT (id) DO NOTHING"#,
        )
        .bind(user)
        .bind(Utc::now())
        .execute(self.pool())
        .await?;

        self.find_profile(user)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Profile {user} not found")))
    }

    async fn update_profile_name(
        &self,
        user: UserId,
        full_name: Option<String>,
    ) -> Result<UserProfile, CoreError> {
        let full_name = full_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let profile: Option<UserProfile> = sqlx::query_as(
            r#"UPDATE profiles SET full_name = $1 WHERE id = $2
            RETURNING id, full_name, created_at"#,
        )
        .bind(full_name)
        .bind(user)
        .fetch_optional(self.pool())
        .await?;

        profile.ok_or_else(|| CoreError::NotFound(format!("Profile {user} not found")))
    }
}
