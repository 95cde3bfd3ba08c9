use crate::error::CoreError;
use crate::models::{CustomTask, NewCustomTask, UpdateCustomTask, UserId};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite};

const TASK_COLUMNS: &str = "id, user_id, title, month, description, interval, is_completed, \
    last_completed_year, created_at";

#[async_trait]
impl super::CustomTaskRepository for SqliteRepository {
    async fn find_custom_tasks(&self, user: UserId) -> Result<Vec<CustomTask>, CoreError> {
        let tasks: Vec<CustomTask> = sqlx::query_as(&format!(
            "SELECT {TASK_COLUMNS} FROM user_tasks WHERE user_id = $1 ORDER BY month, id"
        ))
        .bind(user)
        .fetch_all(self.pool())
        .await?;

        tracing::debug!(user = %user, count = tasks.len(), "fetched custom tasks");
        Ok(tasks)
    }

    async fn find_custom_task_by_id(&self, user: UserId, id: i64) -> Result<Option<CustomTask>, CoreError> {
        let task = sqlx::query_as(&format!(
            "SELECT {TASK_COLUMNS} FROM user_tasks WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user)
        .fetch_optional(self.pool())
        .await?;
        Ok(task)
    }

    async fn add_custom_task(&self, user: UserId, data: NewCustomTask) -> Result<CustomTask, CoreError> {
        let valid = data.validate()?;

        let task: CustomTask = sqlx::query_as(&format!(
            r#"INSERT INTO user_tasks (user_id, title, month, description, interval, is_completed, created_at)
            VALUES ($1, $2, $3, $4, $5, FALSE, $6)
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(user)
        .bind(&valid.title)
        .bind(i64::from(valid.month.number()))
        .bind(&valid.description)
        .bind(&valid.interval)
        .bind(Utc::now())
        .fetch_one(self.pool())
        .await?;

        tracing::debug!(user = %user, task_id = task.id, "created custom task");
        Ok(task)
    }

    async fn update_custom_task(
        &self,
        user: UserId,
        id: i64,
        data: UpdateCustomTask,
    ) -> Result<CustomTask, CoreError> {
        let data = data.validate()?;
        if data.is_empty() {
            return self
                .find_custom_task_by_id(user, id)
                .await?
                .ok_or_else(|| CoreError::NotFound(format!("Task with id {id} not found")));
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE user_tasks SET ");
        let mut fields = qb.separated(", ");

        if let Some(title) = &data.title {
            fields.push("title = ");
            fields.push_bind_unseparated(title.clone());
        }
        if let Some(month) = data.month {
            fields.push("month = ");
            fields.push_bind_unseparated(i64::from(month));
        }
        if let Some(description) = &data.description {
            fields.push("description = ");
            fields.push_bind_unseparated(description.clone());
        }
        if let Some(interval) = &data.interval {
            fields.push("interval = ");
            fields.push_bind_unseparated(interval.clone());
        }

        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(" AND user_id = ");
        qb.push_bind(user);
        qb.push(" RETURNING ");
        qb.push(TASK_COLUMNS);

        let task: Option<CustomTask> = qb.build_query_as().fetch_optional(self.pool()).await?;
        let task = task.ok_or_else(|| CoreError::NotFound(format!("Task with id {id} not found")))?;

        tracing::debug!(user = %user, task_id = id, "updated custom task");
        Ok(task)
    }

    async fn delete_custom_task(&self, user: UserId, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM user_tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(format!("Task with id {id} not found")));
        }
        tracing::debug!(user = %user, task_id = id, "deleted custom task");
        Ok(())
    }

    async fn set_task_completion(
        &self,
        user: UserId,
        id: i64,
        completed: bool,
        year: i32,
    ) -> Result<CustomTask, CoreError> {
        let task: Option<CustomTask> = sqlx::query_as(&format!(
            r#"UPDATE user_tasks
            SET is_completed = $1, last_completed_year = $2
            WHERE id = $3 AND user_id = $4
            RETURNING {TASK_COLUMNS}
            "#
        ))
        .bind(completed)
        .bind(year)
        .bind(id)
        .bind(user)
        .fetch_optional(self.pool())
        .await?;

        let task = task.ok_or_else(|| CoreError::NotFound(format!("Task with id {id} not found")))?;
        tracing::debug!(user = %user, task_id = id, completed, year, "set task completion");
        Ok(task)
    }
}
