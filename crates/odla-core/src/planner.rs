//! The calendar service: fetch, aggregate, and route mutations.
//!
//! A [`Planner`] holds the aggregated task list for one user together with the
//! optimistic completion overrides. Every successful create, edit or delete
//! is followed by a full reload; toggles patch the loaded list in place.

use crate::aggregate::{generate_annual_tasks, generate_monthly_tasks};
use crate::calendar::{group_by_month, MonthlyGroups};
use crate::completion::CompletionOverrides;
use crate::error::{CoreError, ValidationError};
use crate::models::{
    CalendarTask, CustomTask, GardenStats, NewCustomTask, Plant, TaskKey, UpdateCustomTask,
    UserContext,
};
use crate::month::Month;
use crate::repository::Repository;

/// Result of one load. A failed fetch leaves `tasks` empty and sets
/// `load_error`; partial results are never kept.
#[derive(Debug, Clone, Default)]
pub struct LoadedTasks {
    pub tasks: Vec<CalendarTask>,
    pub load_error: Option<String>,
}

impl LoadedTasks {
    pub fn is_failed(&self) -> bool {
        self.load_error.is_some()
    }
}

pub struct Planner<'a, R: Repository> {
    repo: &'a R,
    ctx: UserContext,
    annual: LoadedTasks,
    overrides: CompletionOverrides,
}

impl<'a, R: Repository> Planner<'a, R> {
    pub fn new(repo: &'a R, ctx: UserContext) -> Self {
        Self {
            repo,
            ctx,
            annual: LoadedTasks::default(),
            overrides: CompletionOverrides::new(),
        }
    }

    pub fn context(&self) -> &UserContext {
        &self.ctx
    }

    /// Fetches the garden and the custom tasks concurrently and rebuilds the
    /// annual list. Never fails: errors are logged and reported through
    /// [`LoadedTasks::load_error`].
    pub async fn load(&mut self) -> &LoadedTasks {
        self.annual = degrade(
            fetch_sources(self.repo, &self.ctx).await,
            &self.ctx,
            |(plants, custom_tasks)| generate_annual_tasks(&plants, &custom_tasks),
        );
        &self.annual
    }

    pub fn annual(&self) -> &LoadedTasks {
        &self.annual
    }

    pub fn tasks(&self) -> &[CalendarTask] {
        &self.annual.tasks
    }

    pub fn grouped(&self) -> MonthlyGroups {
        group_by_month(self.annual.tasks.iter().cloned())
    }

    pub fn find(&self, key: &TaskKey) -> Option<&CalendarTask> {
        self.annual.tasks.iter().find(|t| t.id == *key)
    }

    /// Completion as the user should see it right now.
    pub fn is_completed(&self, task: &CalendarTask) -> bool {
        self.overrides.display_completed(task, self.ctx.current_year)
    }

    /// Flips the displayed completion of a loaded task. See [`Planner::set_completion`].
    pub async fn toggle_completion(&mut self, key: &TaskKey) -> Result<bool, CoreError> {
        let task = self
            .find(key)
            .ok_or_else(|| CoreError::NotFound(format!("Task {key} not found")))?;
        let next = !self.is_completed(task);
        self.set_completion(key, next).await?;
        Ok(next)
    }

    /// Applies `completed` locally first, then persists it for custom tasks.
    ///
    /// Generated tasks are never written; their state lives only in this
    /// planner. A failed write restores the previous local state.
    pub async fn set_completion(&mut self, key: &TaskKey, completed: bool) -> Result<(), CoreError> {
        if self.find(key).is_none() {
            return Err(CoreError::NotFound(format!("Task {key} not found")));
        }

        let previous = self.overrides.set(key.clone(), completed);

        let id = match key {
            TaskKey::Generated(_) => {
                tracing::debug!(task = %key, completed, "local-only completion for generated task");
                return Ok(());
            }
            TaskKey::Custom(id) => *id,
        };

        match self
            .repo
            .set_task_completion(self.ctx.user_id, id, completed, self.ctx.current_year)
            .await
        {
            Ok(stored) => {
                if let Some(task) = self.annual.tasks.iter_mut().find(|t| t.id == *key) {
                    task.is_completed = stored.is_completed;
                    task.last_completed_year = stored.last_completed_year;
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!(task = %key, error = %e, "completion write failed, reverting");
                self.overrides.restore(key.clone(), previous);
                Err(e)
            }
        }
    }

    /// Creates a custom task for the current user and reloads.
    pub async fn create_task(&mut self, data: NewCustomTask) -> Result<CustomTask, CoreError> {
        data.validate()?;
        let task = self.repo.add_custom_task(self.ctx.user_id, data).await?;
        self.load().await;
        Ok(task)
    }

    /// Edits a custom task and reloads. Generated tasks are rejected.
    pub async fn update_task(
        &mut self,
        key: &TaskKey,
        data: UpdateCustomTask,
    ) -> Result<CustomTask, CoreError> {
        let id = editable_id(key)?;
        let data = data.validate()?;
        let task = self.repo.update_custom_task(self.ctx.user_id, id, data).await?;
        self.load().await;
        Ok(task)
    }

    /// Deletes a custom task and reloads. Confirmation is the caller's job.
    pub async fn delete_task(&mut self, key: &TaskKey) -> Result<(), CoreError> {
        let id = editable_id(key)?;
        self.repo.delete_custom_task(self.ctx.user_id, id).await?;
        self.overrides.restore(key.clone(), None);
        self.load().await;
        Ok(())
    }
}

fn editable_id(key: &TaskKey) -> Result<i64, CoreError> {
    key.custom_id()
        .ok_or_else(|| ValidationError::NotEditable(key.to_string()).into())
}

async fn fetch_sources<R: Repository>(
    repo: &R,
    ctx: &UserContext,
) -> Result<(Vec<Plant>, Vec<CustomTask>), CoreError> {
    tokio::try_join!(
        repo.find_owned_plants(ctx.user_id),
        repo.find_custom_tasks(ctx.user_id)
    )
}

/// The tasks for a single month, fetched fresh. Degrades like
/// [`Planner::load`].
pub async fn load_monthly_tasks<R: Repository>(
    repo: &R,
    ctx: &UserContext,
    month: Month,
) -> LoadedTasks {
    degrade(fetch_sources(repo, ctx).await, ctx, |(plants, custom_tasks)| {
        generate_monthly_tasks(&plants, &custom_tasks, month)
    })
}

fn degrade(
    sources: Result<(Vec<Plant>, Vec<CustomTask>), CoreError>,
    ctx: &UserContext,
    build: impl FnOnce((Vec<Plant>, Vec<CustomTask>)) -> Vec<CalendarTask>,
) -> LoadedTasks {
    match sources {
        Ok(sources) => LoadedTasks {
            tasks: build(sources),
            load_error: None,
        },
        Err(e) => {
            tracing::error!(user = %ctx.user_id, error = %e, "failed to load tasks");
            LoadedTasks {
                tasks: Vec::new(),
                load_error: Some(e.to_string()),
            }
        }
    }
}

/// Garden and wishlist counts; zeros (and a logged error) when either fails.
pub async fn garden_stats<R: Repository>(repo: &R, ctx: &UserContext) -> GardenStats {
    let counts = tokio::try_join!(
        repo.count_garden_plants(ctx.user_id),
        repo.count_wishlist_plants(ctx.user_id)
    );

    match counts {
        Ok((total_plants, wishlist_items)) => GardenStats {
            total_plants,
            wishlist_items,
        },
        Err(e) => {
            tracing::error!(user = %ctx.user_id, error = %e, "failed to load garden stats");
            GardenStats::default()
        }
    }
}
