use anyhow::{anyhow, Result};
use dialoguer::Confirm;
use odla_core::error::{CoreError, ValidationError};
use odla_core::models::{NewCustomTask, TaskKey, UpdateCustomTask, UserContext};
use odla_core::planner::Planner;
use odla_core::repository::Repository;
use owo_colors::{OwoColorize, Style};

use crate::cli::{AddTaskCommand, DeleteTaskCommand, EditTaskCommand, TaskCommand, TaskSubcommand};
use crate::util::parse_month_arg;

pub async fn task_command(repo: &impl Repository, ctx: UserContext, command: TaskCommand) -> Result<()> {
    let mut planner = Planner::new(repo, ctx);

    match command.command {
        TaskSubcommand::Add(add_command) => add_task(&mut planner, add_command).await,
        TaskSubcommand::Edit(edit_command) => edit_task(&mut planner, edit_command).await,
        TaskSubcommand::Delete(delete_command) => delete_task(repo, &mut planner, delete_command).await,
        TaskSubcommand::Toggle(cmd) => set_completion(&mut planner, &cmd.id, None).await,
        TaskSubcommand::Done(cmd) => set_completion(&mut planner, &cmd.id, Some(true)).await,
        TaskSubcommand::Undo(cmd) => set_completion(&mut planner, &cmd.id, Some(false)).await,
    }
}

async fn add_task<R: Repository>(planner: &mut Planner<'_, R>, command: AddTaskCommand) -> Result<()> {
    let data = NewCustomTask {
        title: command.title,
        month: parse_month_arg(&command.month)?,
        description: command.description,
        interval: command.interval,
    };

    let task = planner.create_task(data).await?;

    println!(
        "{} Added task: {} ({})",
        "✓".style(Style::new().green().bold()),
        task.title.bright_white().bold(),
        task.month
    );
    println!("  {} Task ID: {}", "→".blue(), task.id.to_string().yellow());
    Ok(())
}

async fn edit_task<R: Repository>(planner: &mut Planner<'_, R>, command: EditTaskCommand) -> Result<()> {
    let interval = if command.interval_clear {
        Some(None)
    } else {
        command.interval.map(Some)
    };

    let update_data = UpdateCustomTask {
        title: command.title,
        month: command.month.as_deref().map(parse_month_arg).transpose()?,
        description: command.description,
        interval,
    };

    if update_data.is_empty() {
        return Err(anyhow!(CoreError::InvalidInput(
            "Nothing to change. Pass --title, --month, --description, --interval or --interval-clear.".to_string()
        )));
    }

    let updated = planner.update_task(&command.id, update_data).await?;
    println!("Updated task {}: '{}' ({})", updated.id, updated.title, updated.month);
    Ok(())
}

async fn delete_task<R: Repository>(
    repo: &R,
    planner: &mut Planner<'_, R>,
    command: DeleteTaskCommand,
) -> Result<()> {
    let id = command
        .id
        .custom_id()
        .ok_or_else(|| CoreError::from(ValidationError::NotEditable(command.id.to_string())))?;

    let task = repo
        .find_custom_task_by_id(planner.context().user_id, id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("Task with ID '{id}' not found.")))?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!("Are you sure you want to delete task '{}'?", task.title))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    planner.delete_task(&command.id).await?;
    println!("Task deleted successfully.");
    Ok(())
}

/// Sets completion to `target`, or flips it when `target` is `None`.
async fn set_completion<R: Repository>(
    planner: &mut Planner<'_, R>,
    key: &TaskKey,
    target: Option<bool>,
) -> Result<()> {
    planner.load().await;
    if let Some(error) = &planner.annual().load_error {
        return Err(anyhow!("Could not load your tasks: {error}"));
    }

    let completed = match target {
        Some(completed) => {
            planner.set_completion(key, completed).await?;
            completed
        }
        None => planner.toggle_completion(key).await?,
    };

    let task = planner
        .find(key)
        .ok_or_else(|| CoreError::NotFound(format!("Task with ID '{key}' not found.")))?;
    let year = planner.context().current_year;

    if completed {
        println!(
            "{} Completed '{}' for {}",
            "✓".style(Style::new().green().bold()),
            task.title,
            year
        );
    } else {
        println!("Marked '{}' as not done.", task.title);
    }

    if task.is_generated() {
        println!(
            "  {}",
            "This task comes from a plant's care schedule; its completion is not saved."
                .bright_black()
        );
    }
    Ok(())
}
