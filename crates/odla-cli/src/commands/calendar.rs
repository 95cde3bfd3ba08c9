use anyhow::Result;
use odla_core::models::UserContext;
use odla_core::month::Month;
use odla_core::planner::{garden_stats, load_monthly_tasks, LoadedTasks, Planner};
use odla_core::repository::Repository;
use owo_colors::{OwoColorize, Style};

use crate::cli::CalendarCommand;
use crate::views::table::{display_month, display_month_by_plant, display_stats, ViewTask};

pub async fn show_calendar(repo: &impl Repository, ctx: UserContext, command: CalendarCommand) -> Result<()> {
    let mut planner = Planner::new(repo, ctx);
    planner.load().await;
    warn_on_load_error(planner.annual());

    let groups = planner.grouped();
    if groups.is_empty() && command.month.is_none() && !command.all {
        println!("No tasks in your calendar.");
        println!(
            "{}",
            "Add plants with `odla garden add <plant-id>` or create a task with `odla task add`."
                .bright_black()
        );
        return Ok(());
    }

    let months: Vec<Month> = match command.month {
        Some(month) => vec![month],
        None => Month::ALL.to_vec(),
    };

    for month in months {
        let tasks = groups.month(month);
        if tasks.is_empty() && command.month.is_none() && !command.all {
            continue;
        }

        if command.by_plant {
            let by_plant: Vec<(String, Vec<ViewTask>)> = groups
                .by_plant(month)
                .into_iter()
                .map(|(label, tasks)| {
                    let views = tasks
                        .into_iter()
                        .map(|t| ViewTask::new(t, planner.is_completed(t)))
                        .collect();
                    (label, views)
                })
                .collect();
            display_month_by_plant(month, &by_plant);
        } else {
            let views: Vec<ViewTask> = tasks
                .iter()
                .map(|t| ViewTask::new(t, planner.is_completed(t)))
                .collect();
            display_month(month, &views);
        }
        println!();
    }

    Ok(())
}

/// This month's tasks followed by the garden counts.
pub async fn show_now(repo: &impl Repository, ctx: UserContext) -> Result<()> {
    let month = ctx.current_month;
    let loaded = load_monthly_tasks(repo, &ctx, month).await;
    warn_on_load_error(&loaded);

    let views: Vec<ViewTask> = loaded
        .tasks
        .iter()
        .map(|t| ViewTask::new(t, t.is_done_in(ctx.current_year)))
        .collect();

    display_month(month, &views);
    println!();
    display_stats(&garden_stats(repo, &ctx).await);
    Ok(())
}

fn warn_on_load_error(loaded: &LoadedTasks) {
    if let Some(error) = &loaded.load_error {
        eprintln!(
            "{} Could not load your tasks: {}",
            "Warning:".style(Style::new().yellow().bold()),
            error
        );
    }
}
