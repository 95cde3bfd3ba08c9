//! Derivation of the annual care calendar.
//!
//! Owned plants contribute one task per care category and matching month;
//! custom tasks are appended once each, after the full plant sweep. Both
//! functions here are pure: fetching belongs to [`crate::planner`].

use crate::care::CareCategory;
use crate::models::{
    CalendarTask, CustomTask, Plant, TaskCategory, TaskKey, TaskOrigin, NO_DESCRIPTION,
};
use crate::month::Month;

/// Builds the full-year task list for a garden.
///
/// Plant tasks come first, month by month (January to December), plant by
/// plant in input order, category by category in [`CareCategory::ALL`]
/// order. Custom tasks follow in their source order.
///
/// Generated ids embed a counter and are only unique within one call.
pub fn generate_annual_tasks(plants: &[Plant], custom_tasks: &[CustomTask]) -> Vec<CalendarTask> {
    let mut tasks = Vec::new();
    let mut counter = 0usize;

    for month in Month::ALL {
        sweep_month(plants, month, &mut counter, &mut tasks);
    }

    tasks.extend(custom_tasks.iter().map(custom_calendar_task));
    tasks
}

/// Tasks targeting a single month, built with the same rules as
/// [`generate_annual_tasks`].
///
/// The counter still runs from January, so ids match the annual list.
pub fn generate_monthly_tasks(
    plants: &[Plant],
    custom_tasks: &[CustomTask],
    month: Month,
) -> Vec<CalendarTask> {
    generate_annual_tasks(plants, custom_tasks)
        .into_iter()
        .filter(|t| t.month == month)
        .collect()
}

fn sweep_month(plants: &[Plant], month: Month, counter: &mut usize, out: &mut Vec<CalendarTask>) {
    for plant in plants {
        for care in CareCategory::ALL {
            let period = care.period(plant);
            if !period.applies_in(month) {
                continue;
            }

            let action = care.action();
            out.push(CalendarTask {
                id: TaskKey::generated(plant.id, *counter, month),
                title: format!("{action} {}", plant.name),
                category: TaskCategory::Care,
                origin: TaskOrigin::Generated {
                    plant_id: plant.id,
                    plant_name: plant.name.clone(),
                    care,
                },
                month,
                description: non_blank(period.notes.as_deref())
                    .unwrap_or_else(|| format!("{action} behövs för {}.", plant.name)),
                interval: non_blank(period.interval.as_deref())
                    .unwrap_or_else(|| month.name().to_string()),
                is_completed: false,
                last_completed_year: None,
            });
            *counter += 1;
        }
    }
}

fn custom_calendar_task(task: &CustomTask) -> CalendarTask {
    let description = if task.description.trim().is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        task.description.clone()
    };

    CalendarTask {
        id: TaskKey::Custom(task.id),
        title: task.title.clone(),
        category: TaskCategory::Custom,
        origin: TaskOrigin::Custom {
            task_id: task.id,
            user_id: task.user_id,
        },
        month: task.month,
        description,
        interval: non_blank(task.interval.as_deref())
            .unwrap_or_else(|| task.month.name().to_string()),
        is_completed: task.is_completed,
        last_completed_year: task.last_completed_year,
    }
}

/// Blank text counts as missing, so the fallbacks apply.
fn non_blank(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}
