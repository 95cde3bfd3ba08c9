use chrono_humanize::Humanize;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use odla_core::catalog::Page;
use odla_core::models::{CalendarTask, GardenStats, Plant, PlantListItem, TaskCategory, UserProfile};
use odla_core::month::Month;
use owo_colors::OwoColorize;

/// A calendar task as shown to the user, with its displayed completion.
#[derive(Debug, Clone)]
pub struct ViewTask {
    pub id: String,
    pub title: String,
    pub category: TaskCategory,
    pub description: String,
    pub interval: String,
    pub completed: bool,
}

impl ViewTask {
    pub fn new(task: &CalendarTask, completed: bool) -> Self {
        Self {
            id: task.id.to_string(),
            title: task.title.clone(),
            category: task.category,
            description: task.description.clone(),
            interval: task.interval.clone(),
            completed,
        }
    }
}

fn task_table(tasks: &[ViewTask]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Task", "Category", "Interval", "Done"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(&task.id).fg(Color::DarkGrey));

        let mut title_cell = Cell::new(format!("{}\n{}", task.title, task.description));
        if task.completed {
            title_cell = title_cell
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::DarkGrey);
        }
        row.add_cell(title_cell);

        let category_cell = Cell::new(task.category.label());
        row.add_cell(match task.category {
            TaskCategory::Care => category_cell.fg(Color::Green),
            TaskCategory::Custom => category_cell.fg(Color::Cyan),
        });

        row.add_cell(Cell::new(&task.interval));
        row.add_cell(if task.completed {
            Cell::new("✓").fg(Color::Green)
        } else {
            Cell::new("")
        });
        table.add_row(row);
    }

    table
}

pub fn display_month(month: Month, tasks: &[ViewTask]) {
    println!("{}", month.name().to_uppercase().bold());
    if tasks.is_empty() {
        println!("  Inga uppgifter denna månad.");
        return;
    }
    println!("{}", task_table(tasks));
}

pub fn display_month_by_plant(month: Month, groups: &[(String, Vec<ViewTask>)]) {
    println!("{}", month.name().to_uppercase().bold());
    if groups.is_empty() {
        println!("  Inga uppgifter denna månad.");
        return;
    }
    for (label, tasks) in groups {
        println!("  {}", label.green());
        println!("{}", task_table(tasks));
    }
}

pub fn display_plants(page: &Page<PlantListItem>) {
    if page.items.is_empty() {
        println!("No plants found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Category", "Type"]);

    for plant in &page.items {
        let mut row = Row::new();
        row.add_cell(Cell::new(plant.id));
        row.add_cell(Cell::new(&plant.name).add_attribute(Attribute::Bold));
        row.add_cell(Cell::new(&plant.category));
        row.add_cell(Cell::new(&plant.plant_type));
        table.add_row(row);
    }

    println!("{table}");
    display_page_footer(page);
}

pub fn display_page_footer<T>(page: &Page<T>) {
    let mut footer = format!(
        "Page {} of {} ({} total)",
        page.page + 1,
        page.page_count.max(1),
        page.total
    );
    if page.has_prev() {
        footer.push_str(&format!(" | previous: --page {}", page.page));
    }
    if page.has_next() {
        footer.push_str(&format!(" | next: --page {}", page.page + 2));
    }
    println!("{}", footer.bright_black());
}

pub fn display_plant(plant: &Plant) {
    println!("{} {}", plant.name.bold(), format!("(#{})", plant.id).bright_black());
    if !plant.latin_name.is_empty() {
        println!("{}", plant.latin_name.italic());
    }

    let facts = [
        ("Category", plant.category.clone()),
        ("Type", plant.plant_type.clone()),
        ("Soil", plant.soil.clone()),
        ("Zone", plant.zone.map(|z| z.to_string()).unwrap_or_default()),
        ("Height", plant.height_cm.map(|h| format!("{h} cm")).unwrap_or_default()),
        ("Blooms", join_months(&plant.bloom_period)),
    ];
    for (label, value) in facts.iter().filter(|(_, v)| !v.is_empty()) {
        println!("  {}: {}", label.bright_black(), value);
    }

    if !plant.description.is_empty() {
        println!("\n{}", plant.description);
    }
    if !plant.usage.is_empty() {
        println!("\n{} {}", "Usage:".bright_black(), plant.usage);
    }

    let mut table = Table::new();
    table.set_header(vec!["Care", "Months", "Notes", "Interval"]);
    for (care, period) in plant.care_periods() {
        let months_cell = if period.is_empty() {
            Cell::new("-").fg(Color::DarkGrey)
        } else {
            Cell::new(join_months(&period.months))
        };
        table.add_row(vec![
            Cell::new(format!("{} {}", care.icon(), care.label())),
            months_cell,
            Cell::new(period.notes.as_deref().unwrap_or("")),
            Cell::new(period.interval.as_deref().unwrap_or("")),
        ]);
    }
    println!("\n{table}");

    if !plant.care_guide.is_empty() {
        println!("\n{}\n{}", "Skötselråd".bold(), plant.care_guide);
    }
}

pub fn display_stats(stats: &GardenStats) {
    let mut table = Table::new();
    table.set_header(vec!["Plants in garden", "Wishlist"]);
    table.add_row(vec![
        Cell::new(stats.total_plants).fg(Color::Green),
        Cell::new(stats.wishlist_items).fg(Color::Yellow),
    ]);
    println!("{table}");
}

pub fn display_profile(profile: &UserProfile) {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Created"]);
    table.add_row(vec![
        Cell::new(profile.id),
        Cell::new(profile.full_name.as_deref().unwrap_or("None")),
        Cell::new(profile.created_at.humanize()),
    ]);
    println!("{table}");
}

fn join_months(months: &[Month]) -> String {
    months.iter().map(|m| m.name()).collect::<Vec<_>>().join(", ")
}
