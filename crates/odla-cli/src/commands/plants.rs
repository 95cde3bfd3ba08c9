use anyhow::{Context, Result};
use odla_core::catalog::{paginate, PlantFilter, CATEGORIES, TYPES};
use odla_core::error::CoreError;
use odla_core::models::Plant;
use odla_core::repository::Repository;
use owo_colors::{OwoColorize, Style};

use crate::cli::{ImportPlantsCommand, PlantListCommand, PlantsCommand, PlantsSubcommand, ShowPlantCommand};
use crate::config::Config;
use crate::util::page_index;
use crate::views::table::{display_plant, display_plants};

pub async fn plants_command(repo: &impl Repository, command: PlantsCommand, config: &Config) -> Result<()> {
    match command.command {
        PlantsSubcommand::List(list_command) => list_plants(repo, list_command, config).await,
        PlantsSubcommand::Show(show_command) => show_plant(repo, show_command).await,
        PlantsSubcommand::Import(import_command) => import_plants(repo, import_command).await,
    }
}

async fn list_plants(repo: &impl Repository, command: PlantListCommand, config: &Config) -> Result<()> {
    let filter = PlantFilter {
        search: command.search.unwrap_or_default(),
        category: command.category.unwrap_or_default(),
        plant_type: command.plant_type.unwrap_or_default(),
    };

    let subtle_style = Style::new().bright_black();
    if !filter.category.is_empty() && !CATEGORIES.contains(&filter.category.as_str()) {
        println!(
            "{}",
            format!("Unknown category '{}'. Known: {}", filter.category, CATEGORIES.join(", "))
                .style(subtle_style)
        );
    }
    if !filter.plant_type.is_empty() && !TYPES.contains(&filter.plant_type.as_str()) {
        println!(
            "{}",
            format!("Unknown type '{}'. Known: {}", filter.plant_type, TYPES.join(", "))
                .style(subtle_style)
        );
    }

    let plants = repo.find_plants().await?;
    let matches: Vec<_> = filter.apply(&plants).into_iter().cloned().collect();
    let page = paginate(&matches, page_index(command.page), config.catalog_page_size);

    display_plants(&page);
    Ok(())
}

async fn show_plant(repo: &impl Repository, command: ShowPlantCommand) -> Result<()> {
    let plant = repo
        .find_plant_by_id(command.id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("Plant with ID '{}' not found.", command.id)))?;

    display_plant(&plant);
    Ok(())
}

async fn import_plants(repo: &impl Repository, command: ImportPlantsCommand) -> Result<()> {
    let path = command.file.display().to_string();
    let raw = tokio::fs::read_to_string(&command.file)
        .await
        .with_context(|| format!("Could not read '{path}'"))?;
    let plants: Vec<Plant> =
        serde_json::from_str(&raw).with_context(|| format!("'{path}' is not a JSON array of plants"))?;

    let mut imported = 0usize;
    for plant in plants {
        let added = repo.add_plant(plant).await?;
        tracing::debug!(plant_id = added.id, name = %added.name, "imported plant");
        imported += 1;
    }

    println!(
        "{} Imported {} plants from {}",
        "✓".style(Style::new().green().bold()),
        imported.bold(),
        path
    );
    Ok(())
}
