use anyhow::Result;
use odla_core::error::CoreError;
use odla_core::lists::{load_list_page, remove_from_list, ListKind};
use odla_core::models::{Plant, UserContext};
use odla_core::repository::Repository;
use owo_colors::{OwoColorize, Style};

use crate::cli::{ListCommand, ListSubcommand};
use crate::config::Config;
use crate::util::page_index;
use crate::views::table::display_plants;

pub async fn list_command(
    repo: &impl Repository,
    ctx: &UserContext,
    kind: ListKind,
    command: ListCommand,
    config: &Config,
) -> Result<()> {
    match command.command {
        ListSubcommand::List { page } => show_list(repo, ctx, kind, page, config).await,
        ListSubcommand::Add { plant_id } => add_to_list(repo, ctx, kind, plant_id).await,
        ListSubcommand::Remove { plant_id } => {
            let plant = find_plant(repo, plant_id).await?;
            remove_from_list(repo, ctx, kind, plant_id).await?;
            println!("Removed '{}' from {}.", plant.name, kind);
            Ok(())
        }
    }
}

async fn show_list(
    repo: &impl Repository,
    ctx: &UserContext,
    kind: ListKind,
    page: usize,
    config: &Config,
) -> Result<()> {
    let page = load_list_page(repo, ctx, kind, page_index(page), config.list_page_size).await?;

    println!("{}", kind.title().to_uppercase().bold());
    if page.total == 0 {
        let hint = match kind {
            ListKind::Garden => "Your garden is empty. Add plants with `odla garden add <plant-id>`.",
            ListKind::Wishlist => "Your wishlist is empty. Add plants with `odla wishlist add <plant-id>`.",
        };
        println!("{hint}");
        return Ok(());
    }
    display_plants(&page);
    Ok(())
}

async fn add_to_list(repo: &impl Repository, ctx: &UserContext, kind: ListKind, plant_id: i64) -> Result<()> {
    let plant = find_plant(repo, plant_id).await?;
    let success_style = Style::new().green().bold();

    match kind {
        ListKind::Garden => {
            if repo.is_plant_in_garden(ctx.user_id, plant_id).await? {
                println!("'{}' is already in {}.", plant.name, kind);
                return Ok(());
            }
            repo.add_plant_to_garden(ctx.user_id, plant_id).await?;
        }
        ListKind::Wishlist => {
            if repo.is_plant_on_wishlist(ctx.user_id, plant_id).await? {
                println!("'{}' is already on {}.", plant.name, kind);
                return Ok(());
            }
            repo.toggle_wishlist(ctx.user_id, plant_id, false).await?;
        }
    }

    println!("{} Added '{}' to {}.", "✓".style(success_style), plant.name.bold(), kind);
    Ok(())
}

async fn find_plant(repo: &impl Repository, plant_id: i64) -> Result<Plant> {
    repo.find_plant_by_id(plant_id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("Plant with ID '{plant_id}' not found.")).into())
}
