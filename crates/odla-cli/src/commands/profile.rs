use anyhow::Result;
use odla_core::error::CoreError;
use odla_core::models::UserContext;
use odla_core::planner::garden_stats;
use odla_core::repository::Repository;

use crate::cli::{ProfileCommand, ProfileSubcommand};
use crate::views::table::{display_profile, display_stats};

pub async fn profile_command(repo: &impl Repository, ctx: UserContext, command: ProfileCommand) -> Result<()> {
    match command.command {
        ProfileSubcommand::Show => {
            let profile = repo
                .find_profile(ctx.user_id)
                .await?
                .ok_or_else(|| CoreError::NotFound(format!("Profile '{}' not found.", ctx.user_id)))?;
            display_profile(&profile);
        }
        ProfileSubcommand::SetName { name } => {
            let profile = repo.update_profile_name(ctx.user_id, name).await?;
            match &profile.full_name {
                Some(name) => println!("Profile name set to '{name}'."),
                None => println!("Profile name cleared."),
            }
        }
    }
    Ok(())
}

pub async fn show_stats(repo: &impl Repository, ctx: UserContext) -> Result<()> {
    display_stats(&garden_stats(repo, &ctx).await);
    Ok(())
}
