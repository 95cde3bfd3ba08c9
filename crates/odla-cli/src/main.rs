use clap::Parser;
use odla_core::db;
use odla_core::error::{CoreError, ValidationError};
use odla_core::lists::ListKind;
use odla_core::repository::{Repository, SqliteRepository};
use owo_colors::{OwoColorize, Style};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod util;
mod views;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr so tables on stdout stay clean; RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("odla=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = match config::Config::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} Invalid configuration: {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let db_pool = match db::establish_connection(&config.database_path).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("{} {}: {}", "Error:".red().bold(), e, config.database_path);
            std::process::exit(1);
        }
    };
    let repository = SqliteRepository::new(db_pool);

    let result = run(&repository, &config, cli.command).await;
    repository.close().await;

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

async fn run(repo: &impl Repository, config: &config::Config, command: cli::Commands) -> anyhow::Result<()> {
    let ctx = util::resolve_user_context(repo, config).await?;

    match command {
        cli::Commands::Plants(command) => commands::plants::plants_command(repo, command, config).await,
        cli::Commands::Garden(command) => {
            commands::lists::list_command(repo, &ctx, ListKind::Garden, command, config).await
        }
        cli::Commands::Wishlist(command) => {
            commands::lists::list_command(repo, &ctx, ListKind::Wishlist, command, config).await
        }
        cli::Commands::Calendar(command) => commands::calendar::show_calendar(repo, ctx, command).await,
        cli::Commands::Now => commands::calendar::show_now(repo, ctx).await,
        cli::Commands::Task(command) => commands::task::task_command(repo, ctx, command).await,
        cli::Commands::Stats => commands::profile::show_stats(repo, ctx).await,
        cli::Commands::Profile(command) => commands::profile::profile_command(repo, ctx, command).await,
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::Validation(ValidationError::NotEditable(id)) => {
                eprintln!(
                    "{} Task '{}' comes from a plant's care schedule and cannot be edited or deleted.",
                    "Error:".style(error_style),
                    id.yellow()
                );
                eprintln!("Change the plant's care schedule instead, or mark it done with `odla task done`.");
            }
            CoreError::Validation(v) => {
                eprintln!("{} {}", "Error:".style(error_style), v);
            }
            CoreError::Database(e) => {
                eprintln!("{} Database error: {}", "Error:".style(error_style), e);
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {:#}", "Error:".style(error_style), err);
    }
}
