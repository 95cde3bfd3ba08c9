use clap::{Parser, Subcommand};
use odla_core::models::TaskKey;
use odla_core::month::Month;
use std::path::PathBuf;

/// Odla: plant catalog, garden, wishlist and a yearly care calendar
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Browse and import the plant catalog
    Plants(PlantsCommand),
    /// Manage the plants in your garden
    Garden(ListCommand),
    /// Manage your wishlist
    Wishlist(ListCommand),
    /// Show the yearly care calendar
    Calendar(CalendarCommand),
    /// Show this month's tasks and garden stats
    Now,
    /// Manage your own tasks and mark tasks as done
    Task(TaskCommand),
    /// Show garden and wishlist counts
    Stats,
    /// Show or edit your profile
    Profile(ProfileCommand),
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Parser, Debug, Clone)]
pub struct PlantsCommand {
    #[command(subcommand)]
    pub command: PlantsSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlantsSubcommand {
    /// List catalog plants
    List(PlantListCommand),
    /// Show a plant with its care schedule
    Show(ShowPlantCommand),
    /// Import plants from a JSON file containing an array of plants
    Import(ImportPlantsCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct PlantListCommand {
    /// Case-insensitive search on the plant name
    #[arg(short, long)]
    pub search: Option<String>,
    /// Only plants in this category (e.g. blomma, träd)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Only plants of this type (e.g. perenn, kryddväxt)
    #[arg(short = 't', long = "type")]
    pub plant_type: Option<String>,
    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowPlantCommand {
    /// The ID of the plant
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct ImportPlantsCommand {
    /// Path to the JSON file
    pub file: PathBuf,
}

// ============================================================================
// Garden / wishlist
// ============================================================================

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    #[command(subcommand)]
    pub command: ListSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ListSubcommand {
    /// List the plants
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Add a plant by its catalog ID
    Add {
        plant_id: i64,
    },
    /// Remove a plant by its catalog ID
    Remove {
        plant_id: i64,
    },
}

// ============================================================================
// Calendar and tasks
// ============================================================================

#[derive(Parser, Debug, Clone)]
pub struct CalendarCommand {
    /// Only show one month (name such as "mars", or a number 1-12)
    #[arg(short, long)]
    pub month: Option<Month>,
    /// Group each month's tasks under their plant
    #[arg(long)]
    pub by_plant: bool,
    /// Also list months without tasks
    #[arg(long)]
    pub all: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub command: TaskSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TaskSubcommand {
    /// Add a custom task
    Add(AddTaskCommand),
    /// Edit a custom task
    Edit(EditTaskCommand),
    /// Delete a custom task
    Delete(DeleteTaskCommand),
    /// Flip the completion of a task
    Toggle(TaskIdCommand),
    /// Mark a task as done for this year
    Done(TaskIdCommand),
    /// Mark a task as not done
    Undo(TaskIdCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddTaskCommand {
    /// The title of the task
    pub title: String,
    /// The month the task belongs to (name or number 1-12)
    #[arg(short, long)]
    pub month: String,
    /// The description of the task
    #[arg(short, long)]
    pub description: Option<String>,
    /// How often the task recurs, as free text (e.g. "Varje vår")
    #[arg(short, long)]
    pub interval: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct EditTaskCommand {
    /// The ID of the task to edit
    pub id: TaskKey,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub month: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub interval: Option<String>,
    #[arg(long, conflicts_with = "interval")]
    pub interval_clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteTaskCommand {
    /// The ID of the task to delete
    pub id: TaskKey,
    /// Force deletion without confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TaskIdCommand {
    /// The ID of the task, as shown by `odla calendar`
    pub id: TaskKey,
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Parser, Debug, Clone)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProfileSubcommand {
    /// Show the current profile
    Show,
    /// Set or clear the display name
    SetName {
        /// The new name; omit to clear it
        name: Option<String>,
    },
}
