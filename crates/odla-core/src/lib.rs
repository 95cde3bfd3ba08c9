//! # Odla Core Library
//!
//! Domain library for a gardening companion: a shared plant catalog, each
//! user's garden and wishlist, and an annual care calendar derived from the
//! care schedules of owned plants plus the user's own tasks.
//!
//! ## Core Modules
//!
//! - [`db`]: Database connection and migration management
//! - [`models`]: Plants, custom tasks and the derived calendar task
//! - [`month`] / [`care`]: The twelve months and five care categories
//! - [`aggregate`]: Pure derivation of the annual task list
//! - [`calendar`]: Grouping by month and by plant
//! - [`completion`]: Year-scoped completion with optimistic overrides
//! - [`catalog`]: Client-side filtering and pagination
//! - [`repository`]: Data access layer with Repository pattern
//! - [`planner`] / [`lists`]: Services tying fetches, aggregation and mutations together
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use odla_core::{
//!     db, models::{NewCustomTask, UserContext, UserId},
//!     planner::Planner, repository::SqliteRepository,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = db::establish_connection("odla.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!     let ctx = UserContext::new(UserId::new());
//!
//!     let mut planner = Planner::new(&repo, ctx);
//!     planner.load().await;
//!     planner
//!         .create_task(NewCustomTask {
//!             title: "Byt jord".to_string(),
//!             month: 3,
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     for (month, tasks) in planner.grouped().iter() {
//!         println!("{month}: {} tasks", tasks.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod calendar;
pub mod care;
pub mod catalog;
pub mod completion;
pub mod db;
pub mod error;
pub mod lists;
pub mod models;
pub mod month;
pub mod planner;
pub mod repository;
