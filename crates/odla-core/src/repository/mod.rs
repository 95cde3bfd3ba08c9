use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{
    CustomTask, NewCustomTask, Plant, PlantListItem, UpdateCustomTask, UserId, UserProfile,
};
use async_trait::async_trait;

pub mod garden;
pub mod plants;
pub mod profiles;
pub mod tasks;
pub mod wishlist;

// Every user-scoped query filters on user_id; that filter is the only access
// policy between users.

/// Domain-specific trait for the shared plant catalog
#[async_trait]
pub trait PlantRepository {
    /// Inserts a catalog plant. The `id` of `plant` is ignored and assigned by storage.
    async fn add_plant(&self, plant: Plant) -> Result<Plant, CoreError>;
    async fn find_plant_by_id(&self, id: i64) -> Result<Option<Plant>, CoreError>;
    /// All catalog plants as list items, ordered by name.
    async fn find_plants(&self) -> Result<Vec<PlantListItem>, CoreError>;
    /// List items for `ids`, in the order given. Unknown ids are skipped.
    async fn find_plant_list_items_by_ids(&self, ids: &[i64]) -> Result<Vec<PlantListItem>, CoreError>;
    async fn count_plants(&self) -> Result<i64, CoreError>;
}

/// Domain-specific trait for a user's garden ("my plants")
#[async_trait]
pub trait GardenRepository {
    async fn find_garden_plant_ids(&self, user: UserId) -> Result<Vec<i64>, CoreError>;
    /// Full plant records in the user's garden, in the order they were added.
    async fn find_owned_plants(&self, user: UserId) -> Result<Vec<Plant>, CoreError>;
    /// Adding a plant that is already in the garden is a no-op.
    async fn add_plant_to_garden(&self, user: UserId, plant_id: i64) -> Result<(), CoreError>;
    async fn remove_plant_from_garden(&self, user: UserId, plant_id: i64) -> Result<(), CoreError>;
    async fn is_plant_in_garden(&self, user: UserId, plant_id: i64) -> Result<bool, CoreError>;
    async fn count_garden_plants(&self, user: UserId) -> Result<i64, CoreError>;
}

/// Domain-specific trait for a user's wishlist
#[async_trait]
pub trait WishlistRepository {
    async fn find_wishlist_plant_ids(&self, user: UserId) -> Result<Vec<i64>, CoreError>;
    async fn is_plant_on_wishlist(&self, user: UserId, plant_id: i64) -> Result<bool, CoreError>;
    /// Removes the plant when `currently_on` is true, adds it otherwise.
    /// Returns whether the plant is on the wishlist afterwards.
    async fn toggle_wishlist(&self, user: UserId, plant_id: i64, currently_on: bool) -> Result<bool, CoreError>;
    async fn count_wishlist_plants(&self, user: UserId) -> Result<i64, CoreError>;
}

/// Domain-specific trait for user-authored tasks
#[async_trait]
pub trait CustomTaskRepository {
    /// The user's tasks ordered by month, then creation.
    async fn find_custom_tasks(&self, user: UserId) -> Result<Vec<CustomTask>, CoreError>;
    async fn find_custom_task_by_id(&self, user: UserId, id: i64) -> Result<Option<CustomTask>, CoreError>;
    async fn add_custom_task(&self, user: UserId, data: NewCustomTask) -> Result<CustomTask, CoreError>;
    async fn update_custom_task(&self, user: UserId, id: i64, data: UpdateCustomTask) -> Result<CustomTask, CoreError>;
    async fn delete_custom_task(&self, user: UserId, id: i64) -> Result<(), CoreError>;
    async fn set_task_completion(&self, user: UserId, id: i64, completed: bool, year: i32) -> Result<CustomTask, CoreError>;
}

/// Domain-specific trait for user profiles
#[async_trait]
pub trait ProfileRepository {
    async fn find_profile(&self, user: UserId) -> Result<Option<UserProfile>, CoreError>;
    /// The oldest profile, used to pick a local user when none is configured.
    async fn find_first_profile(&self) -> Result<Option<UserProfile>, CoreError>;
    /// Returns the user's profile, creating an empty one if missing.
    async fn ensure_profile(&self, user: UserId) -> Result<UserProfile, CoreError>;
    async fn update_profile_name(&self, user: UserId, full_name: Option<String>) -> Result<UserProfile, CoreError>;
}

/// Main repository trait that composes all domain traits
pub trait Repository:
    PlantRepository
    + GardenRepository
    + WishlistRepository
    + CustomTaskRepository
    + ProfileRepository
    + Send
    + Sync
{
}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Closes the pool; every later call fails with a database error.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl Repository for SqliteRepository {}
