use crate::care::{CareCategory, CarePeriod};
use crate::error::ValidationError;
use crate::month::Month;
use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Fallback description for custom tasks saved without one.
pub const NO_DESCRIPTION: &str = "Ingen beskrivning angiven.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(UserId)
    }
}

/// The signed-in user plus the local year and month that completion flags and
/// the "this month" view are judged against.
///
/// Passed explicitly into every fetch and mutation instead of living in
/// global session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserContext {
    pub user_id: UserId,
    pub current_year: i32,
    pub current_month: Month,
}

impl UserContext {
    /// Context for today in the local time zone.
    pub fn new(user_id: UserId) -> Self {
        Self::on_date(user_id, Local::now().date_naive())
    }

    pub fn on_date(user_id: UserId, date: NaiveDate) -> Self {
        Self {
            user_id,
            current_year: date.year(),
            current_month: Month::from_number(date.month()).unwrap_or(Month::January),
        }
    }

    /// Context pinned to `current_year`, starting in January.
    pub fn at_year(user_id: UserId, current_year: i32) -> Self {
        Self {
            user_id,
            current_year,
            current_month: Month::January,
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub latin_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "type")]
    pub plant_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub image_source: String,
    #[serde(default)]
    pub soil: String,
    #[serde(default)]
    pub zone: Option<i64>,
    #[serde(default)]
    pub height_cm: Option<i64>,
    #[serde(default)]
    pub care_guide: String,
    #[serde(default)]
    pub care_interval_days: Option<i64>,
    #[serde(default)]
    pub watering: CarePeriod,
    #[serde(default)]
    pub pruning: CarePeriod,
    #[serde(default)]
    pub fertilizing: CarePeriod,
    #[serde(default)]
    pub planting: CarePeriod,
    #[serde(default)]
    pub winter: CarePeriod,
    #[serde(default)]
    pub bloom_period: Vec<Month>,
}

impl Plant {
    /// A plant with only an id and a name; every schedule empty.
    pub fn named(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Iterates the five care categories with their periods, in emission order.
    pub fn care_periods(&self) -> impl Iterator<Item = (CareCategory, &CarePeriod)> {
        CareCategory::ALL.into_iter().map(move |c| (c, c.period(self)))
    }

    pub fn list_item(&self) -> PlantListItem {
        PlantListItem {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            plant_type: self.plant_type.clone(),
            image: self.image.clone(),
        }
    }
}

/// The light projection used by catalog, garden and wishlist listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PlantListItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub plant_type: String,
    pub image: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GardenStats {
    pub total_plants: i64,
    pub wishlist_items: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub id: UserId,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Custom tasks
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CustomTask {
    pub id: i64,
    pub user_id: UserId,
    pub title: String,
    #[sqlx(try_from = "i64")]
    pub month: Month,
    pub description: String,
    pub interval: Option<String>,
    pub is_completed: bool,
    pub last_completed_year: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl CustomTask {
    /// Done for `year` only if the flag was set during that same year.
    pub fn is_done_in(&self, year: i32) -> bool {
        is_done_in(self.is_completed, self.last_completed_year, year)
    }
}

pub(crate) fn is_done_in(is_completed: bool, last_completed_year: Option<i32>, year: i32) -> bool {
    is_completed && last_completed_year == Some(year)
}

/// Form input for a new custom task, as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct NewCustomTask {
    pub title: String,
    pub month: u32,
    pub description: Option<String>,
    pub interval: Option<String>,
}

/// A [`NewCustomTask`] that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNewTask {
    pub title: String,
    pub month: Month,
    pub description: String,
    pub interval: Option<String>,
}

impl NewCustomTask {
    pub fn validate(&self) -> Result<ValidNewTask, ValidationError> {
        Ok(ValidNewTask {
            title: validate_title(&self.title)?,
            month: validate_month(self.month)?,
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            interval: non_blank(self.interval.as_deref()),
        })
    }
}

/// Partial update of a custom task. `None` leaves a field untouched;
/// `interval: Some(None)` clears the interval.
#[derive(Debug, Clone, Default)]
pub struct UpdateCustomTask {
    pub title: Option<String>,
    pub month: Option<u32>,
    pub description: Option<String>,
    pub interval: Option<Option<String>>,
}

impl UpdateCustomTask {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.month.is_none()
            && self.description.is_none()
            && self.interval.is_none()
    }

    /// Checks and trims the fields that are set.
    pub fn validate(self) -> Result<UpdateCustomTask, ValidationError> {
        let title = self.title.as_deref().map(validate_title).transpose()?;
        if let Some(month) = self.month {
            validate_month(month)?;
        }
        Ok(UpdateCustomTask {
            title,
            month: self.month,
            description: self.description.map(|d| d.trim().to_string()),
            interval: self.interval.map(|i| non_blank(i.as_deref())),
        })
    }
}

fn validate_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

fn validate_month(month: u32) -> Result<Month, ValidationError> {
    Month::from_number(month).ok_or(ValidationError::MonthOutOfRange(month))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ============================================================================
// Calendar tasks (derived, never stored)
// ============================================================================

/// Identifier of a calendar task.
///
/// Generated ids (`auto-<plantId>-<counter>-<month>`) are only unique within
/// one aggregation pass; custom ids are the stored row ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskKey {
    Generated(String),
    Custom(i64),
}

pub const GENERATED_PREFIX: &str = "auto-";

#[derive(Error, Debug, PartialEq)]
#[error("Invalid task id: {0}")]
pub struct ParseTaskKeyError(String);

impl TaskKey {
    pub fn generated(plant_id: i64, counter: usize, month: Month) -> Self {
        TaskKey::Generated(format!(
            "{GENERATED_PREFIX}{plant_id}-{counter}-{}",
            month.number()
        ))
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, TaskKey::Generated(_))
    }

    pub fn custom_id(&self) -> Option<i64> {
        match self {
            TaskKey::Custom(id) => Some(*id),
            TaskKey::Generated(_) => None,
        }
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKey::Generated(key) => f.write_str(key),
            TaskKey::Custom(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for TaskKey {
    type Err = ParseTaskKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with(GENERATED_PREFIX) {
            return Ok(TaskKey::Generated(s.to_string()));
        }
        s.parse::<i64>()
            .map(TaskKey::Custom)
            .map_err(|_| ParseTaskKeyError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskCategory {
    /// Derived from a plant's care schedule.
    Care,
    /// Created by the user.
    Custom,
}

impl TaskCategory {
    pub fn label(self) -> &'static str {
        match self {
            TaskCategory::Care => "Skötsel",
            TaskCategory::Custom => "Anpassad",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a calendar task came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOrigin {
    Generated {
        plant_id: i64,
        plant_name: String,
        care: CareCategory,
    },
    Custom {
        task_id: i64,
        user_id: UserId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTask {
    pub id: TaskKey,
    pub title: String,
    pub category: TaskCategory,
    pub origin: TaskOrigin,
    pub month: Month,
    pub description: String,
    pub interval: String,
    pub is_completed: bool,
    pub last_completed_year: Option<i32>,
}

impl CalendarTask {
    pub fn plant_name(&self) -> Option<&str> {
        match &self.origin {
            TaskOrigin::Generated { plant_name, .. } => Some(plant_name),
            TaskOrigin::Custom { .. } => None,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.origin, TaskOrigin::Generated { .. })
    }

    /// The persisted completion state, judged against `year`.
    pub fn is_done_in(&self, year: i32) -> bool {
        is_done_in(self.is_completed, self.last_completed_year, year)
    }
}
