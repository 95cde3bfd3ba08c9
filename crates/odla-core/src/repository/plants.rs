use crate::care::CarePeriod;
use crate::error::CoreError;
use crate::models::{Plant, PlantListItem};
use crate::month::Month;
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, QueryBuilder, Sqlite};

const PLANT_FIELDS: [&str; 20] = [
    "id", "name", "latin_name", "category", "plant_type", "description", "usage", "image",
    "image_source", "soil", "zone", "height_cm", "care_guide", "care_interval_days",
    "watering", "pruning", "fertilizing", "planting", "winter", "bloom_period",
];

const LIST_ITEM_FIELDS: [&str; 5] = ["id", "name", "category", "plant_type", "image"];

/// Plant columns qualified with a table alias, for joins.
pub(crate) fn plant_columns(alias: &str) -> String {
    qualified(&PLANT_FIELDS, alias)
}

pub(crate) fn list_item_columns(alias: &str) -> String {
    qualified(&LIST_ITEM_FIELDS, alias)
}

fn qualified(fields: &[&str], alias: &str) -> String {
    fields
        .iter()
        .map(|f| format!("{alias}.{f}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Row shape of `plants`; care periods are stored as JSON text.
#[derive(Debug, FromRow)]
pub(crate) struct PlantRow {
    id: i64,
    name: String,
    latin_name: String,
    category: String,
    plant_type: String,
    description: String,
    usage: String,
    image: String,
    image_source: String,
    soil: String,
    zone: Option<i64>,
    height_cm: Option<i64>,
    care_guide: String,
    care_interval_days: Option<i64>,
    watering: Json<CarePeriod>,
    pruning: Json<CarePeriod>,
    fertilizing: Json<CarePeriod>,
    planting: Json<CarePeriod>,
    winter: Json<CarePeriod>,
    bloom_period: Json<Vec<Month>>,
}

impl From<PlantRow> for Plant {
    fn from(row: PlantRow) -> Self {
        Plant {
            id: row.id,
            name: row.name,
            latin_name: row.latin_name,
            category: row.category,
            plant_type: row.plant_type,
            description: row.description,
            usage: row.usage,
            image: row.image,
            image_source: row.image_source,
            soil: row.soil,
            zone: row.zone,
            height_cm: row.height_cm,
            care_guide: row.care_guide,
            care_interval_days: row.care_interval_days,
            watering: row.watering.0,
            pruning: row.pruning.0,
            fertilizing: row.fertilizing.0,
            planting: row.planting.0,
            winter: row.winter.0,
            bloom_period: row.bloom_period.0,
        }
    }
}

#[async_trait]
impl super::PlantRepository for SqliteRepository {
    async fn add_plant(&self, plant: Plant) -> Result<Plant, CoreError> {
        if plant.name.trim().is_empty() {
            return Err(CoreError::InvalidInput("Plant name must not be empty.".to_string()));
        }

        let row: PlantRow = sqlx::query_as(&format!(
            r#"INSERT INTO plants (name, latin_name, category, plant_type, description, usage,
                image, image_source, soil, zone, height_cm, care_guide, care_interval_days,
                watering, pruning, fertilizing, planting, winter, bloom_period)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
            RETURNING {}
            "#,
            PLANT_FIELDS.join(", ")
        ))
        .bind(plant.name.trim())
        .bind(&plant.latin_name)
        .bind(&plant.category)
        .bind(&plant.plant_type)
        .bind(&plant.description)
        .bind(&plant.usage)
        .bind(&plant.image)
        .bind(&plant.image_source)
        .bind(&plant.soil)
        .bind(plant.zone)
        .bind(plant.height_cm)
        .bind(&plant.care_guide)
        .bind(plant.care_interval_days)
        .bind(Json(&plant.watering))
        .bind(Json(&plant.pruning))
        .bind(Json(&plant.fertilizing))
        .bind(Json(&plant.planting))
        .bind(Json(&plant.winter))
        .bind(Json(&plant.bloom_period))
        .fetch_one(self.pool())
        .await?;

        tracing::debug!(plant_id = row.id, name = %row.name, "added catalog plant");
        Ok(row.into())
    }

    async fn find_plant_by_id(&self, id: i64) -> Result<Option<Plant>, CoreError> {
        let row: Option<PlantRow> =
            sqlx::query_as(&format!("SELECT {} FROM plants p WHERE p.id = $1", plant_columns("p")))
                .bind(id)
                .fetch_optional(self.pool())
                .await?;
        Ok(row.map(Plant::from))
    }

    async fn find_plants(&self) -> Result<Vec<PlantListItem>, CoreError> {
        let plants = sqlx::query_as(&format!(
            "SELECT {} FROM plants p ORDER BY p.name COLLATE NOCASE, p.id",
            list_item_columns("p")
        ))
        .fetch_all(self.pool())
        .await?;
        Ok(plants)
    }

    async fn find_plant_list_items_by_ids(&self, ids: &[i64]) -> Result<Vec<PlantListItem>, CoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {} FROM plants p WHERE p.id IN (",
            list_item_columns("p")
        ));
        let mut separated = qb.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let mut found: Vec<PlantListItem> = qb.build_query_as().fetch_all(self.pool()).await?;

        // IN (...) does not keep the caller's order
        let mut ordered = Vec::with_capacity(found.len());
        for id in ids {
            if let Some(pos) = found.iter().position(|p| p.id == *id) {
                ordered.push(found.swap_remove(pos));
            }
        }
        Ok(ordered)
    }

    async fn count_plants(&self) -> Result<i64, CoreError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM plants")
            .fetch_one(self.pool())
            .await?;
        Ok(count.0)
    }
}
