use crate::models::Plant;
use crate::month::Month;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One care category's schedule for a plant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarePeriod {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub months: Vec<Month>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

impl CarePeriod {
    pub fn new(months: impl IntoIterator<Item = Month>) -> Self {
        Self {
            months: months.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    pub fn applies_in(&self, month: Month) -> bool {
        self.months.contains(&month)
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Month>, D::Error> {
    Ok(Option::<Vec<Month>>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// The five fixed care categories every plant schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareCategory {
    Watering,
    Pruning,
    Fertilizing,
    Planting,
    Winter,
}

impl CareCategory {
    /// Emission order used by the aggregator.
    pub const ALL: [CareCategory; 5] = [
        CareCategory::Watering,
        CareCategory::Pruning,
        CareCategory::Fertilizing,
        CareCategory::Planting,
        CareCategory::Winter,
    ];

    /// Verb prefixed to the plant name in task titles.
    pub fn action(self) -> &'static str {
        match self {
            CareCategory::Watering => "Vattna",
            CareCategory::Pruning => "Beskärning",
            CareCategory::Fertilizing => "Gödsla",
            CareCategory::Planting => "Plantera",
            CareCategory::Winter => "Vinterskydd",
        }
    }

    /// Section heading in plant details.
    pub fn label(self) -> &'static str {
        match self {
            CareCategory::Watering => "Vattning",
            CareCategory::Pruning => "Beskärning",
            CareCategory::Fertilizing => "Gödsling",
            CareCategory::Planting => "Plantering",
            CareCategory::Winter => "Vinterskydd",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CareCategory::Watering => "💧",
            CareCategory::Pruning => "✂",
            CareCategory::Fertilizing => "🌱",
            CareCategory::Planting => "🪴",
            CareCategory::Winter => "❄",
        }
    }

    pub fn period(self, plant: &Plant) -> &CarePeriod {
        match self {
            CareCategory::Watering => &plant.watering,
            CareCategory::Pruning => &plant.pruning,
            CareCategory::Fertilizing => &plant.fertilizing,
            CareCategory::Planting => &plant.planting,
            CareCategory::Winter => &plant.winter,
        }
    }
}

impl fmt::Display for CareCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let period: CarePeriod = serde_json::from_str("{}").unwrap();
        assert_eq!(period, CarePeriod::default());

        let period: CarePeriod =
            serde_json::from_str(r#"{"months": null, "notes": "", "interval": "  "}"#).unwrap();
        assert!(period.is_empty());
        assert_eq!(period.notes, None);
        assert_eq!(period.interval, None);
    }

    #[test]
    fn test_unknown_month_is_rejected() {
        let result = serde_json::from_str::<CarePeriod>(r#"{"months": ["juni", "midsommar"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_period_accessor_follows_category() {
        let plant = Plant {
            pruning: CarePeriod::new([Month::March]).with_notes("Klipp ner"),
            ..Plant::named(1, "Lavendel")
        };
        assert!(CareCategory::Pruning.period(&plant).applies_in(Month::March));
        assert!(CareCategory::Watering.period(&plant).is_empty());
        assert_eq!(
            CareCategory::Pruning.period(&plant).notes.as_deref(),
            Some("Klipp ner")
        );
    }
}
