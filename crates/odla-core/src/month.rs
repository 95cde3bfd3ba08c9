//! Calendar months as used throughout the care schedules.
//!
//! Care periods name their months with lowercase Swedish keys (`"juni"`),
//! custom tasks store a month number (1-12), and the calendar renders the
//! capitalised name (`"Juni"`). [`Month`] is the single type behind all three.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid month: {0}")]
pub struct ParseMonthError(String);

impl Month {
    /// All twelve months, January first.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn from_number(number: u32) -> Option<Month> {
        match number {
            1..=12 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }

    /// 1 for January through 12 for December.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Lowercase Swedish key used in care-period month lists.
    pub fn key(self) -> &'static str {
        match self {
            Month::January => "januari",
            Month::February => "februari",
            Month::March => "mars",
            Month::April => "april",
            Month::May => "maj",
            Month::June => "juni",
            Month::July => "juli",
            Month::August => "augusti",
            Month::September => "september",
            Month::October => "oktober",
            Month::November => "november",
            Month::December => "december",
        }
    }

    /// Capitalised Swedish name for display.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "Januari",
            Month::February => "Februari",
            Month::March => "Mars",
            Month::April => "April",
            Month::May => "Maj",
            Month::June => "Juni",
            Month::July => "Juli",
            Month::August => "Augusti",
            Month::September => "September",
            Month::October => "Oktober",
            Month::November => "November",
            Month::December => "December",
        }
    }

    pub fn from_key(key: &str) -> Option<Month> {
        Self::ALL.into_iter().find(|m| m.key() == key)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = ParseMonthError;

    /// Accepts a Swedish month name in any case, or a month number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Month::from_number(number).ok_or_else(|| ParseMonthError(s.to_string()));
        }
        Month::from_key(&trimmed.to_lowercase()).ok_or_else(|| ParseMonthError(s.to_string()))
    }
}

impl TryFrom<i64> for Month {
    type Error = ParseMonthError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(Month::from_number)
            .ok_or_else(|| ParseMonthError(value.to_string()))
    }
}

impl From<chrono::Month> for Month {
    fn from(value: chrono::Month) -> Self {
        Self::ALL[value.number_from_month() as usize - 1]
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Month::from_key(&raw.trim().to_lowercase())
            .ok_or_else(|| serde::de::Error::custom(ParseMonthError(raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "januari", "Januari")]
    #[case(3, "mars", "Mars")]
    #[case(5, "maj", "Maj")]
    #[case(8, "augusti", "Augusti")]
    #[case(12, "december", "December")]
    fn test_month_names(#[case] number: u32, #[case] key: &str, #[case] name: &str) {
        let month = Month::from_number(number).unwrap();
        assert_eq!(month.number(), number);
        assert_eq!(month.key(), key);
        assert_eq!(month.name(), name);
    }

    #[test]
    fn test_from_number_rejects_out_of_range() {
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
        assert!(Month::try_from(-1i64).is_err());
    }

    #[test]
    fn test_parse_accepts_names_and_numbers() {
        assert_eq!("Juni".parse::<Month>().unwrap(), Month::June);
        assert_eq!(" oktober ".parse::<Month>().unwrap(), Month::October);
        assert_eq!("7".parse::<Month>().unwrap(), Month::July);
        assert!("june".parse::<Month>().is_err());
        assert!("0".parse::<Month>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&vec![Month::June, Month::July]).unwrap();
        assert_eq!(json, r#"["juni","juli"]"#);

        let parsed: Vec<Month> = serde_json::from_str(r#"["Maj","september"]"#).unwrap();
        assert_eq!(parsed, vec![Month::May, Month::September]);

        assert!(serde_json::from_str::<Month>(r#""smarch""#).is_err());
    }
}
