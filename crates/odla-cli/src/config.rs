use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use odla_core::catalog::{CATALOG_PAGE_SIZE, LIST_PAGE_SIZE};
use odla_core::models::UserId;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "odla.toml";

/// Settings from `odla.toml` in the working directory, overridden by
/// `ODLA_`-prefixed environment variables (e.g. `ODLA_DATABASE_PATH`).
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// SQLite database file, created on first use
    pub database_path: String,
    /// Profile to act as; the oldest local profile when unset
    pub user_id: Option<UserId>,
    pub catalog_page_size: usize,
    pub list_page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "odla.db".to_string(),
            user_id: None,
            catalog_page_size: CATALOG_PAGE_SIZE,
            list_page_size: LIST_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed("ODLA_")),
        )
    }

    fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        let config: Config = figment.extract()?;
        if config.catalog_page_size == 0 || config.list_page_size == 0 {
            return Err(figment::Error::from("page sizes must be at least 1".to_string()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::providers::Serialized;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_without_sources() {
        let config = Config::from_figment(Figment::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.database_path, "odla.db");
        assert_eq!(config.list_page_size, 15);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let toml = r#"
            database_path = "/tmp/garden.db"
            user_id = "0190a3b4-8f6e-7c3d-9a1b-2c3d4e5f6a7b"
            catalog_page_size = 5
        "#;
        let config = Config::from_figment(Figment::new().merge(Toml::string(toml))).unwrap();
        assert_eq!(config.database_path, "/tmp/garden.db");
        assert_eq!(
            config.user_id.map(|u| u.to_string()).as_deref(),
            Some("0190a3b4-8f6e-7c3d-9a1b-2c3d4e5f6a7b")
        );
        assert_eq!(config.catalog_page_size, 5);
        assert_eq!(config.list_page_size, 15);
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad_user = Figment::new().merge(Toml::string(r#"user_id = "not-a-uuid""#));
        assert!(Config::from_figment(bad_user).is_err());

        let mut zero = HashMap::new();
        zero.insert("list_page_size", 0usize);
        let zero_page = Figment::new().merge(Serialized::defaults(zero));
        assert!(Config::from_figment(zero_page).is_err());
    }
}
