use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AppConfig;
use crate::modules::helpers::slug::slugify;
use crate::modules::models::general::load_json_file;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Driver {
    #[serde(default)]
    pub slug: String,
    pub full_name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub number: String,
    pub team_name: String,
    #[serde(default)]
    pub nationality: String,
}

impl Driver {
    pub async fn load_all(config: &AppConfig) -> Vec<Driver> {
        load_json_file(&config.data_dir().join("drivers.json"))
            .await
            .unwrap_or_default()
    }

    /// Mapping from a driver's full name to a free-text description,
    /// kept in its own data file. Missing file means no descriptions.
    pub async fn load_descriptions(config: &AppConfig) -> HashMap<String, String> {
        load_json_file(&config.data_dir().join("driver_descriptions.json"))
            .await
            .unwrap_or_default()
    }

    /// The url identifier is always derived from the full name, even
    /// though the data files carry a `slug` field of their own. First
    /// match wins on duplicates.
    pub fn find_by_slug<'a>(drivers: &'a [Driver], slug_in: &str) -> Option<&'a Driver> {
        drivers.iter().find(|driver| slugify(&driver.full_name) == slug_in)
    }

    pub fn for_team(drivers: &[Driver], team_name: &str) -> Vec<Driver> {
        drivers
            .iter()
            .filter(|driver| driver.team_name == team_name)
            .cloned()
            .collect()
    }

    pub fn url_slug(&self) -> String {
        slugify(&self.full_name)
    }

    /// Portrait images are optional; the data builder only promises
    /// `<slug>.png` when one exists at all.
    pub fn portrait_src(&self, config: &AppConfig) -> Option<String> {
        let slug = self.url_slug();
        let path = config.driver_images_dir().join(format!("{slug}.png"));
        if path.is_file() {
            Some(format!("/images/drivers/{slug}.png"))
        } else {
            None
        }
    }
}

/// # Per-driver statistics record
/// season and career blocks as produced by the data builder. the fields
/// inside are passed through to the template untouched, some of them are
/// number-or-"-" so they stay dynamic.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DriverStats {
    pub season: Value,
    pub career: Value,
}

impl DriverStats {
    pub async fn load(config: &AppConfig, slug: &str) -> Option<DriverStats> {
        load_json_file(&config.stats_dir().join(format!("{slug}.json"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(full_name: &str, team_name: &str) -> Driver {
        Driver {
            slug: slugify(full_name),
            full_name: full_name.to_string(),
            code: String::new(),
            number: String::new(),
            team_name: team_name.to_string(),
            nationality: String::new(),
        }
    }

    #[test]
    fn lookup_by_slug_matches_the_derived_name() {
        let drivers = vec![
            driver("Max Verstappen", "Red Bull"),
            driver("Sergio Pérez", "Red Bull"),
        ];

        let found = Driver::find_by_slug(&drivers, "sergio-prez").expect("driver");
        assert_eq!(found.full_name, "Sergio Pérez");
        assert_eq!(found.url_slug(), "sergio-prez");
    }

    #[test]
    fn lookup_misses_unknown_slugs() {
        let drivers = vec![driver("Max Verstappen", "Red Bull")];
        assert!(Driver::find_by_slug(&drivers, "lewis-hamilton").is_none());
    }

    #[test]
    fn duplicate_slugs_resolve_to_the_first_record() {
        let first = driver("Max Verstappen", "Red Bull");
        let second = driver("Max Verstappen", "AlphaTauri");
        let drivers = vec![first.clone(), second];

        let found = Driver::find_by_slug(&drivers, "max-verstappen").expect("driver");
        assert_eq!(found.team_name, first.team_name);
    }

    #[test]
    fn team_filter_only_keeps_matching_drivers() {
        let drivers = vec![
            driver("Max Verstappen", "Red Bull"),
            driver("Lando Norris", "McLaren"),
            driver("Oscar Piastri", "McLaren"),
        ];

        let mclaren = Driver::for_team(&drivers, "McLaren");
        assert_eq!(mclaren.len(), 2);
        assert!(mclaren.iter().all(|d| d.team_name == "McLaren"));
    }
}
