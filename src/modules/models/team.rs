use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::modules::models::general::load_json_file;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Team {
    pub team_name: String,
    pub slug: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub power_unit: String,
}

impl Team {
    pub async fn load_all(config: &AppConfig) -> Vec<Team> {
        load_json_file(&config.data_dir().join("teams.json"))
            .await
            .unwrap_or_default()
    }

    /// Teams carry their slug as a stored field, unlike drivers whose
    /// slug is derived. First match wins on duplicates.
    pub fn find_by_slug<'a>(teams: &'a [Team], slug_in: &str) -> Option<&'a Team> {
        teams.iter().find(|team| team.slug == slug_in)
    }

    pub fn color_for(teams: &[Team], team_name: &str) -> Option<String> {
        teams
            .iter()
            .find(|team| team.team_name == team_name)
            .map(|team| team.color.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(team_name: &str, slug: &str, color: &str) -> Team {
        Team {
            team_name: team_name.to_string(),
            slug: slug.to_string(),
            full_name: String::new(),
            color: color.to_string(),
            base: String::new(),
            power_unit: String::new(),
        }
    }

    #[test]
    fn finds_team_by_stored_slug() {
        let teams = vec![
            team("Red Bull", "red-bull-racing", "#3671C6"),
            team("McLaren", "mclaren", "#FF8000"),
        ];

        let found = Team::find_by_slug(&teams, "mclaren").expect("team");
        assert_eq!(found.team_name, "McLaren");
        assert!(Team::find_by_slug(&teams, "brawn-gp").is_none());
    }

    #[test]
    fn color_lookup_joins_on_team_name() {
        let teams = vec![team("Red Bull", "red-bull-racing", "#3671C6")];
        assert_eq!(Team::color_for(&teams, "Red Bull"), Some("#3671C6".to_string()));
        assert_eq!(Team::color_for(&teams, "Ferrari"), None);
    }
}
