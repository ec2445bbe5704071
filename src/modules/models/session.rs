use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AppConfig;
use crate::modules::models::general::load_json_file;

/// # Schedule entry
/// one scheduled session as emitted by the schedule builder. the source
/// api sends `session_key` as a number but it is compared as a string
/// everywhere, so it stays a raw value here.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Session {
    pub session_key: Value,
    pub session_name: String,
    #[serde(default)]
    pub session_year: Option<i32>,
    #[serde(default)]
    pub country_name: String,
    pub meeting_name: String,
    #[serde(default)]
    pub date_start: String,
    pub circuit_short_name: String,
}

impl Session {
    pub async fn load_schedule(config: &AppConfig) -> Vec<Session> {
        // schedule.json is written sorted by date_start, keep that order
        load_json_file(&config.data_dir().join("schedule.json"))
            .await
            .unwrap_or_default()
    }

    pub fn find_by_key<'a>(sessions: &'a [Session], key_in: &str) -> Option<&'a Session> {
        sessions.iter().find(|session| session.key() == key_in)
    }

    /// String form of the session key, without json quoting.
    pub fn key(&self) -> String {
        match &self.session_key {
            Value::String(key) => key.clone(),
            other => other.to_string(),
        }
    }

    /// Season year for the external scripts, falling back to the
    /// start-date prefix when the year field is absent.
    pub fn year(&self) -> String {
        match self.session_year {
            Some(year) => year.to_string(),
            None => self.date_start.chars().take(4).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn session(key: Value, year: Option<i32>, date_start: &str) -> Session {
        Session {
            session_key: key,
            session_name: "Race".to_string(),
            session_year: year,
            country_name: "Bahrain".to_string(),
            meeting_name: "Bahrain Grand Prix".to_string(),
            date_start: date_start.to_string(),
            circuit_short_name: "Sakhir".to_string(),
        }
    }

    #[test]
    fn numeric_keys_compare_as_strings() {
        let sessions = vec![
            session(json!(9222), Some(2025), "2025-03-16T04:00:00+00:00"),
            session(json!("9480"), Some(2025), "2025-04-13T16:00:00+00:00"),
        ];

        assert!(Session::find_by_key(&sessions, "9222").is_some());
        assert!(Session::find_by_key(&sessions, "9480").is_some());
        assert!(Session::find_by_key(&sessions, "1234").is_none());
    }

    #[test]
    fn year_prefers_the_year_field() {
        let with_year = session(json!(1), Some(2024), "2025-03-16T04:00:00+00:00");
        assert_eq!(with_year.year(), "2024");

        let without_year = session(json!(1), None, "2025-03-16T04:00:00+00:00");
        assert_eq!(without_year.year(), "2025");
    }
}
