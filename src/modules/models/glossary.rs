use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::modules::models::general::load_json_file;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
}

impl GlossaryTerm {
    pub async fn load_all(config: &AppConfig) -> Vec<GlossaryTerm> {
        load_json_file(&config.data_dir().join("glossary.json"))
            .await
            .unwrap_or_default()
    }
}
