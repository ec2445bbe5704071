use std::path::Path;

use log::warn;
use serde::de::DeserializeOwned;
use tokio::fs;

/// Read and parse one of the pre-generated json data files.
///
/// Every failure mode (missing file, unreadable file, malformed json)
/// degrades to `None` so pages can render with empty data instead of
/// surfacing a hard error.
pub async fn load_json_file<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(error) => {
            warn!(target:"models/general:load_json_file", "Could not read {}: {}", path.display(), error);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            warn!(target:"models/general:load_json_file", "Malformed json in {}: {}", path.display(), error);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::Value;

    use super::*;

    #[tokio::test]
    async fn missing_file_yields_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded: Option<Value> = load_json_file(&dir.path().join("nope.json")).await;
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn malformed_json_yields_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        let mut file = std::fs::File::create(&path).expect("create file");
        write!(file, "{{ not json").expect("write file");

        let loaded: Option<Value> = load_json_file(&path).await;
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn valid_json_parses() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ok.json");
        std::fs::write(&path, r#"[{"term": "DRS", "definition": "Drag reduction system"}]"#)
            .expect("write file");

        let loaded: Option<Value> = load_json_file(&path).await;
        assert_eq!(loaded.expect("parsed")[0]["term"], "DRS");
    }
}
