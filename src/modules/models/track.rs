use serde_json::{Map, Value};

use crate::config::AppConfig;
use crate::modules::helpers::slug::slugify;
use crate::modules::models::general::load_json_file;

/// Extension priority for the track outline images. First hit wins.
pub const TRACK_IMAGE_EXTENSIONS: [&str; 5] = ["avif", "png", "webp", "jpg", "jpeg"];

/// Track layouts are keyed by the normalized circuit short name and
/// passed through to the replay page untouched.
pub async fn load_layouts(config: &AppConfig) -> Map<String, Value> {
    load_json_file(&config.data_dir().join("track_layouts.json"))
        .await
        .unwrap_or_default()
}

pub fn layout_for(layouts: &Map<String, Value>, circuit_short_name: &str) -> Option<Value> {
    layouts.get(&slugify(circuit_short_name)).cloned()
}

/// Probe the tracks image directory for `<circuit slug>.<ext>` in the
/// fixed priority order and return the web path of the first match.
pub fn find_track_image(config: &AppConfig, circuit_short_name: &str) -> Option<String> {
    let slug = slugify(circuit_short_name);
    let dir = config.track_images_dir();

    TRACK_IMAGE_EXTENSIONS
        .iter()
        .find(|ext| dir.join(format!("{slug}.{ext}")).is_file())
        .map(|ext| format!("/images/tracks/{slug}.{ext}"))
}
