use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

/// Read-only program configuration, built once at startup and handed to
/// the route handlers through rocket's managed state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub public_dir: PathBuf,
    pub scripts_dir: PathBuf,
    pub python_bin: String,
}

impl AppConfig {
    pub fn from_env() -> AppConfig {
        AppConfig {
            public_dir: PathBuf::from(env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string())),
            scripts_dir: PathBuf::from(env::var("SCRIPTS_DIR").unwrap_or_else(|_| "scripts".to_string())),
            python_bin: env::var("PYTHON_BIN").unwrap_or_else(|_| "python3".to_string()),
        }
    }

    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.public_dir.join("data")
    }

    pub fn stats_dir(&self) -> PathBuf {
        self.data_dir().join("stats")
    }

    pub fn driver_images_dir(&self) -> PathBuf {
        self.public_dir.join("images").join("drivers")
    }

    pub fn track_images_dir(&self) -> PathBuf {
        self.public_dir.join("images").join("tracks")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_paths_hang_off_the_public_dir() {
        let config = AppConfig {
            public_dir: PathBuf::from("public"),
            scripts_dir: PathBuf::from("scripts"),
            python_bin: "python3".to_string(),
        };

        assert_eq!(config.data_dir(), PathBuf::from("public/data"));
        assert_eq!(config.stats_dir(), PathBuf::from("public/data/stats"));
        assert_eq!(config.track_images_dir(), PathBuf::from("public/images/tracks"));
    }
}
