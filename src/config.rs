use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User settings, read from `config.toml`.
///
/// Every key is optional; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Folder holding the catalog JSON files and site images
    pub public_dir: PathBuf,
    /// Base URL of the "host an event" form. Empty means not configured.
    pub host_form_url: String,
    /// Location shown by "Get Directions"
    pub map_link: String,
    /// Carousel arrow step in pixels for both strips. Unset keeps each
    /// strip's own step.
    pub carousel_step: Option<f32>,
    /// Log filter used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            host_form_url: String::new(),
            map_link: "https://maps.app.goo.gl/vW3wwN5AYYPfJE296".to_string(),
            carousel_step: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Get the path where the settings file is expected
    /// - Linux: ~/.config/carolina-lounge/config.toml
    /// - macOS: ~/Library/Application Support/carolina-lounge/config.toml
    /// - Windows: %APPDATA%\carolina-lounge\config.toml
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("carolina-lounge");
        path.push("config.toml");
        Some(path)
    }

    /// Parse settings from a file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from the default location, falling back to defaults.
    ///
    /// Returns the warning to log once logging is up, if the file was unusable.
    pub fn load() -> (Self, Option<ConfigError>) {
        let Some(path) = Self::default_path() else {
            return (Self::default(), None);
        };

        match Self::from_file(&path) {
            Ok(settings) => (settings, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::from_file(&dir.path().join("config.toml")).unwrap();

        assert_eq!(settings, Settings::default());
        assert!(settings.host_form_url.is_empty());
        assert_eq!(settings.carousel_step, None);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "host_form_url = \"https://forms.example.com/host\"\npublic_dir = \"/srv/carolina/public\"\n",
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();

        assert_eq!(settings.host_form_url, "https://forms.example.com/host");
        assert_eq!(settings.public_dir, PathBuf::from("/srv/carolina/public"));
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.carousel_step, None);
    }

    #[test]
    fn test_step_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "carousel_step = 400.0\n").unwrap();

        assert_eq!(Settings::from_file(&path).unwrap().carousel_step, Some(400.0));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "carousel_step = \"wide\"").unwrap();

        assert!(matches!(Settings::from_file(&path), Err(ConfigError::Toml { .. })));
    }
}
