//! User configuration for the folio portfolio.
//!
//! Settings live in `config.toml` inside the platform config directory.
//! Every field is optional; a missing file means all defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use folio_content::Profile;
use folio_core::Theme;
use serde::{Deserialize, Serialize};

/// Name of the config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while reading config or content files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("couldn't read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("couldn't parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// The valid log levels, mirroring `tracing`'s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    /// No logging
    #[default]
    Off,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
            LogLevel::Off => "off",
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Starting color scheme.
    pub theme: Theme,
    /// Ceiling on the number of background particles.
    pub density: usize,
    /// Target frames per second.
    pub frame_rate: u32,
    /// Typewriter typing interval in milliseconds.
    pub type_interval_ms: u64,
    /// How long a fully typed phrase stays up, in milliseconds.
    pub pause_ms: u64,
    /// Virtual pixels per terminal column.
    pub cell_width_px: f32,
    /// Virtual pixels per terminal row.
    pub cell_height_px: f32,
    /// The maximum log level.
    pub log_level: LogLevel,
    /// Where log output goes.
    pub log_path: PathBuf,
    /// Optional TOML file overriding the built-in resume content.
    pub content_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let log_directory = match project_dirs() {
            Some(dirs) => dirs
                .state_dir()
                .unwrap_or_else(|| dirs.cache_dir())
                .to_path_buf(),
            None => PathBuf::from("./"),
        };

        Self {
            theme: Theme::Dark,
            density: 80,
            frame_rate: 30,
            type_interval_ms: 60,
            pause_ms: 1300,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            log_level: LogLevel::Off,
            log_path: log_directory.join("folio.log"),
            content_path: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "folio")
}

/// Default location of the config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl Config {
    /// Load from the default location, falling back to defaults when the
    /// file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`, falling back to defaults when the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {path:?}, using defaults");
            return Ok(Self::default());
        }
        tracing::info!("Loading config from {path:?}");
        let data = read(path)?;
        Self::parse(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from TOML text.
    pub fn parse(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    /// The profile to display: the content file if one is configured,
    /// otherwise the built-in content.
    pub fn load_profile(&self) -> Result<Profile, ConfigError> {
        let Some(path) = &self.content_path else {
            return Ok(Profile::builtin());
        };
        tracing::info!("Loading content from {path:?}");
        let data = read(path)?;
        let profile: Profile = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        for field in profile.missing_fields() {
            tracing::warn!("Content file {path:?} leaves `{field}` empty");
        }
        Ok(profile)
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.density, 80);
        assert_eq!(config.type_interval_ms, 60);
        assert_eq!(config.pause_ms, 1300);
        assert_eq!(config.log_level, LogLevel::Off);
        assert!(config.content_path.is_none());
        assert!(config.log_path.ends_with("folio.log"));
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse("theme = \"light\"\ndensity = 40\n").expect("parses");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.density, 40);
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.cell_height_px, 16.0);
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
            theme = "dark"
            density = 120
            frame_rate = 60
            type_interval_ms = 70
            pause_ms = 1000
            cell_width_px = 10.0
            cell_height_px = 20.0
            log_level = "debug"
            log_path = "/tmp/folio-test.log"
            content_path = "/tmp/profile.toml"
            "#,
        )
        .expect("parses");
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_path, PathBuf::from("/tmp/folio-test.log"));
        assert_eq!(config.content_path, Some(PathBuf::from("/tmp/profile.toml")));
    }

    #[test]
    fn test_bad_config_rejected() {
        assert!(Config::parse("theme = \"sepia\"").is_err());
        assert!(Config::parse("density = \"lots\"").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("folio-config-test-does-not-exist.toml");
        let config = Config::load_from(&path).expect("defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_profile_builtin() {
        let profile = Config::default().load_profile().expect("builtin");
        assert_eq!(profile, Profile::builtin());
    }

    #[test]
    fn test_load_profile_partial_override() {
        let path = std::env::temp_dir().join(format!("folio-profile-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r##"
            name = "Ada Lovelace"
            roles = ["Analytical Engine", "Notes"]

            [[projects]]
            title = "Note G"
            description = "First published program."
            link = "#"
            "##,
        )
        .expect("write temp profile");

        let config = Config {
            content_path: Some(path.clone()),
            ..Config::default()
        };
        let profile = config.load_profile().expect("parses");
        std::fs::remove_file(&path).ok();

        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.roles, vec!["Analytical Engine", "Notes"]);
        assert_eq!(profile.projects.len(), 1);
        assert!(profile.projects[0].tags.is_empty());
        assert_eq!(profile.title, Profile::builtin().title);
    }

    #[test]
    fn test_load_profile_missing_file_is_error() {
        let config = Config {
            content_path: Some(std::env::temp_dir().join("folio-no-such-profile.toml")),
            ..Config::default()
        };
        assert!(matches!(
            config.load_profile(),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_log_level_directive() {
        assert_eq!(LogLevel::Warn.as_directive(), "warn");
        assert_eq!(LogLevel::default().as_directive(), "off");
    }
}
