//! Command line arguments.

use std::path::PathBuf;

use folio_config::{Config, LogLevel};
use folio_core::Theme;

/// A personal portfolio that lives in your terminal.
#[derive(clap::Parser, Debug, Clone, Default)]
#[command(version, about)]
pub struct CliArgs {
    /// Config file to use instead of the one in the platform config directory.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Starting color scheme: `dark` or `light`.
    #[arg(short, long, value_parser = parse_theme)]
    pub theme: Option<Theme>,

    /// Ceiling on the number of background particles.
    #[arg(short, long)]
    pub density: Option<usize>,

    /// Log level: `error`, `warn`, `info`, `debug`, `trace` or `off`.
    #[arg(long, value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,

    /// TOML file overriding the built-in resume content.
    #[arg(long)]
    pub content: Option<PathBuf>,
}

impl CliArgs {
    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(content) = &self.content {
            config.content_path = Some(content.clone());
        }
        config
    }
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    match value.to_ascii_lowercase().as_str() {
        "dark" => Ok(Theme::Dark),
        "light" => Ok(Theme::Light),
        other => Err(format!("unknown theme `{other}`, expected `dark` or `light`")),
    }
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    match value.to_ascii_lowercase().as_str() {
        "error" => Ok(LogLevel::Error),
        "warn" => Ok(LogLevel::Warn),
        "info" => Ok(LogLevel::Info),
        "debug" => Ok(LogLevel::Debug),
        "trace" => Ok(LogLevel::Trace),
        "off" => Ok(LogLevel::Off),
        other => Err(format!("unknown log level `{other}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "folio",
            "--theme",
            "light",
            "--density",
            "40",
            "--log-level",
            "debug",
        ])
        .expect("parses");
        assert_eq!(args.theme, Some(Theme::Light));
        assert_eq!(args.density, Some(40));
        assert_eq!(args.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_bad_theme_rejected() {
        assert!(CliArgs::try_parse_from(["folio", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn test_apply_overrides_only_given_flags() {
        let args = CliArgs {
            density: Some(12),
            content: Some(PathBuf::from("me.toml")),
            ..CliArgs::default()
        };
        let config = args.apply(Config::default());
        assert_eq!(config.density, 12);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.content_path, Some(PathBuf::from("me.toml")));
    }
}
