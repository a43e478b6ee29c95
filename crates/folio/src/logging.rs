//! Log file setup.
//!
//! The terminal belongs to the UI, so logs go to a file. Nothing is
//! installed unless a level is configured or `FOLIO_LOG` is set.

use color_eyre::eyre::{ContextCompat as _, Result};
use folio_config::{Config, LogLevel};
use tracing_subscriber::{Layer as _, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Environment variable holding custom `EnvFilter` directives.
const LOG_ENV_VAR: &str = "FOLIO_LOG";

/// Install the global subscriber according to the config.
pub fn setup(config: &Config) -> Result<()> {
    let are_filters_manually_set = std::env::var_os(LOG_ENV_VAR).is_some();
    if config.log_level == LogLevel::Off && !are_filters_manually_set {
        return Ok(());
    }

    let filters = if are_filters_manually_set {
        tracing_subscriber::EnvFilter::builder()
            .with_env_var(LOG_ENV_VAR)
            .with_default_directive("error".parse()?)
            .from_env_lossy()
    } else {
        tracing_subscriber::EnvFilter::try_new(directives(config.log_level))?
    };

    let path = &config.log_path;
    let directory = path.parent().context("Couldn't get log path's parent")?;
    std::fs::create_dir_all(directory)?;
    let file = std::fs::File::create(path)?;

    let logfile_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .with_filter(filters);

    tracing_subscriber::registry().with(logfile_layer).init();
    tracing::info!("Logging to {path:?} at {}", config.log_level.as_directive());
    Ok(())
}

/// Filter directives enabling `level` for this workspace's crates only.
fn directives(level: LogLevel) -> String {
    let level = level.as_directive();
    format!("off,folio={level},folio_effects={level},folio_config={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_cover_workspace_crates() {
        let filter = directives(LogLevel::Debug);
        assert!(filter.starts_with("off,"));
        assert!(filter.contains("folio_effects=debug"));
        assert!(tracing_subscriber::EnvFilter::try_new(filter).is_ok());
    }
}
