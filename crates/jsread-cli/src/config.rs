use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jsread::Settings;
use serde::Deserialize;
use thiserror::Error;

use crate::cli::DeviceArgs;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("yaml deserialize error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid timeout: {0} (expected a non-negative number of seconds)")]
    InvalidTimeout(f64),
}

/// Settings as written in the YAML file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    dir: Option<PathBuf>,
    prefix: Option<String>,
    device: Option<String>,
    /// Seconds.
    timeout: Option<f64>,
    stop_on_button: Option<bool>,
    poll_interval_ms: Option<u64>,
}

pub(crate) fn load(path: &Path) -> Result<FileConfig, ConfigError> {
    let input = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&input)
}

pub(crate) fn parse(input: &str) -> Result<FileConfig, ConfigError> {
    // An empty document deserializes to unit, not to a mapping.
    if input.trim().is_empty() {
        return Ok(FileConfig::default());
    }
    Ok(serde_yaml::from_str(input)?)
}

/// Layers command line flags over the file over the library defaults.
pub(crate) fn build_settings(file: FileConfig, args: &DeviceArgs) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    if let Some(dir) = args.dir.clone().or(file.dir) {
        settings = settings.with_dir(dir);
    }
    if let Some(prefix) = file.prefix {
        settings = settings.with_prefix(prefix);
    }
    if let Some(device) = args.device.clone().or(file.device) {
        settings = settings.with_device(device);
    }
    if let Some(secs) = args.timeout.or(file.timeout) {
        let timeout =
            Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidTimeout(secs))?;
        settings = settings.with_timeout(timeout);
    }
    if let Some(ms) = file.poll_interval_ms {
        settings = settings.with_poll_interval(Duration::from_millis(ms));
    }
    let stop_on_button = args.stop_on_button || file.stop_on_button.unwrap_or(false);

    Ok(settings.with_stop_on_button(stop_on_button))
}
