use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Device(#[from] jsread::Error),
    #[error("failed to set Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),
}
