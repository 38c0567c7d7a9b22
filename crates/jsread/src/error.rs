use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for opening and resolving a joystick device.
///
/// Everything here happens at construction time. Once a [`crate::Joystick`]
/// exists, reading from it never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// The device directory holds no candidate files.
    #[error("no joystick devices found in {}", dir.display())]
    NoDevice { dir: PathBuf },
    /// The device directory could not be listed.
    #[error("failed to read device directory {}: {source}", dir.display())]
    ReadDir { dir: PathBuf, source: io::Error },
    /// The selected device file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    /// A capability request was rejected by the driver.
    #[error("{request} failed: {source}")]
    Query {
        request: &'static str,
        source: io::Error,
    },
}

/// Convenient result alias for device operations.
pub type Result<T> = std::result::Result<T, Error>;
