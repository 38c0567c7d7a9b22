use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory the kernel exposes joystick devices in.
pub const DEFAULT_DIR: &str = "/dev/input";
/// File name prefix of joystick devices.
pub const DEFAULT_PREFIX: &str = "js";
/// How long `listen` waits when the device is quiet.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(100);
/// Upper bound on the sleep between idle polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Options for opening and listening to a joystick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dir: PathBuf,
    pub prefix: String,
    /// File name (`js1`) or full path (`/dev/input/js1`) of the device to
    /// use. The first device in lexical order is used when unset or when
    /// nothing matches.
    pub device: Option<String>,
    pub timeout: Duration,
    /// Return from `listen` on the first button event, even while axis
    /// events are still queued.
    pub stop_on_button: bool,
    pub poll_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_DIR),
            prefix: DEFAULT_PREFIX.to_owned(),
            device: None,
            timeout: DEFAULT_TIMEOUT,
            stop_on_button: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Settings {
    pub fn with_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_stop_on_button(mut self, stop_on_button: bool) -> Self {
        self.stop_on_button = stop_on_button;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_kernel_layout() {
        let settings = Settings::default();
        assert_eq!(settings.dir, Path::new("/dev/input"));
        assert_eq!(settings.prefix, "js");
        assert_eq!(settings.device, None);
        assert_eq!(settings.timeout, Duration::from_millis(100));
        assert!(!settings.stop_on_button);
    }

    #[test]
    fn builders_override_fields() {
        let settings = Settings::default()
            .with_dir("/tmp/input")
            .with_device("js2")
            .with_timeout(Duration::from_millis(5))
            .with_stop_on_button(true)
            .with_poll_interval(Duration::ZERO);
        assert_eq!(settings.dir, Path::new("/tmp/input"));
        assert_eq!(settings.device.as_deref(), Some("js2"));
        assert_eq!(settings.timeout, Duration::from_millis(5));
        assert!(settings.stop_on_button);
        assert_eq!(settings.poll_interval, Duration::ZERO);
    }
}
