use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// List candidate device files.
    List,
    /// Show the device name and its channel maps.
    Info,
    /// Print events until interrupted.
    Listen {
        /// Stop after this many events
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Drain buffered events and report how many were discarded.
    Flush,
}

/// Options that select and tune the device. They override the config file.
#[derive(Debug, Default, Args, PartialEq)]
pub(crate) struct DeviceArgs {
    /// Directory holding the device files
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Device file name or full path (e.g. js1 or /dev/input/js1)
    #[arg(short, long, global = true)]
    pub device: Option<String>,

    /// Seconds to wait for input before giving up on a read
    #[arg(short, long, global = true)]
    pub timeout: Option<f64>,

    /// Return as soon as a button event arrives
    #[arg(short, long, global = true)]
    pub stop_on_button: bool,
}

/// Prints named axis and button events from a Linux joystick.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// YAML file with device settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub device: DeviceArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "jsread-cli", "listen", "-n", "5", "--device", "js1", "--timeout", "0.5", "-s",
        ]);
        assert_eq!(cli.command, Command::Listen { count: Some(5) });
        assert_eq!(cli.device.device.as_deref(), Some("js1"));
        assert_eq!(cli.device.timeout, Some(0.5));
        assert!(cli.device.stop_on_button);
        assert!(!cli.verbose);
    }

    #[test]
    fn defaults_leave_settings_unset() {
        let cli = Cli::parse_from(["jsread-cli", "info"]);
        assert_eq!(cli.command, Command::Info);
        assert_eq!(cli.device, DeviceArgs::default());
        assert!(cli.config.is_none());
    }
}
