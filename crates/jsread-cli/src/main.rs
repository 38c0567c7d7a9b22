mod cli;
mod config;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use crossbeam_channel::bounded;
use jsread::{list_devices, select_device, Joystick, Settings, Value};

use crate::cli::{Cli, Command};
use crate::config::FileConfig;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(cli.verbose, cli.no_color);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let file = match &cli.config {
        Some(path) => config::load(path)?,
        None => FileConfig::default(),
    };
    let settings = config::build_settings(file, &cli.device)?;
    print_debug!("settings: {settings:?}");

    match cli.command {
        Command::List => list(&settings),
        Command::Info => info(settings),
        Command::Listen { count } => listen(settings, count),
        Command::Flush => flush(settings),
    }
}

fn list(settings: &Settings) -> Result<(), CliError> {
    let names = list_devices(&settings.dir, &settings.prefix)?;
    if names.is_empty() {
        print_warning!("no devices in {}", settings.dir.display());
        return Ok(());
    }
    let selected = select_device(&names, &settings.dir, settings.device.as_deref());
    for name in &names {
        let path = settings.dir.join(name);
        if Some(name.as_str()) == selected {
            print_info!("{} {}", path.display().to_string().bold(), "(selected)".green());
        } else {
            print_info!("{}", path.display());
        }
    }
    Ok(())
}

fn info(settings: Settings) -> Result<(), CliError> {
    let js = Joystick::open(settings)?;
    print_info!("{} ({})", js.name().bold(), js.device().path().display());
    print_info!("{} axes", js.axes().len());
    for (i, name) in js.axes().iter().enumerate() {
        print_info!("  {i:>3}  {name}");
    }
    print_info!("{} buttons", js.buttons().len());
    for (i, name) in js.buttons().iter().enumerate() {
        print_info!("  {i:>3}  {name}");
    }
    Ok(())
}

fn listen(settings: Settings, count: Option<usize>) -> Result<(), CliError> {
    let (stop_tx, stop_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        let _ = stop_tx.try_send(());
    })?;

    let mut js = Joystick::open(settings)?;
    print_info!("listening on {}, press Ctrl+C to stop", js.name());

    let mut seen = 0usize;
    while stop_rx.try_recv().is_err() {
        if count.is_some_and(|limit| seen >= limit) {
            break;
        }
        let Some(event) = js.listen() else {
            continue;
        };
        seen += 1;
        match event.value {
            Value::Button(_) => {
                print_info!("{} {}", event.channel.cyan(), event.value);
            }
            Value::Axis(_) => {
                print_info!("{} {}", event.channel.yellow(), event.value);
            }
        }
    }
    print_debug!("received {seen} events");
    Ok(())
}

fn flush(settings: Settings) -> Result<(), CliError> {
    let mut js = Joystick::open(settings)?;
    let flushed = js.flush();
    print_info!("flushed {flushed} events from {}", js.name());
    Ok(())
}
