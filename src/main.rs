mod alarm;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::alarm::buffer::{BufferSetting, DEFAULT_BUFFER_MINUTES};
use crate::alarm::calculator::compute_alarm;
use crate::alarm::format::{TimeDisplayMode, format_clock};
use crate::alarm::model::{CalendarEvent, load_event_file, mock_calendar_events};
use crate::ui::screen::AlarmScreen;

#[derive(Parser, Debug)]
#[command(
    name = "smartalarm",
    version,
    about = "Calendar-based wake-up alarm calculator"
)]
struct Cli {
    /// JSON event file to use instead of the built-in sample calendar
    #[arg(long)]
    events: Option<PathBuf>,

    /// Starting buffer in minutes
    #[arg(long, default_value_t = DEFAULT_BUFFER_MINUTES)]
    buffer: u32,

    /// Show times on a 24-hour clock instead of AM/PM
    #[arg(long)]
    hour24: bool,

    /// Print one calculation to stdout instead of opening the window
    #[arg(long)]
    headless: bool,
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let display_mode = if cli.hour24 {
        TimeDisplayMode::Hour24
    } else {
        TimeDisplayMode::Hour12
    };

    let events = match &cli.events {
        Some(path) => load_event_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => mock_calendar_events(),
    };
    info!(count = events.len(), "calendar events loaded");
    if events.is_empty() {
        warn!("calendar is empty; syncing will report no events");
    }

    if cli.headless {
        return print_alarm(&events, cli.buffer, display_mode);
    }

    let screen = AlarmScreen::new(events, BufferSetting::new(cli.buffer), display_mode);
    ui::app::run_gui(screen)
}

fn print_alarm(events: &[CalendarEvent], buffer_minutes: u32, mode: TimeDisplayMode) -> Result<()> {
    let result = compute_alarm(events, buffer_minutes)?;
    println!("Smart Alarm");
    println!("Buffer: {} minutes", result.buffer_minutes);
    println!(
        "Earliest event: {} (#{})",
        result.earliest_event.title, result.earliest_event.id
    );
    println!(
        "Event time: {}",
        format_clock(&result.earliest_event.start_time, mode)
    );
    println!("Alarm time: {}", format_clock(&result.alarm_time, mode));
    Ok(())
}
