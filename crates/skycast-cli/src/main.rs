use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use skycast_core::clock::{ClockFormat, SystemClock, TimeSource};
use skycast_core::weather::{Condition, TimeOfDay};
use skycast_core::{DashboardView, SkycastConfig, WidgetState};

/// skycast — a decorative terminal weather widget.
///
/// Shows mock current conditions and a seven-day forecast, cycles through
/// sunrise, day, sunset and night, and offers activity and clothing ideas
/// for each day.
#[derive(Parser, Debug)]
#[command(name = "skycast", version, about)]
struct Cli {
    /// Current condition to show (sunny, cloudy, partly-cloudy, rainy,
    /// thunderstorm, clear, windy).
    #[arg(short, long)]
    condition: Option<Condition>,

    /// Current temperature in °F.
    #[arg(short, long, allow_negative_numbers = true)]
    temperature: Option<i32>,

    /// Time of day to start from (sunrise, day, sunset, night).
    #[arg(long)]
    time_of_day: Option<TimeOfDay>,

    /// Show the clock in 24-hour format.
    #[arg(long)]
    clock_24h: bool,

    /// Print the initial view as JSON and exit instead of opening the TUI.
    #[arg(long)]
    snapshot: bool,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Command-line flags win over the config file.
    fn apply_to(&self, config: &mut SkycastConfig) {
        if let Some(condition) = self.condition {
            config.seed.condition = condition;
        }
        if let Some(temperature) = self.temperature {
            config.seed.temperature = temperature;
        }
        if let Some(time_of_day) = self.time_of_day {
            config.seed.time_of_day = time_of_day;
        }
        if self.clock_24h {
            config.display.clock_format = ClockFormat::TwentyFourHour;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Log to a file to avoid corrupting the TUI output. If the log file
    // can't be opened, silently discard logs rather than polluting the
    // alternate screen buffer.
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("skycast");
    let _ = std::fs::create_dir_all(&log_dir);
    let log_path = log_dir.join("skycast.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path);

    match log_file {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
                )
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(_) => {
            // Fallback: discard all logs to avoid TUI corruption.
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("off"))
                .with_writer(std::io::sink)
                .init();
        }
    }

    // Load config.
    let mut config = SkycastConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
        SkycastConfig::default()
    });
    cli.apply_to(&mut config);

    tracing::info!("Starting skycast v{}", env!("CARGO_PKG_VERSION"));

    if cli.snapshot {
        let state = WidgetState::from_seed(&config.seed, SystemClock.now());
        let view = DashboardView::build(&state, config.display.clock_format);
        println!("{}", view.to_json_pretty()?);
        return Ok(());
    }

    // Start the TUI.
    let mut app = skycast_tui::App::new(config);
    app.run().await?;

    tracing::info!("skycast exited cleanly");
    Ok(())
}
