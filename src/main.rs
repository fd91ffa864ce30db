// Booking Calendar command line
// Main entry point

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;

use booking_calendar::models::settings::{FirstDayOfWeek, TimeFormat};
use booking_calendar::models::view::CalendarViewMode;
use booking_calendar::models::window::DateWindow;
use booking_calendar::services::calendar::{
    compute_window, is_window_valid, navigate_from, resolve_anchor_month_str,
    resolve_search_state, time_options_on, window_title, CalendarQuery, Navigation,
};
use booking_calendar::services::config::AppConfig;
use booking_calendar::utils::date::format_date_only;

/// Calendar windows and time options for the booking dashboard.
#[derive(Parser)]
#[command(name = "booking-calendar", version, about)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Fail instead of falling back when a preference is not recognised.
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the window a view shows today.
    Window {
        view: String,
        /// Override the configured first day of the week.
        #[arg(long)]
        first_day: Option<String>,
    },
    /// Check a view/start/end triple.
    Validate {
        view: String,
        start: String,
        end: String,
    },
    /// Print the month a grid date is labelled with.
    Anchor { date: String },
    /// List half-hour time options.
    Times {
        /// Override the configured time format (12h or 24h).
        #[arg(long)]
        format: Option<String>,
        /// Only list times inside business hours on this date.
        #[arg(long)]
        on: Option<String>,
    },
    /// Resolve URL search state into a trusted window.
    Resolve {
        #[arg(long)]
        view: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    /// Step a window backward, forward or back to today.
    Navigate {
        view: String,
        start: String,
        end: String,
        #[arg(value_enum)]
        direction: Direction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    Prev,
    Today,
    Next,
}

impl From<Direction> for Navigation {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Prev => Navigation::Previous,
            Direction::Today => Navigation::Today,
            Direction::Next => Navigation::Next,
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG takes precedence over the flag
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn parse_view(raw: &str) -> Result<CalendarViewMode> {
    raw.parse::<CalendarViewMode>()
        .with_context(|| format!("cannot use view {:?}", raw))
}

fn window_json(view: CalendarViewMode, window: &DateWindow) -> serde_json::Value {
    json!({
        "view": view,
        "start": format_date_only(window.start()),
        "end": format_date_only(window.end()),
        "title": window_title(view, window),
    })
}

fn run(cli: Cli) -> Result<serde_json::Value> {
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.strict {
        config.validate_strict()?;
    }
    let settings = &config.preferences;
    let preferences = settings.preferences();
    let clock = config.clock();

    let output = match cli.command {
        Command::Window { view, first_day } => {
            let view = parse_view(&view)?;
            let first_day = match first_day {
                Some(raw) => raw.parse::<FirstDayOfWeek>().map_err(|e| anyhow!(e))?,
                None => preferences.first_day_of_week,
            };
            let window = compute_window(view, Some(first_day), clock.as_ref());
            window_json(view, &window)
        }
        Command::Validate { view, start, end } => {
            json!({ "valid": is_window_valid(&view, &start, &end) })
        }
        Command::Anchor { date } => {
            let anchor = resolve_anchor_month_str(&date)
                .ok_or_else(|| anyhow!("invalid date {:?}", date))?;
            json!({ "anchor": format_date_only(anchor) })
        }
        Command::Times { format, on } => {
            let format = match format {
                Some(raw) => raw.parse::<TimeFormat>().map_err(|e| anyhow!(e))?,
                None => preferences.time_format,
            };
            let options = time_options_on(format, &config.business_hours, on.as_deref())?;
            serde_json::to_value(options)?
        }
        Command::Resolve { view, start, end } => {
            let query = CalendarQuery { view, start, end };
            let resolved =
                resolve_search_state(&query, &preferences, settings.default_view(), clock.as_ref());
            let mut value = window_json(resolved.view, &resolved.window);
            value["recomputed"] = json!(resolved.recomputed);
            value
        }
        Command::Navigate {
            view,
            start,
            end,
            direction,
        } => {
            let (view, window) = navigate_from(
                &view,
                &start,
                &end,
                direction.into(),
                Some(preferences.first_day_of_week),
                clock.as_ref(),
            )?;
            window_json(view, &window)
        }
    };

    Ok(output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::debug!("Starting booking-calendar");

    let output = run(cli)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
