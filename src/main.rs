mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use miqat::config::AppConfig;
use miqat::db::SqliteProfileStore;
use miqat::prayer_times::{Clock, SystemClock};
use miqat::profile::{ProfileSettings, load_or_create};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    // Ensure data directory exists and open the profile store
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let store = SqliteProfileStore::open(&db_path, &config.profile_id)
        .with_context(|| format!("Opening database at {:?}", db_path))?;

    let profile = load_or_create(&store, &config.profile_id).context("Loading profile")?;
    let settings = ProfileSettings::new(store);

    let clock = SystemClock;
    let now = clock.now();
    let today = now.date();
    let base = config.base_schedule(today);

    match cli.command {
        Some(Commands::Times { date }) => {
            let base = match date {
                Some(d) if d != today => config.base_schedule(d),
                _ => base,
            };
            handlers::handle_times(&profile, &config, &base, now, date)?;
        }
        Some(Commands::Next { seconds }) => {
            handlers::handle_next(&profile, &base, now, seconds)?;
        }
        Some(Commands::Week { from }) => {
            handlers::handle_week(&profile, &config, today, from)?;
        }
        Some(Commands::Month { from, days }) => {
            handlers::handle_month(&profile, &config, today, from, days)?;
        }
        Some(Commands::Offset { prayer, minutes, relative }) => {
            handlers::handle_offset(&settings, &profile, prayer, minutes, relative)?;
        }
        Some(Commands::Offsets { reset }) => {
            handlers::handle_offsets(&settings, &profile, reset)?;
        }
        Some(Commands::Clock { format }) => {
            handlers::handle_clock(&settings, &profile, format)?;
        }
        Some(Commands::Lang { language }) => {
            handlers::handle_lang(&settings, &profile, language)?;
        }
        Some(Commands::Reciter { prayer, name }) => {
            handlers::handle_reciter(&settings, &profile, prayer, &name)?;
        }
        Some(Commands::Reminder { prayer, minutes, disable }) => {
            handlers::handle_reminder(&settings, &profile, prayer, minutes, disable)?;
        }
        Some(Commands::Profile { json }) => {
            handlers::handle_profile(&profile, json)?;
        }

        // No subcommand → launch TUI
        None => {
            tui::app::run(config, base, profile, settings, Box::new(clock))?;
        }
    }

    Ok(())
}
