use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use miqat::{Language, PrayerKey};

#[derive(Parser, Debug)]
#[command(name = "miqat", version, author, about = "Prayer times, countdown and schedule with per-prayer offsets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HourFormat {
    #[value(name = "12")]
    Twelve,
    #[value(name = "24")]
    TwentyFour,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a day's adjusted prayer times and the countdown to the next prayer
    Times {
        /// Day to show (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show only the next prayer and the time left
    Next {
        /// Include seconds in the countdown
        #[arg(long)]
        seconds: bool,
    },
    /// Weekly schedule
    Week {
        /// First day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        from: Option<NaiveDate>,
    },
    /// Monthly schedule table
    Month {
        /// First day (YYYY-MM-DD), defaults to today
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Number of days, defaults to the configured month length
        #[arg(long)]
        days: Option<u32>,
    },
    /// Set a prayer's manual offset in minutes
    Offset {
        /// Prayer name (fajr, dhuhr, asr, maghrib, isha)
        prayer: PrayerKey,
        /// Minutes to add to the base time (may be negative)
        #[arg(allow_negative_numbers = true)]
        minutes: i32,
        /// Add to the current offset instead of replacing it
        #[arg(long)]
        relative: bool,
    },
    /// Show all offsets, or reset them
    Offsets {
        /// Reset every offset to zero
        #[arg(long)]
        reset: bool,
    },
    /// Switch between 12- and 24-hour display
    Clock {
        format: HourFormat,
    },
    /// Display language (ar, en)
    Lang {
        language: Language,
    },
    /// Set the azan reciter shown for a prayer
    Reciter {
        prayer: PrayerKey,
        /// Reciter name
        name: String,
    },
    /// Configure the pre-prayer reminder
    Reminder {
        prayer: PrayerKey,
        /// Minutes before the prayer (0 turns the reminder off)
        minutes: u32,
        /// Turn all alerts for this prayer off
        #[arg(long)]
        disable: bool,
    },
    /// Print the stored profile
    Profile {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
