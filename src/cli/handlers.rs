use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};

use miqat::config::AppConfig;
use miqat::models::{BaseSchedule, PrayerKey, PrayerStatus, SHEIKHS, UserProfile, known_sheikh};
use miqat::prayer_times::{DaySchedule, adjusted_day, resolve_next, today_board};
use miqat::profile::{ProfileSettings, ProfileStore};
use miqat::utils::{format_clock, format_duration_secs, format_offset, hijri_label};

use crate::cli::args::HourFormat;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;212;175;55m";

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(
    profile: &UserProfile,
    config: &AppConfig,
    base: &BaseSchedule,
    now: NaiveDateTime,
    date: Option<NaiveDate>,
) -> Result<()> {
    let lang = profile.language;
    let use_12h = profile.use_12_hour_format;
    let day = date.unwrap_or(now.date());

    println!();
    let hijri = hijri_label(day, config.display.hijri_offset, lang).unwrap_or_default();
    println_colored!(GOLD, "  Prayer Times — {}  {}", day.format("%A %Y-%m-%d"), hijri);
    println!();

    if day == now.date() {
        for slot in today_board(base, &profile.prayer_offsets, now) {
            let line = format!(
                "  {:<10}  {:>8}   {:<10} {}",
                slot.key.display_name(lang),
                format_clock(slot.at, use_12h, lang),
                format_offset(*profile.prayer_offsets.get(slot.key)),
                profile.prayer_configs.get(slot.key).sheikh,
            );
            match slot.status {
                PrayerStatus::Passed => println_colored!(DIM, "{}", line),
                PrayerStatus::Next => println_colored!(AMBER, "{}", line),
                PrayerStatus::Upcoming => println_colored!(BOLD, "{}", line),
            }
        }
    } else {
        let times = adjusted_day(base, &profile.prayer_offsets, day, 0);
        for (key, at) in times.iter() {
            println_colored!(
                BOLD,
                "  {:<10}  {:>8}   {}",
                key.display_name(lang),
                format_clock(*at, use_12h, lang),
                format_offset(*profile.prayer_offsets.get(key)),
            );
        }
    }

    if day == now.date() {
        let next = resolve_next(base, &profile.prayer_offsets, now);
        println!();
        println_colored!(
            AMBER,
            "  Next: {}{} in {}",
            next.key.display_name(lang),
            if next.rolled_over { " (tomorrow)" } else { "" },
            format_duration_secs(next.remaining.total_seconds())
        );
    }
    println!();
    Ok(())
}

pub fn handle_next(profile: &UserProfile, base: &BaseSchedule, now: NaiveDateTime, seconds: bool) -> Result<()> {
    let next = resolve_next(base, &profile.prayer_offsets, now);
    println!(
        "{} {} {}",
        next.key.display_name(profile.language),
        format_clock(next.when, profile.use_12_hour_format, profile.language),
        next.remaining.clock(seconds)
    );
    Ok(())
}

// ─── Week / Month ────────────────────────────────────────────────────────────

fn print_table(profile: &UserProfile, today: NaiveDate, days: &[DaySchedule]) {
    let lang = profile.language;
    let use_12h = profile.use_12_hour_format;

    print!("  {:<16}", "");
    for key in PrayerKey::ALL {
        print!("{:>10}", key.display_name(lang));
    }
    println!();

    for day in days {
        let mut line = format!("  {:<16}", day.date.format("%a %d %b"));
        for (_, at) in day.times.iter() {
            line.push_str(&format!("{:>10}", format_clock(*at, use_12h, lang)));
        }
        if day.date == today {
            println_colored!(GOLD, "{}", line);
        } else {
            println!("{}", line);
        }
    }
}

pub fn handle_week(profile: &UserProfile, config: &AppConfig, today: NaiveDate, from: Option<NaiveDate>) -> Result<()> {
    let days = config.schedule_days(&profile.prayer_offsets, from.unwrap_or(today), config.display.week_days);
    println!();
    println_colored!(GOLD, "  This Week");
    println!();
    print_table(profile, today, &days);
    println!();
    Ok(())
}

pub fn handle_month(
    profile: &UserProfile,
    config: &AppConfig,
    today: NaiveDate,
    from: Option<NaiveDate>,
    days: Option<u32>,
) -> Result<()> {
    let count = days.unwrap_or(config.display.month_days);
    let days = config.schedule_days(&profile.prayer_offsets, from.unwrap_or(today), count);
    println!();
    println_colored!(GOLD, "  Next {} Days", count);
    println!();
    print_table(profile, today, &days);
    println!();
    Ok(())
}

// ─── Settings ────────────────────────────────────────────────────────────────

pub fn handle_offset<S: ProfileStore>(
    settings: &ProfileSettings<S>,
    profile: &UserProfile,
    key: PrayerKey,
    minutes: i32,
    relative: bool,
) -> Result<()> {
    let updated = if relative {
        settings.adjust_offset(profile, key, minutes)
    } else {
        settings.set_offset(profile, key, minutes)
    }
    .context("Saving offset")?;
    println_colored!(
        GREEN,
        "  ✓ {} offset: {}",
        key.display_name(updated.language),
        format_offset(*updated.prayer_offsets.get(key))
    );
    Ok(())
}

pub fn handle_offsets<S: ProfileStore>(settings: &ProfileSettings<S>, profile: &UserProfile, reset: bool) -> Result<()> {
    let profile = if reset {
        let updated = settings.reset_offsets(profile).context("Resetting offsets")?;
        println_colored!(GREEN, "  ✓ All offsets reset");
        updated
    } else {
        profile.clone()
    };
    println!();
    for (key, minutes) in profile.prayer_offsets.iter() {
        println!("  {:<10}  {}", key.display_name(profile.language), format_offset(*minutes));
    }
    println!();
    Ok(())
}

pub fn handle_clock<S: ProfileStore>(settings: &ProfileSettings<S>, profile: &UserProfile, format: HourFormat) -> Result<()> {
    let twelve = format == HourFormat::Twelve;
    settings.set_use_12_hour(profile, twelve).context("Saving clock format")?;
    println_colored!(GREEN, "  ✓ Using {}-hour clock", if twelve { 12 } else { 24 });
    Ok(())
}

pub fn handle_lang<S: ProfileStore>(settings: &ProfileSettings<S>, profile: &UserProfile, language: miqat::Language) -> Result<()> {
    settings.set_language(profile, language).context("Saving language")?;
    println_colored!(GREEN, "  ✓ Language: {}", language.as_str());
    Ok(())
}

pub fn handle_reciter<S: ProfileStore>(settings: &ProfileSettings<S>, profile: &UserProfile, key: PrayerKey, name: &str) -> Result<()> {
    let updated = settings.set_sheikh(profile, key, name).context("Saving reciter")?;
    println_colored!(
        GREEN,
        "  ✓ {} reciter: {}",
        key.display_name(updated.language),
        updated.prayer_configs.get(key).sheikh
    );
    if known_sheikh(name).is_none() {
        println_colored!(DIM, "    (custom label; listed reciters: {})", SHEIKHS.join(", "));
    }
    Ok(())
}

pub fn handle_reminder<S: ProfileStore>(
    settings: &ProfileSettings<S>,
    profile: &UserProfile,
    key: PrayerKey,
    minutes: u32,
    disable: bool,
) -> Result<()> {
    let updated = settings
        .set_reminder(profile, key, minutes, !disable)
        .context("Saving reminder")?;
    let minutes = updated.prayer_configs.get(key).reminder_before;
    let name = key.display_name(profile.language);
    if disable {
        println_colored!(DIM, "  ○ {} alerts off", name);
    } else if minutes == 0 {
        println_colored!(GREEN, "  ✓ {} azan only, no reminder", name);
    } else {
        println_colored!(GREEN, "  ✓ {} reminder {} min before", name, minutes);
    }
    Ok(())
}

// ─── Profile ─────────────────────────────────────────────────────────────────

pub fn handle_profile(profile: &UserProfile, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(profile).context("Serializing profile")?);
        return Ok(());
    }
    let lang = profile.language;
    println!();
    println_colored!(GOLD, "  Profile '{}' — {}", profile.id, profile.name);
    println!();
    println!("  Language:  {}", lang.as_str());
    println!("  Clock:     {}-hour", if profile.use_12_hour_format { 12 } else { 24 });
    println!();
    for (key, config) in profile.prayer_configs.iter() {
        let alerts = if !config.is_enabled {
            "off".to_string()
        } else if config.reminder_before > 0 {
            format!("reminder {} min", config.reminder_before)
        } else {
            "azan only".to_string()
        };
        println!(
            "  {:<10}  {:<10}  {:<26}  {}",
            key.display_name(lang),
            format_offset(*profile.prayer_offsets.get(key)),
            config.sheikh,
            alerts
        );
    }
    println!();
    Ok(())
}
