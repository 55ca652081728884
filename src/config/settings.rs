use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::{BaseSchedule, PrayerOffsets, TimeOfDay};
use crate::prayer_times::adjust::shift_days;
use crate::prayer_times::{BaseScheduleCalculator, DaySchedule, adjusted_day, project_schedule};

fn default_profile_id() -> String {
    "default".to_string()
}
fn default_fajr() -> TimeOfDay {
    BaseSchedule::reference().fajr
}
fn default_dhuhr() -> TimeOfDay {
    BaseSchedule::reference().dhuhr
}
fn default_asr() -> TimeOfDay {
    BaseSchedule::reference().asr
}
fn default_maghrib() -> TimeOfDay {
    BaseSchedule::reference().maghrib
}
fn default_isha() -> TimeOfDay {
    BaseSchedule::reference().isha
}
fn default_latitude() -> f64 {
    33.8938
}
fn default_longitude() -> f64 {
    35.5018
}
fn default_calc_method() -> String {
    "MuslimWorldLeague".to_string()
}
fn default_madhab() -> String {
    "Shafi".to_string()
}
fn default_timezone_offset() -> i32 {
    120
}
fn default_tick_rate_ms() -> u64 {
    1000
}
fn default_week_days() -> u32 {
    7
}
fn default_month_days() -> u32 {
    30
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleSource {
    /// Base times come straight from `[schedule]`.
    #[default]
    Static,
    /// Base times are derived from `[location]` for the current date.
    Calculated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub source: ScheduleSource,
    #[serde(default = "default_fajr")]
    pub fajr: TimeOfDay,
    #[serde(default = "default_dhuhr")]
    pub dhuhr: TimeOfDay,
    #[serde(default = "default_asr")]
    pub asr: TimeOfDay,
    #[serde(default = "default_maghrib")]
    pub maghrib: TimeOfDay,
    #[serde(default = "default_isha")]
    pub isha: TimeOfDay,
}

impl ScheduleConfig {
    pub fn static_base(&self) -> BaseSchedule {
        BaseSchedule {
            fajr: self.fajr,
            dhuhr: self.dhuhr,
            asr: self.asr,
            maghrib: self.maghrib,
            isha: self.isha,
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let base = BaseSchedule::reference();
        Self {
            source: ScheduleSource::Static,
            fajr: base.fajr,
            dhuhr: base.dhuhr,
            asr: base.asr,
            maghrib: base.maghrib,
            isha: base.isha,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// One of [`CALC_METHODS`](crate::prayer_times::calculator::CALC_METHODS).
    #[serde(default = "default_calc_method")]
    pub calc_method: String,
    #[serde(default = "default_madhab")]
    pub madhab: String,
    #[serde(default = "default_timezone_offset")]
    pub timezone_offset: i32, // minutes from UTC
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            calc_method: default_calc_method(),
            madhab: default_madhab(),
            timezone_offset: default_timezone_offset(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_week_days")]
    pub week_days: u32,
    #[serde(default = "default_month_days")]
    pub month_days: u32,
    /// Days to add/subtract from the Hijri label for local moon sighting.
    #[serde(default)]
    pub hijri_offset: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            week_days: default_week_days(),
            month_days: default_month_days(),
            hijri_offset: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_profile_id")]
    pub profile_id: String,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile_id: default_profile_id(),
            schedule: ScheduleConfig::default(),
            location: LocationConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "miqat")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("miqat.db"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// The base schedule to feed the core for `date`.
    ///
    /// A calculated schedule that cannot be produced falls back to the
    /// static table with a warning.
    pub fn base_schedule(&self, date: NaiveDate) -> BaseSchedule {
        match self.schedule.source {
            ScheduleSource::Static => self.schedule.static_base(),
            ScheduleSource::Calculated => match self.calculated_base(date) {
                Ok(base) => base,
                Err(e) => {
                    log::warn!("{e:#}; falling back to the static schedule");
                    self.schedule.static_base()
                }
            },
        }
    }

    /// Adjusted times for `days` consecutive dates starting at `start`.
    ///
    /// A static source projects the one table forward. A calculated source
    /// derives each row from that date's own base times.
    pub fn schedule_days(&self, offsets: &PrayerOffsets, start: NaiveDate, days: u32) -> Vec<DaySchedule> {
        let fixed = self.schedule.static_base();
        if self.schedule.source == ScheduleSource::Static {
            return project_schedule(&fixed, offsets, start, days).collect();
        }

        let calc = match self.calculator() {
            Ok(calc) => calc,
            Err(e) => {
                log::warn!("{e:#}; falling back to the static schedule");
                return project_schedule(&fixed, offsets, start, days).collect();
            }
        };

        (0..days)
            .map(|i| {
                let date = shift_days(start, i32::try_from(i).unwrap_or(i32::MAX));
                let base = calc.base_for(date).unwrap_or_else(|e| {
                    log::warn!("{e}; using the static schedule for {date}");
                    fixed
                });
                DaySchedule {
                    date,
                    times: adjusted_day(&base, offsets, date, 0),
                }
            })
            .collect()
    }

    fn calculator(&self) -> Result<BaseScheduleCalculator> {
        let loc = &self.location;
        let calc = BaseScheduleCalculator::new(
            loc.latitude,
            loc.longitude,
            &loc.calc_method,
            &loc.madhab,
            loc.timezone_offset,
        )?;
        Ok(calc)
    }

    fn calculated_base(&self, date: NaiveDate) -> Result<BaseSchedule> {
        Ok(self.calculator()?.base_for(date)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.profile_id, "default");
        assert_eq!(config.display.week_days, 7);
        assert_eq!(config.schedule.static_base(), BaseSchedule::reference());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "profile_id = \"mum\"\n\n[schedule]\nfajr = \"04:45\"\n\n[display]\nmonth_days = 15\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.profile_id, "mum");
        assert_eq!(config.schedule.fajr.to_string(), "04:45");
        assert_eq!(config.schedule.isha.to_string(), "18:22");
        assert_eq!(config.display.month_days, 15);
        assert_eq!(config.display.tick_rate_ms, 1000);
    }

    #[test]
    fn bad_time_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[schedule]\nfajr = \"5 o'clock\"\n").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.schedule.source = ScheduleSource::Calculated;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.schedule.source, ScheduleSource::Calculated);
    }

    #[test]
    fn broken_location_falls_back_to_static() {
        let mut config = AppConfig::default();
        config.schedule.source = ScheduleSource::Calculated;
        config.location.calc_method = "Nope".to_string();
        let date = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
        assert_eq!(config.base_schedule(date), BaseSchedule::reference());

        let days = config.schedule_days(&PrayerOffsets::default(), date, 3);
        assert_eq!(days.len(), 3);
        assert!(days.iter().all(|d| d.times == adjusted_day(&BaseSchedule::reference(), &PrayerOffsets::default(), d.date, 0)));
    }

    #[test]
    fn static_days_match_the_projection() {
        let config = AppConfig::default();
        let offsets = PrayerOffsets { isha: 10, ..Default::default() };
        let date = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
        let days = config.schedule_days(&offsets, date, 7);
        let projected: Vec<_> = project_schedule(&BaseSchedule::reference(), &offsets, date, 7).collect();
        assert_eq!(days, projected);
    }

    #[test]
    fn calculated_days_follow_their_own_date() {
        let mut config = AppConfig::default();
        config.schedule.source = ScheduleSource::Calculated;
        let offsets = PrayerOffsets { maghrib: 5, ..Default::default() };
        let start = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();

        let days = config.schedule_days(&offsets, start, 30);
        assert_eq!(days.len(), 30);
        assert_eq!(days[29].date, NaiveDate::from_ymd_opt(2026, 2, 15).unwrap());

        // January sunsets get later day by day
        let first = days[0].times.maghrib.time();
        let last = days[29].times.maghrib.time();
        assert!(last > first, "{first} vs {last}");

        for day in &days {
            let base = config.base_schedule(day.date);
            assert_eq!(day.times, adjusted_day(&base, &offsets, day.date, 0));
        }
    }
}
