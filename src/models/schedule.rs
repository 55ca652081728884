use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::Error;
use crate::models::PrayerKey;

/// A wall-clock hour and minute, written as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(TimeOfDay)
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    pub fn as_naive(self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        // seconds are dropped, the schedule works in whole minutes
        TimeOfDay(t.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(t))
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .map(TimeOfDay::from)
            .map_err(|_| Error::InvalidTime(s.to_string()))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One value per prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerPrayer<T> {
    pub fajr: T,
    pub dhuhr: T,
    pub asr: T,
    pub maghrib: T,
    pub isha: T,
}

impl<T> PerPrayer<T> {
    pub fn from_fn(mut f: impl FnMut(PrayerKey) -> T) -> Self {
        PerPrayer {
            fajr: f(PrayerKey::Fajr),
            dhuhr: f(PrayerKey::Dhuhr),
            asr: f(PrayerKey::Asr),
            maghrib: f(PrayerKey::Maghrib),
            isha: f(PrayerKey::Isha),
        }
    }

    pub fn get(&self, key: PrayerKey) -> &T {
        match key {
            PrayerKey::Fajr => &self.fajr,
            PrayerKey::Dhuhr => &self.dhuhr,
            PrayerKey::Asr => &self.asr,
            PrayerKey::Maghrib => &self.maghrib,
            PrayerKey::Isha => &self.isha,
        }
    }

    pub fn get_mut(&mut self, key: PrayerKey) -> &mut T {
        match key {
            PrayerKey::Fajr => &mut self.fajr,
            PrayerKey::Dhuhr => &mut self.dhuhr,
            PrayerKey::Asr => &mut self.asr,
            PrayerKey::Maghrib => &mut self.maghrib,
            PrayerKey::Isha => &mut self.isha,
        }
    }

    /// Entries in chronological order, fajr first.
    pub fn iter(&self) -> impl Iterator<Item = (PrayerKey, &T)> + '_ {
        PrayerKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(PrayerKey, &T) -> U) -> PerPrayer<U> {
        PerPrayer::from_fn(|k| f(k, self.get(k)))
    }
}

/// Unadjusted time of each prayer, supplied by configuration.
pub type BaseSchedule = PerPrayer<TimeOfDay>;

/// Minutes added to each prayer's base time, positive or negative.
pub type PrayerOffsets = PerPrayer<i32>;

impl PerPrayer<TimeOfDay> {
    /// The fixed reference table shipped as the default schedule.
    pub fn reference() -> Self {
        let hm = |h, m| TimeOfDay::new(h, m).unwrap_or(TimeOfDay(NaiveTime::default()));
        PerPrayer {
            fajr: hm(5, 12),
            dhuhr: hm(11, 58),
            asr: hm(14, 40),
            maghrib: hm(16, 55),
            isha: hm(18, 22),
        }
    }
}

impl PerPrayer<i32> {
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, m)| *m == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day_round_trips_through_text() {
        let t: TimeOfDay = "05:12".parse().unwrap();
        assert_eq!((t.hour(), t.minute()), (5, 12));
        assert_eq!(t.to_string(), "05:12");

        let with_secs: TimeOfDay = "18:22:41".parse().unwrap();
        assert_eq!(with_secs.to_string(), "18:22");

        assert!("25:00".parse::<TimeOfDay>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn reference_schedule_matches_table() {
        let base = BaseSchedule::reference();
        let rendered: Vec<String> = base.iter().map(|(_, t)| t.to_string()).collect();
        assert_eq!(rendered, ["05:12", "11:58", "14:40", "16:55", "18:22"]);
    }

    #[test]
    fn offsets_default_to_zero_and_deserialize_partially() {
        assert!(PrayerOffsets::default().is_zero());

        let json = r#"{"fajr":-75,"dhuhr":0,"asr":3,"maghrib":0,"isha":10}"#;
        let offsets: PrayerOffsets = serde_json::from_str(json).unwrap();
        assert_eq!(*offsets.get(PrayerKey::Fajr), -75);
        assert_eq!(*offsets.get(PrayerKey::Isha), 10);
    }

    #[test]
    fn base_schedule_parses_from_hh_mm_strings() {
        let json = r#"{"fajr":"04:50","dhuhr":"12:01","asr":"15:30","maghrib":"18:10","isha":"19:40"}"#;
        let base: BaseSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(base.maghrib.to_string(), "18:10");
        assert_eq!(serde_json::to_string(&base).unwrap(), json);
    }
}
