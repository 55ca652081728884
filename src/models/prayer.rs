use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;
use crate::models::Language;

/// The five daily prayers, declared in their chronological order within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerKey {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerKey {
    pub const ALL: [PrayerKey; 5] = [
        PrayerKey::Fajr,
        PrayerKey::Dhuhr,
        PrayerKey::Asr,
        PrayerKey::Maghrib,
        PrayerKey::Isha,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PrayerKey::Fajr => "fajr",
            PrayerKey::Dhuhr => "dhuhr",
            PrayerKey::Asr => "asr",
            PrayerKey::Maghrib => "maghrib",
            PrayerKey::Isha => "isha",
        }
    }

    pub fn display_name(self, lang: Language) -> &'static str {
        match (lang, self) {
            (Language::En, PrayerKey::Fajr) => "Fajr",
            (Language::En, PrayerKey::Dhuhr) => "Dhuhr",
            (Language::En, PrayerKey::Asr) => "Asr",
            (Language::En, PrayerKey::Maghrib) => "Maghrib",
            (Language::En, PrayerKey::Isha) => "Isha",
            (Language::Ar, PrayerKey::Fajr) => "الفجر",
            (Language::Ar, PrayerKey::Dhuhr) => "الظهر",
            (Language::Ar, PrayerKey::Asr) => "العصر",
            (Language::Ar, PrayerKey::Maghrib) => "المغرب",
            (Language::Ar, PrayerKey::Isha) => "العشاء",
        }
    }

    /// Position in the day, 0 for fajr through 4 for isha.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for PrayerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name(Language::En))
    }
}

impl FromStr for PrayerKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fajr" | "subuh" => Ok(PrayerKey::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerKey::Dhuhr),
            "asr" => Ok(PrayerKey::Asr),
            "maghrib" => Ok(PrayerKey::Maghrib),
            "isha" => Ok(PrayerKey::Isha),
            _ => Err(Error::UnknownPrayer(s.to_string())),
        }
    }
}

/// Where a prayer of today's board stands relative to the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerStatus {
    Passed,
    Next,
    Upcoming,
}

impl PrayerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PrayerStatus::Passed => "passed",
            PrayerStatus::Next => "next",
            PrayerStatus::Upcoming => "upcoming",
        }
    }
}
