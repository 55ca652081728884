use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;
use crate::models::{PerPrayer, PrayerOffsets};

pub const DEFAULT_SHEIKH: &str = "Mishary Alafasy";
pub const DEFAULT_REMINDER_MINUTES: u32 = 10;
/// Longest reminder lead; stored values above it act as this.
pub const MAX_REMINDER_MINUTES: u32 = 24 * 60;

/// Reciters the azan can be played in, by display label.
pub const SHEIKHS: &[&str] = &[
    "Mishary Alafasy",
    "Abdul Basit Abdul Samad",
    "Al-Minshawi",
    "Saud Al-Shuraim",
    "Abdul Rahman Al-Sudais",
];

/// The listed spelling of a reciter, matched case-insensitively.
pub fn known_sheikh(name: &str) -> Option<&'static str> {
    let name = name.trim();
    SHEIKHS.iter().copied().find(|s| s.eq_ignore_ascii_case(name))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ar" | "arabic" => Ok(Language::Ar),
            "en" | "english" => Ok(Language::En),
            _ => Err(Error::UnknownLanguage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AzanType {
    #[default]
    Standard,
    Takbeer,
    VoiceOnly,
    Silent,
}

/// Per-prayer alert preferences. `sheikh` is a display label only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerConfig {
    #[serde(default = "default_sheikh")]
    pub sheikh: String,
    #[serde(default)]
    pub azan_type: AzanType,
    /// Minutes before the prayer to raise a reminder; 0 disables it.
    /// Capped at [`MAX_REMINDER_MINUTES`].
    #[serde(default = "default_reminder")]
    pub reminder_before: u32,
    #[serde(default = "default_true")]
    pub is_enabled: bool,
}

fn default_sheikh() -> String {
    DEFAULT_SHEIKH.to_string()
}
fn default_reminder() -> u32 {
    DEFAULT_REMINDER_MINUTES
}
fn default_true() -> bool {
    true
}
fn default_name() -> String {
    "Friend".to_string()
}

impl Default for PrayerConfig {
    fn default() -> Self {
        Self {
            sheikh: default_sheikh(),
            azan_type: AzanType::default(),
            reminder_before: default_reminder(),
            is_enabled: true,
        }
    }
}

pub type PrayerConfigs = PerPrayer<PrayerConfig>;

/// The persisted user profile. Keys are camelCase so stored profiles keep
/// the same JSON shape across clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub use_12_hour_format: bool,
    #[serde(default)]
    pub prayer_offsets: PrayerOffsets,
    #[serde(default)]
    pub prayer_configs: PrayerConfigs,
}

impl UserProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: default_name(),
            language: Language::default(),
            use_12_hour_format: false,
            prayer_offsets: PrayerOffsets::default(),
            prayer_configs: PrayerConfigs::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrayerKey;

    #[test]
    fn profile_uses_camel_case_keys() {
        let mut profile = UserProfile::new("u1");
        profile.use_12_hour_format = true;
        profile.prayer_offsets.isha = 10;

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["use12HourFormat"], true);
        assert_eq!(json["prayerOffsets"]["isha"], 10);
        assert_eq!(json["prayerConfigs"]["fajr"]["reminderBefore"], 10);
        assert_eq!(json["language"], "ar");
    }

    #[test]
    fn sparse_profile_fills_defaults() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id":"x","prayerOffsets":{"fajr":5,"dhuhr":0,"asr":0,"maghrib":0,"isha":0}}"#)
                .unwrap();
        assert_eq!(profile.name, "Friend");
        assert!(!profile.use_12_hour_format);
        assert_eq!(*profile.prayer_offsets.get(PrayerKey::Fajr), 5);
        assert_eq!(profile.prayer_configs.isha.sheikh, DEFAULT_SHEIKH);
        assert!(profile.prayer_configs.asr.is_enabled);
    }

    #[test]
    fn known_sheikhs_ignore_case_and_padding() {
        assert_eq!(known_sheikh("  al-minshawi "), Some("Al-Minshawi"));
        assert_eq!(known_sheikh(DEFAULT_SHEIKH), Some(DEFAULT_SHEIKH));
        assert_eq!(known_sheikh("Someone Else"), None);
    }

    #[test]
    fn azan_type_uses_snake_case() {
        let t: AzanType = serde_json::from_str(r#""voice_only""#).unwrap();
        assert_eq!(t, AzanType::VoiceOnly);
    }
}
