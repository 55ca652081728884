//! Offline prayer-time scheduling.
//!
//! The core takes an injected [`BaseSchedule`] and the user's per-prayer
//! [`PrayerOffsets`] and answers three questions, all as pure functions:
//!
//! * when does a prayer fall on a given day ([`prayer_times::adjusted_time`]),
//! * which prayer is next and how long until it ([`prayer_times::resolve_next`]),
//! * what does the next week or month look like ([`prayer_times::project_schedule`]).
//!
//! Everything stateful (the profile store, configuration, the clock tick)
//! lives at the edges and is passed in explicitly.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod prayer_times;
pub mod profile;
pub mod utils;

pub use error::{Error, Result};
pub use models::{
    BaseSchedule, Language, PerPrayer, PrayerConfig, PrayerKey, PrayerOffsets, PrayerStatus,
    TimeOfDay, UserProfile,
};
pub use prayer_times::{
    Clock, Countdown, DaySchedule, FixedClock, NextPrayer, SystemClock, adjusted_time,
    project_schedule, resolve_next,
};
