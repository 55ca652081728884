pub mod prayer;
pub mod profile;
pub mod schedule;

pub use prayer::{PrayerKey, PrayerStatus};
pub use profile::{
    AzanType, Language, MAX_REMINDER_MINUTES, PrayerConfig, PrayerConfigs, SHEIKHS, UserProfile,
    known_sheikh,
};
pub use schedule::{BaseSchedule, PerPrayer, PrayerOffsets, TimeOfDay};
