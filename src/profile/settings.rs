use crate::error::Result;
use crate::models::{
    Language, MAX_REMINDER_MINUTES, PrayerKey, PrayerOffsets, UserProfile, known_sheikh,
};
use crate::profile::ProfileStore;

/// Largest offset accepted through settings, in either direction.
pub const MAX_OFFSET_MINUTES: i32 = 12 * 60;

/// Applies user changes to a profile and persists them.
///
/// Every method takes the current profile, saves a modified copy and
/// hands it back; the caller swaps it in before the next tick.
pub struct ProfileSettings<S> {
    store: S,
}

impl<S: ProfileStore> ProfileSettings<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn apply(&self, profile: &UserProfile, change: impl FnOnce(&mut UserProfile)) -> Result<UserProfile> {
        let mut updated = profile.clone();
        change(&mut updated);
        self.store.save(&updated)?;
        Ok(updated)
    }

    pub fn set_offset(&self, profile: &UserProfile, key: PrayerKey, minutes: i32) -> Result<UserProfile> {
        let minutes = minutes.clamp(-MAX_OFFSET_MINUTES, MAX_OFFSET_MINUTES);
        log::info!("{} offset set to {} min", key.as_str(), minutes);
        self.apply(profile, |p| *p.prayer_offsets.get_mut(key) = minutes)
    }

    pub fn adjust_offset(&self, profile: &UserProfile, key: PrayerKey, delta: i32) -> Result<UserProfile> {
        let current = *profile.prayer_offsets.get(key);
        self.set_offset(profile, key, current.saturating_add(delta))
    }

    pub fn reset_offsets(&self, profile: &UserProfile) -> Result<UserProfile> {
        log::info!("offsets reset");
        self.apply(profile, |p| p.prayer_offsets = PrayerOffsets::default())
    }

    pub fn set_use_12_hour(&self, profile: &UserProfile, enabled: bool) -> Result<UserProfile> {
        self.apply(profile, |p| p.use_12_hour_format = enabled)
    }

    pub fn set_language(&self, profile: &UserProfile, language: Language) -> Result<UserProfile> {
        self.apply(profile, |p| p.language = language)
    }

    pub fn set_sheikh(&self, profile: &UserProfile, key: PrayerKey, sheikh: &str) -> Result<UserProfile> {
        let label = known_sheikh(sheikh).map_or_else(|| sheikh.trim().to_string(), str::to_string);
        log::info!("{} reciter set to {}", key.as_str(), label);
        self.apply(profile, |p| p.prayer_configs.get_mut(key).sheikh = label)
    }

    pub fn set_reminder(
        &self,
        profile: &UserProfile,
        key: PrayerKey,
        minutes_before: u32,
        enabled: bool,
    ) -> Result<UserProfile> {
        let minutes_before = minutes_before.min(MAX_REMINDER_MINUTES);
        self.apply(profile, |p| {
            let config = p.prayer_configs.get_mut(key);
            config.reminder_before = minutes_before;
            config.is_enabled = enabled;
        })
    }
}
