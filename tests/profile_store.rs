use chrono::NaiveDate;

use miqat::db::SqliteProfileStore;
use miqat::profile::{MAX_OFFSET_MINUTES, ProfileSettings, ProfileStore, load_or_create};
use miqat::{BaseSchedule, Language, PrayerKey, resolve_next};

#[test]
fn settings_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("miqat.db");

    {
        let store = SqliteProfileStore::open(&path, "default").unwrap();
        let profile = load_or_create(&store, "default").unwrap();
        let settings = ProfileSettings::new(store);
        let profile = settings.set_offset(&profile, PrayerKey::Fajr, -75).unwrap();
        let profile = settings.set_use_12_hour(&profile, true).unwrap();
        settings.set_language(&profile, Language::En).unwrap();
    }

    let store = SqliteProfileStore::open(&path, "default").unwrap();
    let profile = store.load().unwrap().unwrap();
    assert_eq!(profile.prayer_offsets.fajr, -75);
    assert!(profile.use_12_hour_format);
    assert_eq!(profile.language, Language::En);
}

#[test]
fn two_profiles_share_a_file_without_interfering() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("miqat.db");

    let home = SqliteProfileStore::open(&path, "home").unwrap();
    let travel = SqliteProfileStore::open(&path, "travel").unwrap();
    let home_settings = ProfileSettings::new(&home);
    let travel_settings = ProfileSettings::new(&travel);

    let home_profile = load_or_create(&home, "home").unwrap();
    let travel_profile = load_or_create(&travel, "travel").unwrap();
    home_settings.set_offset(&home_profile, PrayerKey::Isha, 10).unwrap();
    travel_settings.set_offset(&travel_profile, PrayerKey::Isha, -10).unwrap();

    let home_profile = home.load().unwrap().unwrap();
    let travel_profile = travel.load().unwrap().unwrap();
    assert_eq!(home_profile.prayer_offsets.isha, 10);
    assert_eq!(travel_profile.prayer_offsets.isha, -10);

    // Same instant, different answers
    let now = NaiveDate::from_ymd_opt(2026, 1, 17)
        .unwrap()
        .and_hms_opt(18, 25, 0)
        .unwrap();
    let base = BaseSchedule::reference();
    assert_eq!(resolve_next(&base, &home_profile.prayer_offsets, now).key, PrayerKey::Isha);
    assert_eq!(resolve_next(&base, &travel_profile.prayer_offsets, now).key, PrayerKey::Fajr);
}

#[test]
fn offsets_are_clamped_before_saving() {
    let store = SqliteProfileStore::open_in_memory("default").unwrap();
    let profile = load_or_create(&store, "default").unwrap();
    let settings = ProfileSettings::new(store);

    let profile = settings.set_offset(&profile, PrayerKey::Asr, 5_000).unwrap();
    assert_eq!(profile.prayer_offsets.asr, MAX_OFFSET_MINUTES);
    let profile = settings.adjust_offset(&profile, PrayerKey::Asr, i32::MAX).unwrap();
    assert_eq!(profile.prayer_offsets.asr, MAX_OFFSET_MINUTES);

    let profile = settings.reset_offsets(&profile).unwrap();
    assert!(profile.prayer_offsets.is_zero());
    assert_eq!(settings.store().load().unwrap(), Some(profile));
}

#[test]
fn reminder_preferences_persist() {
    let store = SqliteProfileStore::open_in_memory("default").unwrap();
    let profile = load_or_create(&store, "default").unwrap();
    let settings = ProfileSettings::new(store);

    let profile = settings.set_reminder(&profile, PrayerKey::Maghrib, 0, false).unwrap();
    settings.set_sheikh(&profile, PrayerKey::Maghrib, "  Abdul Basit ").unwrap();

    let saved = settings.store().load().unwrap().unwrap();
    let maghrib = saved.prayer_configs.get(PrayerKey::Maghrib);
    assert_eq!(maghrib.reminder_before, 0);
    assert!(!maghrib.is_enabled);
    assert_eq!(maghrib.sheikh, "Abdul Basit");
}
