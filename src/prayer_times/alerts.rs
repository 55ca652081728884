use chrono::{Duration, NaiveDateTime};

use crate::models::{
    AzanType, BaseSchedule, MAX_REMINDER_MINUTES, PrayerConfigs, PrayerKey, PrayerOffsets,
};
use crate::prayer_times::adjust::{adjusted_day, shift_days};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Heads-up raised `minutes_before` the prayer.
    Reminder { minutes_before: u32 },
    /// The prayer time itself.
    Azan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub key: PrayerKey,
    pub kind: AlertKind,
    /// When the alert fires.
    pub at: NaiveDateTime,
    /// The adjusted moment of the prayer it belongs to.
    pub prayer_at: NaiveDateTime,
}

/// Longest window looked at; a stalled tick loop does not replay older alerts.
const MAX_WINDOW_DAYS: i64 = 2;

/// Alerts of enabled prayers firing in `(after, until]`, oldest first.
pub fn alerts_between(
    base: &BaseSchedule,
    offsets: &PrayerOffsets,
    configs: &PrayerConfigs,
    after: NaiveDateTime,
    until: NaiveDateTime,
) -> Vec<Alert> {
    if until <= after {
        return Vec::new();
    }
    let after = until
        .checked_sub_signed(Duration::days(MAX_WINDOW_DAYS))
        .map_or(after, |floor| after.max(floor));
    let in_window = |t: NaiveDateTime| t > after && t <= until;

    // A day of slack before for offsets that cross midnight, and two after
    // so reminders up to a day ahead of their prayer are still seen.
    let first = shift_days(after.date(), -1);
    let span = until.date().signed_duration_since(first).num_days() + 2;

    let mut alerts = Vec::new();
    for day_offset in 0..=i32::try_from(span).unwrap_or(0) {
        let times = adjusted_day(base, offsets, first, day_offset);
        for (key, prayer_at) in times.iter() {
            let config = configs.get(key);
            if !config.is_enabled {
                continue;
            }
            let lead = config.reminder_before.min(MAX_REMINDER_MINUTES);
            if lead > 0 {
                let reminder_at = prayer_at.checked_sub_signed(Duration::minutes(i64::from(lead)));
                if let Some(at) = reminder_at.filter(|t| in_window(*t)) {
                    alerts.push(Alert {
                        key,
                        kind: AlertKind::Reminder { minutes_before: lead },
                        at,
                        prayer_at: *prayer_at,
                    });
                }
            }
            if config.azan_type != AzanType::Silent && in_window(*prayer_at) {
                alerts.push(Alert {
                    key,
                    kind: AlertKind::Azan,
                    at: *prayer_at,
                    prayer_at: *prayer_at,
                });
            }
        }
    }

    alerts.sort_by_key(|a| (a.at, a.key));
    alerts.dedup();
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn tick_over_prayer_raises_azan() {
        let alerts = alerts_between(
            &BaseSchedule::reference(),
            &PrayerOffsets::default(),
            &PrayerConfigs::default(),
            at(17, 5, 11),
            at(17, 5, 12),
        );
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].key, PrayerKey::Fajr);
        assert_eq!(alerts[0].kind, AlertKind::Azan);
    }

    #[test]
    fn reminder_fires_before_prayer() {
        let alerts = alerts_between(
            &BaseSchedule::reference(),
            &PrayerOffsets::default(),
            &PrayerConfigs::default(),
            at(17, 11, 47),
            at(17, 11, 48),
        );
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::Reminder { minutes_before: 10 });
        assert_eq!(alerts[0].prayer_at, at(17, 11, 58));
    }

    #[test]
    fn disabled_and_silent_prayers_are_skipped() {
        let mut configs = PrayerConfigs::default();
        configs.fajr.is_enabled = false;
        configs.dhuhr.azan_type = AzanType::Silent;
        configs.dhuhr.reminder_before = 0;

        let alerts = alerts_between(
            &BaseSchedule::reference(),
            &PrayerOffsets::default(),
            &configs,
            at(17, 0, 0),
            at(17, 12, 30),
        );
        assert!(alerts.is_empty());
    }

    #[test]
    fn window_spanning_midnight_sees_tomorrows_fajr() {
        let mut offsets = PrayerOffsets::default();
        offsets.isha = 10;
        let alerts = alerts_between(
            &BaseSchedule::reference(),
            &offsets,
            &PrayerConfigs::default(),
            at(17, 18, 30),
            at(18, 5, 30),
        );
        let kinds: Vec<_> = alerts.iter().map(|a| (a.key, a.kind)).collect();
        assert_eq!(
            kinds,
            [
                (PrayerKey::Isha, AlertKind::Azan),
                (PrayerKey::Fajr, AlertKind::Reminder { minutes_before: 10 }),
                (PrayerKey::Fajr, AlertKind::Azan),
            ]
        );
        assert_eq!(alerts[2].at, at(18, 5, 12));
    }

    #[test]
    fn empty_or_reversed_window_is_empty() {
        let base = BaseSchedule::reference();
        let offsets = PrayerOffsets::default();
        let configs = PrayerConfigs::default();
        assert!(alerts_between(&base, &offsets, &configs, at(17, 5, 12), at(17, 5, 12)).is_empty());
        assert!(alerts_between(&base, &offsets, &configs, at(17, 6, 0), at(17, 5, 0)).is_empty());
    }

    #[test]
    fn day_ahead_reminder_is_raised() {
        let mut configs = PrayerConfigs::default();
        configs.fajr.reminder_before = MAX_REMINDER_MINUTES;
        let alerts = alerts_between(
            &BaseSchedule::reference(),
            &PrayerOffsets::default(),
            &configs,
            at(17, 5, 11),
            at(17, 5, 12),
        );
        let reminder = alerts
            .iter()
            .find(|a| matches!(a.kind, AlertKind::Reminder { .. }))
            .expect("reminder for tomorrow's fajr");
        assert_eq!(reminder.at, at(17, 5, 12));
        assert_eq!(reminder.prayer_at, at(18, 5, 12));
    }

    #[test]
    fn oversized_reminder_acts_as_the_cap() {
        let mut configs = PrayerConfigs::default();
        configs.asr.reminder_before = u32::MAX;
        let alerts = alerts_between(
            &BaseSchedule::reference(),
            &PrayerOffsets::default(),
            &configs,
            at(17, 14, 39),
            at(17, 14, 40),
        );
        assert!(alerts.contains(&Alert {
            key: PrayerKey::Asr,
            kind: AlertKind::Reminder {
                minutes_before: MAX_REMINDER_MINUTES,
            },
            at: at(17, 14, 40),
            prayer_at: at(18, 14, 40),
        }));
    }
}
