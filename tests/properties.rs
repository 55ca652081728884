use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use miqat::prayer_times::adjusted_day;
use miqat::{BaseSchedule, PrayerKey, PrayerOffsets, TimeOfDay, adjusted_time, project_schedule, resolve_next};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()
}

fn instant(secs: i64) -> NaiveDateTime {
    anchor().and_hms_opt(0, 0, 0).unwrap() + Duration::seconds(secs)
}

// Small enough that the reference schedule stays in chronological order.
fn offsets() -> impl Strategy<Value = PrayerOffsets> {
    prop::array::uniform5(-40i32..=40).prop_map(|[fajr, dhuhr, asr, maghrib, isha]| PrayerOffsets {
        fajr,
        dhuhr,
        asr,
        maghrib,
        isha,
    })
}

proptest! {
    /// Minutes past 59 carry into hours, and hours past 23 into the next day.
    #[test]
    fn offsets_normalize_like_wall_clock(h in 0u32..24, m in 0u32..60, offset in -3000i32..3000, day in -400i32..400) {
        let base = TimeOfDay::new(h, m).unwrap();
        let got = adjusted_time(base, offset, day, anchor());
        let expected = anchor().and_hms_opt(h, m, 0).unwrap()
            + Duration::days(i64::from(day))
            + Duration::minutes(i64::from(offset));
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn zero_offset_is_identity(h in 0u32..24, m in 0u32..60) {
        let base = TimeOfDay::new(h, m).unwrap();
        prop_assert_eq!(adjusted_time(base, 0, 0, anchor()), anchor().and_hms_opt(h, m, 0).unwrap());
    }

    #[test]
    fn adjusted_day_is_chronological(offsets in offsets(), shift in -400i32..400) {
        let times = adjusted_day(&BaseSchedule::reference(), &offsets, anchor(), shift);
        let moments: Vec<_> = times.iter().map(|(_, at)| *at).collect();
        prop_assert!(moments.windows(2).all(|w| w[0] < w[1]));
    }

    /// The answer is strictly in the future and nothing of today sits between.
    #[test]
    fn next_is_first_strictly_after_now(secs in 0i64..2 * 86_400, offsets in offsets()) {
        let base = BaseSchedule::reference();
        let now = instant(secs);
        let next = resolve_next(&base, &offsets, now);

        prop_assert!(next.when > now);
        prop_assert_eq!(next.remaining.total_seconds(), (next.when - now).num_seconds());
        for (_, at) in adjusted_day(&base, &offsets, now.date(), 0).iter() {
            prop_assert!(!(*at > now && *at < next.when));
        }
    }

    #[test]
    fn resolving_is_idempotent(secs in 0i64..86_400, offsets in offsets()) {
        let base = BaseSchedule::reference();
        let now = instant(secs);
        prop_assert_eq!(resolve_next(&base, &offsets, now), resolve_next(&base, &offsets, now));
    }

    /// While the target is unchanged, k seconds of wall time remove exactly k seconds.
    #[test]
    fn countdown_tracks_elapsed_time(secs in 0i64..86_400, step in 1i64..600, offsets in offsets()) {
        let base = BaseSchedule::reference();
        let earlier = resolve_next(&base, &offsets, instant(secs));
        let later = resolve_next(&base, &offsets, instant(secs + step));
        if earlier.when == later.when {
            prop_assert_eq!(earlier.remaining.total_seconds() - later.remaining.total_seconds(), step);
        } else {
            prop_assert!(later.when > earlier.when);
        }
    }

    /// After isha the next prayer is always tomorrow's fajr.
    #[test]
    fn rolls_over_after_isha(after_isha in 0i64..(5 * 3600 + 38 * 60), offsets in offsets()) {
        let base = BaseSchedule::reference();
        let isha = adjusted_time(base.isha, offsets.isha, 0, anchor());
        let now = isha + Duration::seconds(after_isha);
        prop_assume!(now.date() == anchor());

        let next = resolve_next(&base, &offsets, now);
        prop_assert_eq!(next.key, PrayerKey::Fajr);
        prop_assert!(next.rolled_over);
        prop_assert_eq!(next.when, adjusted_time(base.fajr, offsets.fajr, 1, anchor()));
    }

    #[test]
    fn projection_has_n_consecutive_days(n in 0u32..120, start_shift in -365i64..365, offsets in offsets()) {
        let base = BaseSchedule::reference();
        let start = anchor() + Duration::days(start_shift);
        let days: Vec<_> = project_schedule(&base, &offsets, start, n).collect();
        prop_assert_eq!(days.len(), n as usize);
        for (i, day) in days.iter().enumerate() {
            let date = start + Duration::days(i as i64);
            prop_assert_eq!(day.date, date);
            prop_assert_eq!(&day.times, &adjusted_day(&base, &offsets, date, 0));
        }
    }
}
