use chrono::{Duration, NaiveDateTime};

use crate::models::{BaseSchedule, PrayerKey, PrayerOffsets, PrayerStatus};
use crate::prayer_times::adjust::{adjusted_day, adjusted_time};

/// Time left until a prayer, floored to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Countdown {
    total_seconds: i64,
}

impl Countdown {
    pub fn from_duration(d: Duration) -> Self {
        Self {
            total_seconds: d.num_seconds().max(0),
        }
    }

    pub fn total_seconds(self) -> i64 {
        self.total_seconds
    }

    pub fn hours(self) -> i64 {
        self.total_seconds / 3600
    }

    pub fn minutes(self) -> i64 {
        (self.total_seconds % 3600) / 60
    }

    pub fn seconds(self) -> i64 {
        self.total_seconds % 60
    }

    /// `HH:MM:SS`, or `HH:MM` when seconds are not shown. Hours do not wrap.
    pub fn clock(self, with_seconds: bool) -> String {
        if with_seconds {
            format!("{:02}:{:02}:{:02}", self.hours(), self.minutes(), self.seconds())
        } else {
            format!("{:02}:{:02}", self.hours(), self.minutes())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayer {
    pub key: PrayerKey,
    pub when: NaiveDateTime,
    pub remaining: Countdown,
    /// Every prayer of today has passed and this is tomorrow's fajr.
    pub rolled_over: bool,
}

/// The soonest adjusted prayer strictly after `now`.
///
/// A prayer whose moment equals `now` counts as passed. Once today's isha
/// has passed the answer is tomorrow's fajr. Stateless: safe to call on
/// every clock tick.
pub fn resolve_next(base: &BaseSchedule, offsets: &PrayerOffsets, now: NaiveDateTime) -> NextPrayer {
    let today = adjusted_day(base, offsets, now.date(), 0);

    let next = today
        .iter()
        .find(|(_, when)| **when > now)
        .map(|(key, when)| (key, *when, false));

    let (key, when, rolled_over) = next.unwrap_or_else(|| {
        let fajr = adjusted_time(base.fajr, offsets.fajr, 1, now.date());
        (PrayerKey::Fajr, fajr, true)
    });

    let remaining = Countdown::from_duration(when.signed_duration_since(now));
    log::trace!("next prayer {} at {} ({}s)", key, when, remaining.total_seconds());

    NextPrayer {
        key,
        when,
        remaining,
        rolled_over,
    }
}

/// One row of today's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerSlot {
    pub key: PrayerKey,
    pub at: NaiveDateTime,
    pub status: PrayerStatus,
}

/// Today's five prayers tagged with their status, derived from [`resolve_next`].
pub fn today_board(base: &BaseSchedule, offsets: &PrayerOffsets, now: NaiveDateTime) -> Vec<PrayerSlot> {
    let next = resolve_next(base, offsets, now);
    adjusted_day(base, offsets, now.date(), 0)
        .iter()
        .map(|(key, at)| {
            let status = if !next.rolled_over && key == next.key {
                PrayerStatus::Next
            } else if *at > now {
                PrayerStatus::Upcoming
            } else {
                PrayerStatus::Passed
            };
            PrayerSlot { key, at: *at, status }
        })
        .collect()
}
