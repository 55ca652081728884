use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{BaseSchedule, PerPrayer, PrayerOffsets};
use crate::prayer_times::adjust::{adjusted_day, shift_days};

/// One day of a weekly or monthly table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub times: PerPrayer<NaiveDateTime>,
}

/// Lazily computed run of consecutive days. Clone it to start over.
#[derive(Debug, Clone)]
pub struct Projection<'a> {
    base: &'a BaseSchedule,
    offsets: &'a PrayerOffsets,
    start: NaiveDate,
    next: u32,
    len: u32,
}

/// `days` entries starting at `start`, each using the current offsets.
///
/// Nothing is cached: offsets may change between renders and every entry is
/// cheap to recompute.
pub fn project_schedule<'a>(
    base: &'a BaseSchedule,
    offsets: &'a PrayerOffsets,
    start: NaiveDate,
    days: u32,
) -> Projection<'a> {
    Projection {
        base,
        offsets,
        start,
        next: 0,
        len: days,
    }
}

impl Iterator for Projection<'_> {
    type Item = DaySchedule;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let day_offset = i32::try_from(self.next).unwrap_or(i32::MAX);
        self.next += 1;
        Some(DaySchedule {
            date: shift_days(self.start, day_offset),
            times: adjusted_day(self.base, self.offsets, self.start, day_offset),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.len - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Projection<'_> {}
