use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::{BaseSchedule, PerPrayer, PrayerOffsets, TimeOfDay};

/// The moment a prayer falls on `anchor + day_offset` once its offset is applied.
///
/// Offsets use wall-clock arithmetic: overflowing minutes carry into the
/// hour, and past midnight into the neighbouring day. No timezone
/// conversion happens; the result is local wall-clock time.
pub fn adjusted_time(
    base: TimeOfDay,
    offset_minutes: i32,
    day_offset: i32,
    anchor: NaiveDate,
) -> NaiveDateTime {
    let day = shift_days(anchor, day_offset);
    let start = day.and_time(base.as_naive());
    start
        .checked_add_signed(Duration::minutes(i64::from(offset_minutes)))
        .unwrap_or(if offset_minutes < 0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
}

/// All five adjusted moments for a single day.
pub fn adjusted_day(
    base: &BaseSchedule,
    offsets: &PrayerOffsets,
    anchor: NaiveDate,
    day_offset: i32,
) -> PerPrayer<NaiveDateTime> {
    base.map(|key, time| adjusted_time(*time, *offsets.get(key), day_offset, anchor))
}

/// `date + days`, saturating at the ends of the calendar.
pub(crate) fn shift_days(date: NaiveDate, days: i32) -> NaiveDate {
    date.checked_add_signed(Duration::days(i64::from(days)))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}
