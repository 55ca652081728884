use chrono::{Datelike, NaiveDate};
use hijri_date::HijriDate;

use crate::models::Language;
use crate::prayer_times::adjust::shift_days;

/// Islamic month names in English (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

const HIJRI_MONTH_NAMES_AR: &[&str] = &[
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

fn hijri_month_name(month: usize, lang: Language) -> &'static str {
    let names = match lang {
        Language::En => HIJRI_MONTH_NAMES,
        Language::Ar => HIJRI_MONTH_NAMES_AR,
    };
    month
        .checked_sub(1)
        .and_then(|i| names.get(i))
        .copied()
        .unwrap_or("?")
}

/// Hijri label for a Gregorian date, shifted by `offset_days` for local
/// moon sighting. `None` when the date is outside the converter's range.
pub fn hijri_label(date: NaiveDate, offset_days: i32, lang: Language) -> Option<String> {
    let adjusted = shift_days(date, offset_days);
    let year = usize::try_from(adjusted.year()).ok()?;
    let hd = HijriDate::from_gr(year, adjusted.month() as usize, adjusted.day() as usize).ok()?;
    let suffix = match lang {
        Language::Ar => " هـ",
        Language::En => " AH",
    };
    Some(format!(
        "{} {} {}{}",
        hd.day(),
        hijri_month_name(hd.month(), lang),
        hd.year(),
        suffix
    ))
}
