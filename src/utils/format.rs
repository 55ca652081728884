use chrono::{NaiveDateTime, Timelike};

use crate::models::Language;

/// The 12-hour marker for morning / afternoon.
fn meridiem(lang: Language, pm: bool) -> &'static str {
    match (lang, pm) {
        (Language::Ar, false) => "ص",
        (Language::Ar, true) => "م",
        (Language::En, false) => "AM",
        (Language::En, true) => "PM",
    }
}

/// Format an instant's wall-clock time as "HH:MM", or "H:MM AM" in 12-hour mode.
pub fn format_clock(t: NaiveDateTime, use_12h: bool, lang: Language) -> String {
    let (hour, minute) = (t.hour(), t.minute());
    if !use_12h {
        return format!("{:02}:{:02}", hour, minute);
    }
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, minute, meridiem(lang, hour >= 12))
}

/// Format a duration in seconds to "Xh Ym" or "Ym" string
pub fn format_duration_secs(secs: i64) -> String {
    if secs <= 0 {
        return "now".to_string();
    }
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Signed offset label, e.g. "+10 min".
pub fn format_offset(minutes: i32) -> String {
    if minutes > 0 {
        format!("+{} min", minutes)
    } else {
        format!("{} min", minutes)
    }
}
