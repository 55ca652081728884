use chrono::{FixedOffset, NaiveDate};
use salah::prelude::*;

use crate::error::{Error, Result};
use crate::models::{BaseSchedule, TimeOfDay};

/// Derives a base schedule from a location instead of the static table.
///
/// The result is an ordinary [`BaseSchedule`]; the schedule core does not
/// know where its base times came from.
#[derive(Debug, Clone)]
pub struct BaseScheduleCalculator {
    pub lat: f64,
    pub lng: f64,
    pub method_str: String,
    pub madhab_str: String,
    pub tz_offset_minutes: i32,
}

impl BaseScheduleCalculator {
    pub fn new(
        lat: f64,
        lng: f64,
        method: &str,
        madhab: &str,
        tz_offset_minutes: i32,
    ) -> Result<Self> {
        // Validate method + madhab + offset early
        parse_method(method)?;
        parse_madhab(madhab)?;
        timezone(tz_offset_minutes)?;
        Ok(Self {
            lat,
            lng,
            method_str: method.to_string(),
            madhab_str: madhab.to_string(),
            tz_offset_minutes,
        })
    }

    pub fn base_for(&self, date: NaiveDate) -> Result<BaseSchedule> {
        let coords = Coordinates::new(self.lat, self.lng);
        let method = parse_method(&self.method_str)?;
        let madhab = parse_madhab(&self.madhab_str)?;
        let params = Configuration::with(method, madhab);

        let times = PrayerSchedule::new()
            .on(date)
            .for_location(coords)
            .with_configuration(params)
            .calculate()
            .map_err(|e| Error::Calculation(e.to_string()))?;

        let offset = timezone(self.tz_offset_minutes)?;
        let to_local = |utc: chrono::DateTime<chrono::Utc>| -> TimeOfDay {
            TimeOfDay::from(utc.with_timezone(&offset).time())
        };

        let base = BaseSchedule {
            fajr: to_local(times.time(Prayer::Fajr)),
            dhuhr: to_local(times.time(Prayer::Dhuhr)),
            asr: to_local(times.time(Prayer::Asr)),
            maghrib: to_local(times.time(Prayer::Maghrib)),
            isha: to_local(times.time(Prayer::Isha)),
        };
        log::debug!("calculated base schedule for {}: {:?}", date, base);
        Ok(base)
    }
}

fn timezone(minutes: i32) -> Result<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(Error::InvalidTimezone(minutes))
}

fn parse_method(s: &str) -> Result<Method> {
    match s {
        "MuslimWorldLeague" => Ok(Method::MuslimWorldLeague),
        "Egyptian" => Ok(Method::Egyptian),
        "Karachi" => Ok(Method::Karachi),
        "UmmAlQura" => Ok(Method::UmmAlQura),
        "Dubai" => Ok(Method::Dubai),
        "MoonsightingCommittee" => Ok(Method::MoonsightingCommittee),
        "NorthAmerica" => Ok(Method::NorthAmerica),
        "Kuwait" => Ok(Method::Kuwait),
        "Qatar" => Ok(Method::Qatar),
        "Singapore" => Ok(Method::Singapore),
        "Tehran" => Ok(Method::Tehran),
        "Turkey" => Ok(Method::Turkey),
        "Other" => Ok(Method::Other),
        _ => Err(Error::UnknownMethod(s.to_string())),
    }
}

fn parse_madhab(s: &str) -> Result<Madhab> {
    match s {
        "Hanafi" => Ok(Madhab::Hanafi),
        "Shafi" | "Shafi'i" => Ok(Madhab::Shafi),
        _ => Err(Error::UnknownMadhab(s.to_string())),
    }
}

/// Accepted `calc_method` values.
pub const CALC_METHODS: &[&str] = &[
    "MuslimWorldLeague",
    "Egyptian",
    "Karachi",
    "UmmAlQura",
    "Dubai",
    "MoonsightingCommittee",
    "NorthAmerica",
    "Kuwait",
    "Qatar",
    "Singapore",
    "Tehran",
    "Turkey",
    "Other",
];
