use thiserror::Error;

/// Errors raised at the boundaries of the crate: parsing user input,
/// reading configuration and talking to the profile store.
///
/// The schedule core itself (adjustment, resolution, projection) is total
/// and never produces one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown prayer '{0}'. Use: fajr, dhuhr, asr, maghrib, isha")]
    UnknownPrayer(String),

    #[error("Bad time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Unknown language '{0}'. Use: ar, en")]
    UnknownLanguage(String),

    #[error(
        "Unknown calculation method: '{0}'. Use one of: {}",
        crate::prayer_times::calculator::CALC_METHODS.join(", ")
    )]
    UnknownMethod(String),

    #[error("Unknown madhab: '{0}'")]
    UnknownMadhab(String),

    #[error("Invalid timezone offset: {0} minutes")]
    InvalidTimezone(i32),

    #[error("Prayer calculation failed: {0}")]
    Calculation(String),

    #[error("Profile storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Profile serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
