pub mod adjust;
pub mod alerts;
pub mod calculator;
pub mod clock;
pub mod projection;
pub mod resolver;

pub use adjust::{adjusted_day, adjusted_time};
pub use alerts::{Alert, AlertKind, alerts_between};
pub use calculator::BaseScheduleCalculator;
pub use clock::{Clock, FixedClock, SystemClock};
pub use projection::{DaySchedule, Projection, project_schedule};
pub use resolver::{Countdown, NextPrayer, PrayerSlot, resolve_next, today_board};
