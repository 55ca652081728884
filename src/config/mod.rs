pub mod settings;

pub use settings::{AppConfig, DisplayConfig, LocationConfig, ScheduleConfig, ScheduleSource};
