pub mod alert;
pub mod header;
pub mod next_prayer;
pub mod prayers;
pub mod schedule;
pub mod statusbar;
