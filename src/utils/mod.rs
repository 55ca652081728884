pub mod format;
pub mod hijri;

pub use format::{format_clock, format_duration_secs, format_offset};
pub use hijri::hijri_label;
