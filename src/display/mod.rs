mod formatters;
pub use formatters::{calendar_date, military_time, utc_calendar_date};
