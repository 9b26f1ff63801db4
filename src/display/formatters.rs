use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

fn month_day_year<D: Datelike>(date: &D) -> String {
    format!("{:02}{:02}{}", date.month(), date.day(), date.year())
}

/// Calendar date as `MMDDYYYY` in the time zone `dt` carries.
pub fn calendar_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    month_day_year(dt)
}

/// Calendar date as `MMDDYYYY` after converting `dt` to UTC.
pub fn utc_calendar_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    month_day_year(&dt.with_timezone(&Utc))
}

/// Wall-clock time as `HH:MM:SS` on a 24 hour clock.
pub fn military_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    format!("{:02}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second())
}
