use crate::constants::DATE_SHAPES;
use chrono::NaiveDate;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

struct DateShape {
    pattern: Regex,
    format: &'static str,
}

static SHAPES: LazyLock<Vec<DateShape>> = LazyLock::new(|| {
    DATE_SHAPES
        .iter()
        .map(|(pattern, format)| DateShape {
            pattern: Regex::new(pattern).expect("date shape is a valid regex"),
            format,
        })
        .collect()
});

/// Parses `date_str` if it has one of the accepted shapes and names a real day.
///
/// Accepted shapes are `YYYY-MM-DD`, `MM/DD/YYYY` and `MM-DD-YYYY`. The first
/// shape that matches decides which format is used; later shapes are not tried.
/// Days past the end of the month are rejected, never rolled into the next month.
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let Some(shape) = SHAPES.iter().find(|shape| shape.pattern.is_match(date_str)) else {
        debug!("'{date_str}' does not have an accepted date shape");
        return None;
    };

    match NaiveDate::parse_from_str(date_str, shape.format) {
        Ok(date) => Some(date),
        Err(err) => {
            debug!("'{date_str}' matched {:?} but is not a date: {err}", shape.format);
            None
        }
    }
}

pub fn is_valid_date(date_str: &str) -> bool {
    parse_date(date_str).is_some()
}
