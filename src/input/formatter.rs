use crate::constants::{DIGIT_ENTRY_PATTERN, DIGIT_ENTRY_REPLACEMENT};
use regex::Regex;
use std::sync::LazyLock;

static DIGIT_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DIGIT_ENTRY_PATTERN).expect("digit entry pattern is a valid regex")
});

/// Turns raw digit entry into a slash-delimited date string.
///
/// Only the first run of 7 or 8 digits is rewritten, splitting it into
/// `month/day/year`. Anything that does not contain such a run is returned as is,
/// so text that is already delimited passes through untouched.
///
/// # Examples
///
/// ```
/// use datecalc::input::format_date_input;
///
/// assert_eq!(format_date_input("07042023"), "07/04/2023");
/// assert_eq!(format_date_input("07/04/2023"), "07/04/2023");
/// ```
pub fn format_date_input(raw: &str) -> String {
    DIGIT_ENTRY.replace(raw, DIGIT_ENTRY_REPLACEMENT).into_owned()
}
