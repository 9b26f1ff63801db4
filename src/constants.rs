pub const DEFAULT_BASE_URL: &str = "https://dolotsoflittlethings.com:8010/api/";
pub const DEFAULT_USER_AGENT: &str = "datecalc";

pub const CALENDAR_DATE_PATH: &str = "CalcCalendarDate";
pub const HUNDRED_YEAR_DATE_PATH: &str = "CalcHundredYearDate";

/// Raw keystrokes as "1-2 digits, 2 digits, 4 digits".
pub const DIGIT_ENTRY_PATTERN: &str = r"(\d{1,2})(\d{2})(\d{4})";
pub const DIGIT_ENTRY_REPLACEMENT: &str = "$1/$2/$3";

/// Accepted date shapes paired with the chrono format that parses them.
/// Order matters, the first matching shape decides.
pub const DATE_SHAPES: &[(&str, &str)] = &[
    (r"^\d{4}-\d{2}-\d{2}$", "%Y-%m-%d"),   // YYYY-MM-DD
    (r"^\d{2}/\d{2}/\d{4}$", "%m/%d/%Y"),   // MM/DD/YYYY
    (r"^\d{2}-\d{2}-\d{4}$", "%m-%d-%Y"),   // MM-DD-YYYY
];
