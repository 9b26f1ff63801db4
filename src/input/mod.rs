pub mod formatter;
pub use formatter::format_date_input;
pub mod validation;
pub use validation::{is_valid_date, parse_date};
