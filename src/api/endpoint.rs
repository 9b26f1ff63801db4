use crate::constants::{CALENDAR_DATE_PATH, HUNDRED_YEAR_DATE_PATH};
use strum_macros::{Display, EnumIter};

/// The two calculations the remote service offers. Both take `{"date": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Endpoint {
    #[strum(to_string = "CalcCalendarDate")]
    CalendarDate,
    #[strum(to_string = "CalcHundredYearDate")]
    HundredYearDate,
}

impl Endpoint {
    /// Path relative to the API base url.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::CalendarDate => CALENDAR_DATE_PATH,
            Endpoint::HundredYearDate => HUNDRED_YEAR_DATE_PATH,
        }
    }
}
