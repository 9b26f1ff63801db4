use crate::api::{Endpoint, ResultField};
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// Text fields the user types into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum InputField {
    DateInput,
    HundredYearInput,
}

impl InputField {
    /// The calculation triggered from this field.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            InputField::DateInput => Endpoint::CalendarDate,
            InputField::HundredYearInput => Endpoint::HundredYearDate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum Button {
    #[strum(serialize = "calculateButton")]
    Calculate,
    #[strum(serialize = "calculateHundredYear")]
    CalculateHundredYear,
}

impl Button {
    /// The field whose value the button submits.
    pub fn source(&self) -> InputField {
        match self {
            Button::Calculate => InputField::DateInput,
            Button::CalculateHundredYear => InputField::HundredYearInput,
        }
    }
}

/// Slots filled once when the page finishes loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, IntoStaticStr)]
pub enum ClockSlot {
    #[strum(serialize = "sysdate")]
    SystemDate,
    #[strum(serialize = "udate")]
    UtcDate,
    #[strum(serialize = "pageTime")]
    PageTime,
}

/// Any element the controller writes text into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputSlot {
    Result(ResultField),
    Clock(ClockSlot),
}

impl OutputSlot {
    pub fn element_id(&self) -> &'static str {
        match self {
            OutputSlot::Result(field) => (*field).into(),
            OutputSlot::Clock(slot) => (*slot).into(),
        }
    }
}

impl From<ResultField> for OutputSlot {
    fn from(field: ResultField) -> Self {
        OutputSlot::Result(field)
    }
}

impl From<ClockSlot> for OutputSlot {
    fn from(slot: ClockSlot) -> Self {
        OutputSlot::Clock(slot)
    }
}
