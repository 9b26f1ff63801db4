use serde::{Deserialize, Deserializer};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// The `results` object returned by both calculation endpoints.
///
/// Every field is display text. The service is trusted: fields are not validated,
/// a missing or `null` field becomes an empty string and any other scalar is kept
/// as its JSON text.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalcResults {
    #[serde(default, deserialize_with = "display_text")]
    pub acsc_usa_standard: String,
    #[serde(default, deserialize_with = "display_text")]
    pub acsc_international: String,
    #[serde(default, deserialize_with = "display_text")]
    pub acsc_european: String,
    #[serde(default, deserialize_with = "display_text")]
    pub acsc_hundred_year: String,
    #[serde(default, deserialize_with = "display_text")]
    pub acsc_julian: String,
    #[serde(default, deserialize_with = "display_text")]
    pub usa_standard: String,
    #[serde(default, deserialize_with = "display_text")]
    pub international_standard: String,
    #[serde(default, deserialize_with = "display_text")]
    pub european_standard: String,
    #[serde(default, deserialize_with = "display_text")]
    pub day_of_week: String,
    #[serde(default, deserialize_with = "display_text")]
    pub error_flag: String,
    #[serde(default, deserialize_with = "display_text")]
    pub error_text: String,
}

/// Response envelope. `results` is optional so its absence can be reported
/// instead of failing inside serde.
#[derive(Debug, Deserialize)]
pub(crate) struct ResultsEnvelope {
    #[serde(default)]
    pub(crate) results: Option<CalcResults>,
}

fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// One named field of [`CalcResults`]. Its string form is the id of the output
/// element the field is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum ResultField {
    AcscUsaStandard,
    AcscInternational,
    AcscEuropean,
    AcscHundredYear,
    AcscJulian,
    UsaStandard,
    InternationalStandard,
    EuropeanStandard,
    DayOfWeek,
    ErrorFlag,
    ErrorText,
}

impl CalcResults {
    pub fn get(&self, field: ResultField) -> &str {
        match field {
            ResultField::AcscUsaStandard => &self.acsc_usa_standard,
            ResultField::AcscInternational => &self.acsc_international,
            ResultField::AcscEuropean => &self.acsc_european,
            ResultField::AcscHundredYear => &self.acsc_hundred_year,
            ResultField::AcscJulian => &self.acsc_julian,
            ResultField::UsaStandard => &self.usa_standard,
            ResultField::InternationalStandard => &self.international_standard,
            ResultField::EuropeanStandard => &self.european_standard,
            ResultField::DayOfWeek => &self.day_of_week,
            ResultField::ErrorFlag => &self.error_flag,
            ResultField::ErrorText => &self.error_text,
        }
    }
}

/// Whether an `ErrorFlag` value reports a rejected request. The service writes
/// `"0"` on success.
pub fn is_error_flag(flag: &str) -> bool {
    !flag.is_empty() && flag != "0"
}
