use crate::view::element::{Button, InputField};
use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other(String),
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        match name {
            "Enter" => Key::Enter,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Everything the page can report to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The field's value changed, the new text is already in the view.
    Input(InputField),
    Blur(InputField),
    KeyUp(InputField, Key),
    Click(Button),
    /// The page finished loading at the given instant.
    Load(DateTime<Local>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Enter", Key::Enter)]
    #[case("a", Key::Other("a".to_string()))]
    #[case("enter", Key::Other("enter".to_string()))]
    fn test_key_from_name(#[case] name: &str, #[case] expected: Key) {
        assert_eq!(Key::from(name), expected);
    }
}
