use crate::view::element::{InputField, OutputSlot};

/// The document surface the controller works against.
///
/// Implementations own the elements; the controller only reads input values,
/// writes text and reveals the prompt. Nothing here can fail, every element the
/// controller names is assumed to exist.
pub trait View {
    fn input_value(&self, field: InputField) -> String;
    fn set_input_value(&mut self, field: InputField, value: &str);
    fn set_text(&mut self, slot: OutputSlot, text: &str);
    /// Makes the "please enter a date" hint visible. There is no way back.
    fn show_prompt(&mut self);
}
