use crate::api::ResultField;
use crate::view::element::{ClockSlot, InputField, OutputSlot};
use crate::view::traits::View;
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// A [`View`] that keeps every element in memory.
///
/// Slots that were never written read as `None`, which keeps "empty text" and
/// "never rendered" apart.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryView {
    inputs: HashMap<InputField, String>,
    slots: HashMap<OutputSlot, String>,
    prompt_visible: bool,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, slot: impl Into<OutputSlot>) -> Option<&str> {
        self.slots.get(&slot.into()).map(String::as_str)
    }

    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    /// All written slots as `(element id, text)`, clock first, then results in
    /// display order.
    pub fn rendered(&self) -> Vec<(&'static str, &str)> {
        ClockSlot::iter()
            .map(OutputSlot::from)
            .chain(ResultField::iter().map(OutputSlot::from))
            .filter_map(|slot| {
                self.slots
                    .get(&slot)
                    .map(|text| (slot.element_id(), text.as_str()))
            })
            .collect()
    }
}

impl View for MemoryView {
    fn input_value(&self, field: InputField) -> String {
        self.inputs.get(&field).cloned().unwrap_or_default()
    }

    fn set_input_value(&mut self, field: InputField, value: &str) {
        self.inputs.insert(field, value.to_string());
    }

    fn set_text(&mut self, slot: OutputSlot, text: &str) {
        self.slots.insert(slot, text.to_string());
    }

    fn show_prompt(&mut self) {
        self.prompt_visible = true;
    }
}
