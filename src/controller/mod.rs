pub mod date_input_controller;
pub use date_input_controller::{CallOutcome, DateInputController, PendingCall};
pub mod events;
pub use events::{Key, UiEvent};
