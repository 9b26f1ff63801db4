pub mod element;
pub use element::{Button, ClockSlot, InputField, OutputSlot};
pub mod memory_view;
pub use memory_view::MemoryView;
pub mod traits;
pub use traits::View;
