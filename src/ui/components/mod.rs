//! Reusable UI Components
//!
//! Components shared by the navigation bar and the modal dialogs. All of
//! them take a `LayoutContext` for responsive sizing.
//!
//! ## Components
//!
//! - `TabSelector` - Horizontal tab selector with an arrow marker
//! - `InputField` - Labeled text input or option picker with inline errors
//! - `DialogFrame` - Centered dialog overlay with rounded borders
//! - `Button` - Bracketed clickable label

mod button;
mod dialog_frame;
mod input_field;
mod tab_selector;

pub use button::{Button, ButtonKind};
pub use dialog_frame::{dialog_rect, render_dialog_frame, DialogFrameConfig};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use tab_selector::{render_tab_selector, tab_positions, TabItem};
