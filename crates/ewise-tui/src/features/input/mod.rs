//! Single-line text input used by the login, search and editor forms.

mod render;
mod text_field;

pub use render::{FieldView, render_field};
pub use text_field::TextField;
