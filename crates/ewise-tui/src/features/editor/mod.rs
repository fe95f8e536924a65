//! User editor view: load, edit and save one user.

mod render;
mod state;
mod update;

pub use render::render_editor;
pub use state::{EditorField, EditorState};
pub use update::{enter, handle_key, handle_user_loaded, handle_user_saved, is_busy, submit};

pub const LOAD_FAILED: &str = "Failed to load user details. Please try again.";
pub const FIELDS_REQUIRED: &str = "All fields are required";
pub const UPDATE_SUCCEEDED: &str = "User updated successfully";
pub const UPDATE_FAILED: &str = "Failed to update user. Please try again.";
