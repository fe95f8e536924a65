//! User list view: pagination, search, delete and logout.

mod render;
mod state;
mod update;

pub use render::render_users;
pub use state::{UsersMode, UsersState};
pub use update::{enter, handle_key, handle_user_deleted, handle_users_loaded, load_page};

pub const LOAD_FAILED: &str = "Failed to load users. Please try again.";
pub const DELETE_SUCCEEDED: &str = "User deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete user. Please try again.";
pub const NO_MATCHES: &str = "No users found matching your search.";
pub const NO_EMAIL: &str = "No email provided";
