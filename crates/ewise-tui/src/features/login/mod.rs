//! Login view: credentials form and authentication flow.

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{LoginField, LoginState};
pub use update::{handle_key, handle_login_result, submit};

pub const MISSING_CREDENTIALS: &str = "Please enter both email and password";
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
