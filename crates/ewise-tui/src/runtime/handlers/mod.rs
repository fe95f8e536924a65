//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return `UiEvent`. They perform I/O
//! but never touch state; the runtime spawns them and sends the result to
//! the inbox.

mod api;
mod timer;

pub use api::*;
pub use timer::*;
