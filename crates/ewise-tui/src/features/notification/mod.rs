//! Transient notifications with cancelable auto-dismiss.

mod render;
mod state;
mod update;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
pub use update::{dismiss, handle_expired, notify, notify_error, notify_success};
