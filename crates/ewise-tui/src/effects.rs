//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! Every spawning effect carries the `TaskId` the reducer already marked
//! active, so the runtime never decides task identity.

use std::time::Duration;

use ewise_core::api::UserUpdate;
use ewise_core::route::Route;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Exchange credentials for a token and persist it.
    Authenticate {
        task: TaskId,
        email: String,
        password: String,
    },

    /// Fetch one page of users.
    LoadUsers { task: TaskId, page: u32 },

    /// Fetch a single user for the editor.
    LoadUser { task: TaskId, id: u64 },

    /// Send the edited fields.
    SaveUser {
        task: TaskId,
        id: u64,
        update: UserUpdate,
    },

    /// Delete a user.
    DeleteUser { task: TaskId, id: u64 },

    /// Remove the stored session token.
    ClearSession,

    /// Fire `NotificationExpired` after `after` unless canceled.
    ScheduleDismiss {
        task: TaskId,
        notification: u64,
        after: Duration,
    },

    /// Fire `RedirectDue` after `after` unless canceled.
    ScheduleRedirect {
        task: TaskId,
        route: Route,
        after: Duration,
    },

    /// Cancel an in-progress task.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}
