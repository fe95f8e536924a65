//! UI event types.
//!
//! All external inputs (terminal, async results, timers) are converted to
//! `UiEvent` before being processed by the reducer.
//!
//! ## Task Lifecycle Events
//!
//! Async work uses a uniform lifecycle:
//! - The reducer allocates a `TaskId` and marks the task active when it emits
//!   the effect
//! - The runtime emits `UiEvent::TaskStarted` with the task's cancel token
//! - The runtime emits `UiEvent::TaskCompleted` wrapping the result event
//! - Completions whose id is no longer active are dropped
//!
//! ## Cancellation Convention
//!
//! Spawned tasks `select!` on `token.cancelled()` against their work and
//! resolve to `UiEvent::Canceled` when the token fires.

use crossterm::event::Event as CrosstermEvent;
use ewise_core::api::{ApiResult, UpdatedUser, User, UserPage};
use ewise_core::route::Route;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick for the spinner.
    Tick,

    /// Terminal input.
    Terminal(CrosstermEvent),

    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },

    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// A task ended through its cancel token.
    Canceled,

    /// Authentication finished. On success the token is already stored.
    /// The error is the message to show.
    LoginFinished(Result<(), String>),

    /// A page of users arrived.
    UsersLoaded {
        page: u32,
        result: ApiResult<UserPage>,
    },

    /// The editor's user record arrived.
    UserLoaded(ApiResult<User>),

    /// The update request finished.
    UserSaved(ApiResult<UpdatedUser>),

    /// The delete request finished.
    UserDeleted { id: u64, result: ApiResult<()> },

    /// Auto-dismiss timer fired for notification `id`.
    NotificationExpired { id: u64 },

    /// Delayed navigation is due.
    RedirectDue { route: Route },
}
