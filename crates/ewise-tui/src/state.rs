//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── session: Arc<dyn SessionStore> (bearer token slot)
//! │   ├── ui: UiSection           (timings)
//! │   ├── route: Route            (current location)
//! │   ├── notification: NotificationState
//! │   ├── task_seq: TaskSeq       (async task id generator)
//! │   └── tasks: Tasks            (task lifecycle state)
//! └── view: View                  (state of the active view)
//! ```
//!
//! State is split so view handlers can take `&mut View` and `&mut TuiState`
//! at the same time.

use std::sync::Arc;

use ewise_core::config::UiSection;
use ewise_core::route::Route;
use ewise_core::session::SessionStore;

use crate::common::{TaskId, TaskKind, TaskSeq, Tasks};
use crate::editor::EditorState;
use crate::login::LoginState;
use crate::notification::NotificationState;
use crate::users::UsersState;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub view: View,
}

impl AppState {
    /// Creates state parked on the login view. Call `update::start` to enter
    /// the first route.
    pub fn new(session: Arc<dyn SessionStore>, ui: UiSection) -> Self {
        Self {
            tui: TuiState::new(session, ui),
            view: View::Login(LoginState::default()),
        }
    }
}

/// The active view and its transient state.
#[derive(Debug)]
pub enum View {
    Login(LoginState),
    Users(UsersState),
    Editor(EditorState),
}

impl View {
    pub fn route(&self) -> Route {
        match self {
            View::Login(_) => Route::Login,
            View::Users(_) => Route::Users,
            View::Editor(editor) => Route::EditUser(editor.id),
        }
    }
}

/// Non-view UI state.
pub struct TuiState {
    pub session: Arc<dyn SessionStore>,
    pub ui: UiSection,
    pub route: Route,
    pub notification: NotificationState,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    pub should_quit: bool,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(session: Arc<dyn SessionStore>, ui: UiSection) -> Self {
        Self {
            session,
            ui,
            route: Route::Login,
            notification: NotificationState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            should_quit: false,
            spinner_frame: 0,
        }
    }

    /// Allocates a task id and marks `kind` as running with it.
    pub fn start_task(&mut self, kind: TaskKind) -> TaskId {
        let id = self.task_seq.next_id();
        self.tasks.state_mut(kind).begin(id);
        id
    }

    pub fn is_running(&self, kind: TaskKind) -> bool {
        self.tasks.is_running(kind)
    }
}
