//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ewise_core::route::{Route, guard};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{ViewTransition, ViewUpdate};
use crate::state::{AppState, TuiState, View};
use crate::{editor, login, notification, users};

/// Enters the first route. Protected routes are guarded like any navigation.
pub fn start(app: &mut AppState, route: Route) -> Vec<UiEffect> {
    navigate(app, route)
}

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tui.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                tracing::trace!(?kind, id = completed.id.0, "dropping stale task result");
                vec![]
            }
        }
        UiEvent::Canceled => vec![],
        UiEvent::LoginFinished(result) => {
            if !matches!(app.view, View::Login(_)) {
                return vec![];
            }
            let view_update = login::handle_login_result(&mut app.tui, result);
            apply(app, view_update)
        }
        UiEvent::UsersLoaded { page, result } => match &mut app.view {
            View::Users(state) => users::handle_users_loaded(&mut app.tui, state, page, result),
            _ => vec![],
        },
        UiEvent::UserDeleted { id, result } => match &mut app.view {
            View::Users(state) => users::handle_user_deleted(&mut app.tui, state, id, result),
            _ => vec![],
        },
        UiEvent::UserLoaded(result) => match &mut app.view {
            View::Editor(state) => editor::handle_user_loaded(&mut app.tui, state, result),
            _ => vec![],
        },
        UiEvent::UserSaved(result) => match &app.view {
            View::Editor(state) => editor::handle_user_saved(&mut app.tui, state, result),
            _ => vec![],
        },
        UiEvent::NotificationExpired { id } => {
            notification::handle_expired(&mut app.tui, id);
            vec![]
        }
        UiEvent::RedirectDue { route } => navigate(app, route),
    }
}

/// Moves to `requested` after the session guard.
///
/// The left view's tasks are cleared (and canceled), so their late results
/// are dropped. Entering a view emits its load effects.
pub fn navigate(app: &mut AppState, requested: Route) -> Vec<UiEffect> {
    let route = guard(requested, app.tui.session.as_ref());
    tracing::debug!(from = %app.tui.route, to = %route, "navigate");

    let mut effects = leave_view(&mut app.tui);
    let (view, enter_effects) = match route {
        Route::Login => (View::Login(login::LoginState::default()), vec![]),
        Route::Users => {
            let (state, effects) = users::enter(&mut app.tui);
            (View::Users(state), effects)
        }
        Route::EditUser(id) => {
            let (state, effects) = editor::enter(&mut app.tui, id);
            (View::Editor(state), effects)
        }
    };
    app.view = view;
    app.tui.route = route;
    effects.extend(enter_effects);
    effects
}

fn leave_view(tui: &mut TuiState) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    for kind in TaskKind::VIEW_TASKS {
        let state = tui.tasks.state_mut(kind);
        if state.is_running() {
            effects.push(UiEffect::CancelTask {
                kind,
                token: state.clear(),
            });
        }
    }
    effects
}

fn apply(app: &mut AppState, view_update: ViewUpdate) -> Vec<UiEffect> {
    let mut effects = view_update.effects;
    if let ViewTransition::Navigate(route) = view_update.transition {
        effects.extend(navigate(app, route));
    }
    effects
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            handle_paste(&app.tui, &mut app.view, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let view_update = match &mut app.view {
        View::Login(state) => login::handle_key(&mut app.tui, state, key),
        View::Users(state) => users::handle_key(&mut app.tui, state, key),
        View::Editor(state) => editor::handle_key(&mut app.tui, state, key),
    };
    apply(app, view_update)
}

fn handle_paste(tui: &TuiState, view: &mut View, text: &str) {
    match view {
        View::Login(state) => state.focused_field_mut().insert_str(text),
        View::Users(state) if state.mode == users::UsersMode::Search => {
            state.search.insert_str(text);
            state.selected = 0;
        }
        View::Editor(state) if !editor::is_busy(tui) => state.focused_field_mut().insert_str(text),
        View::Users(_) | View::Editor(_) => {}
    }
}
