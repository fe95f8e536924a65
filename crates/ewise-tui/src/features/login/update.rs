//! Login reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ewise_core::route::Route;

use super::{LoginState, MISSING_CREDENTIALS};
use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::features::ViewUpdate;
use crate::notification;
use crate::state::TuiState;

pub fn handle_key(tui: &mut TuiState, login: &mut LoginState, key: KeyEvent) -> ViewUpdate {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => vec![UiEffect::Quit].into(),
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit].into(),
        KeyCode::Char('x') if ctrl => notification::dismiss(tui).into(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            login.focus = login.focus.toggle();
            ViewUpdate::stay()
        }
        KeyCode::Enter => submit(tui, login).into(),
        _ => {
            login.focused_field_mut().handle_key(key);
            ViewUpdate::stay()
        }
    }
}

/// Validates the form and starts authentication.
///
/// Does nothing while a login is already in flight.
pub fn submit(tui: &mut TuiState, login: &LoginState) -> Vec<UiEffect> {
    if tui.is_running(TaskKind::Login) {
        return vec![];
    }
    if login.email.value().is_empty() || login.password.value().is_empty() {
        return notification::notify_error(tui, MISSING_CREDENTIALS);
    }

    let task = tui.start_task(TaskKind::Login);
    tracing::debug!("submitting login");
    vec![UiEffect::Authenticate {
        task,
        email: login.email.value().to_string(),
        password: login.password.value().to_string(),
    }]
}

/// Handles the authentication result. The token is already persisted on success.
pub fn handle_login_result(tui: &mut TuiState, result: Result<(), String>) -> ViewUpdate {
    match result {
        Ok(()) => {
            tracing::info!("login succeeded");
            ViewUpdate::navigate(Route::Users)
        }
        Err(message) => notification::notify_error(tui, &message).into(),
    }
}
