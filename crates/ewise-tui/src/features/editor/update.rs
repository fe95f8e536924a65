//! User editor reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ewise_core::api::{ApiResult, UpdatedUser, User};
use ewise_core::route::Route;

use super::{EditorState, FIELDS_REQUIRED, LOAD_FAILED, UPDATE_FAILED, UPDATE_SUCCEEDED};
use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::features::ViewUpdate;
use crate::notification;
use crate::state::TuiState;

/// Builds the editor state for `id` and requests the record.
pub fn enter(tui: &mut TuiState, id: u64) -> (EditorState, Vec<UiEffect>) {
    let task = tui.start_task(TaskKind::UserLoad);
    (EditorState::new(id), vec![UiEffect::LoadUser { task, id }])
}

pub fn handle_key(tui: &mut TuiState, editor: &mut EditorState, key: KeyEvent) -> ViewUpdate {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => ViewUpdate::navigate(Route::Users),
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit].into(),
        KeyCode::Char('x') if ctrl => notification::dismiss(tui).into(),
        KeyCode::Tab | KeyCode::Down => {
            editor.focus = editor.focus.next();
            ViewUpdate::stay()
        }
        KeyCode::BackTab | KeyCode::Up => {
            editor.focus = editor.focus.prev();
            ViewUpdate::stay()
        }
        KeyCode::Enter => submit(tui, editor).into(),
        _ => {
            if !is_busy(tui) {
                editor.focused_field_mut().handle_key(key);
            }
            ViewUpdate::stay()
        }
    }
}

/// True while the form is loading or saving; edits are ignored.
pub fn is_busy(tui: &TuiState) -> bool {
    tui.is_running(TaskKind::UserLoad) || tui.is_running(TaskKind::UserSave)
}

/// Validates and sends the update. Empty fields never reach the network.
pub fn submit(tui: &mut TuiState, editor: &EditorState) -> Vec<UiEffect> {
    if is_busy(tui) {
        return vec![];
    }

    let update = editor.to_update();
    if let Err(err) = update.validate() {
        tracing::debug!(details = ?err.details, "editor submit rejected");
        return notification::notify_error(tui, FIELDS_REQUIRED);
    }

    let task = tui.start_task(TaskKind::UserSave);
    vec![UiEffect::SaveUser {
        task,
        id: editor.id,
        update,
    }]
}

pub fn handle_user_loaded(
    tui: &mut TuiState,
    editor: &mut EditorState,
    result: ApiResult<User>,
) -> Vec<UiEffect> {
    match result {
        Ok(user) => {
            editor.populate(user);
            vec![]
        }
        Err(err) => {
            tracing::warn!(id = editor.id, error = %err, "failed to load user");
            notification::notify_error(tui, LOAD_FAILED)
        }
    }
}

/// On success shows a notification and schedules the return to the list.
pub fn handle_user_saved(
    tui: &mut TuiState,
    editor: &EditorState,
    result: ApiResult<UpdatedUser>,
) -> Vec<UiEffect> {
    match result {
        Ok(echo) => {
            tracing::info!(id = editor.id, updated_at = ?echo.updated_at, "user updated");
            let mut effects = notification::notify_success(tui, UPDATE_SUCCEEDED);
            let task = tui.start_task(TaskKind::Redirect);
            effects.push(UiEffect::ScheduleRedirect {
                task,
                route: Route::Users,
                after: tui.ui.redirect_delay(),
            });
            effects
        }
        Err(err) => {
            tracing::warn!(id = editor.id, error = %err, "failed to update user");
            notification::notify_error(tui, UPDATE_FAILED)
        }
    }
}
