//! User list reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ewise_core::api::{ApiResult, UserPage};
use ewise_core::route::Route;
use ewise_core::users::remove_user;

use super::{DELETE_FAILED, DELETE_SUCCEEDED, LOAD_FAILED, UsersMode, UsersState};
use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::features::ViewUpdate;
use crate::notification;
use crate::state::TuiState;

/// Builds the initial list state and requests page 1.
pub fn enter(tui: &mut TuiState) -> (UsersState, Vec<UiEffect>) {
    let state = UsersState::default();
    let effects = load_page(tui, state.pagination.page);
    (state, effects)
}

/// Requests `page`, superseding any list request still in flight.
pub fn load_page(tui: &mut TuiState, page: u32) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    let previous = tui.tasks.state_mut(TaskKind::UserList);
    if previous.is_running() {
        effects.push(UiEffect::CancelTask {
            kind: TaskKind::UserList,
            token: previous.clear(),
        });
    }
    let task = tui.start_task(TaskKind::UserList);
    effects.push(UiEffect::LoadUsers { task, page });
    effects
}

pub fn handle_key(tui: &mut TuiState, users: &mut UsersState, key: KeyEvent) -> ViewUpdate {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit].into();
    }
    if ctrl && key.code == KeyCode::Char('x') {
        return notification::dismiss(tui).into();
    }

    match users.mode {
        UsersMode::Browse => handle_browse_key(tui, users, key),
        UsersMode::Search => handle_search_key(users, key),
        UsersMode::ConfirmDelete(id) => handle_confirm_key(tui, users, id, key),
    }
}

fn handle_browse_key(tui: &mut TuiState, users: &mut UsersState, key: KeyEvent) -> ViewUpdate {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            users.select_prev();
            ViewUpdate::stay()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            users.select_next();
            ViewUpdate::stay()
        }
        KeyCode::Left | KeyCode::Char('p') => {
            let target = users.pagination.prev();
            change_page(tui, target)
        }
        KeyCode::Right | KeyCode::Char('n') => {
            let target = users.pagination.next();
            change_page(tui, target)
        }
        KeyCode::Char('/') => {
            users.mode = UsersMode::Search;
            ViewUpdate::stay()
        }
        KeyCode::Esc => {
            users.search.clear();
            users.clamp_selection();
            ViewUpdate::stay()
        }
        KeyCode::Enter | KeyCode::Char('e') => match users.selected_user() {
            Some(user) => ViewUpdate::navigate(Route::EditUser(user.id)),
            None => ViewUpdate::stay(),
        },
        KeyCode::Char('d') => {
            if !tui.is_running(TaskKind::UserDelete)
                && let Some(id) = users.selected_user().map(|user| user.id)
            {
                users.mode = UsersMode::ConfirmDelete(id);
            }
            ViewUpdate::stay()
        }
        KeyCode::Char('r') => load_page(tui, users.pagination.page).into(),
        KeyCode::Char('L') => {
            tracing::info!("logging out");
            ViewUpdate::navigate(Route::Login).with_effects(vec![UiEffect::ClearSession])
        }
        KeyCode::Char('q') => vec![UiEffect::Quit].into(),
        KeyCode::Char('x') => notification::dismiss(tui).into(),
        _ => ViewUpdate::stay(),
    }
}

fn handle_search_key(users: &mut UsersState, key: KeyEvent) -> ViewUpdate {
    match key.code {
        KeyCode::Esc => {
            users.search.clear();
            users.mode = UsersMode::Browse;
        }
        KeyCode::Enter | KeyCode::Tab => users.mode = UsersMode::Browse,
        KeyCode::Up => users.select_prev(),
        KeyCode::Down => users.select_next(),
        _ => {
            if users.search.handle_key(key) {
                users.selected = 0;
            }
        }
    }
    users.clamp_selection();
    ViewUpdate::stay()
}

fn handle_confirm_key(
    tui: &mut TuiState,
    users: &mut UsersState,
    id: u64,
    key: KeyEvent,
) -> ViewUpdate {
    match key.code {
        KeyCode::Char('y' | 'Y') => {
            users.mode = UsersMode::Browse;
            let task = tui.start_task(TaskKind::UserDelete);
            tracing::debug!(id, "deleting user");
            vec![UiEffect::DeleteUser { task, id }].into()
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            users.mode = UsersMode::Browse;
            ViewUpdate::stay()
        }
        _ => ViewUpdate::stay(),
    }
}

/// Fetches `target`. `None` (a boundary) is a no-op.
///
/// The current page only moves once the response arrives.
fn change_page(tui: &mut TuiState, target: Option<u32>) -> ViewUpdate {
    match target {
        Some(page) => load_page(tui, page).into(),
        None => ViewUpdate::stay(),
    }
}

pub fn handle_users_loaded(
    tui: &mut TuiState,
    users: &mut UsersState,
    page: u32,
    result: ApiResult<UserPage>,
) -> Vec<UiEffect> {
    match result {
        Ok(loaded) => {
            tracing::debug!(page, count = loaded.users.len(), "users loaded");
            if users.pagination.page != page {
                users.pagination.page = page;
                users.selected = 0;
            }
            users.users = loaded.users;
            users.pagination.apply_total(loaded.total_pages);
            users.loaded = true;
            users.clamp_selection();
            vec![]
        }
        Err(err) => {
            tracing::warn!(page, error = %err, "failed to load users");
            notification::notify_error(tui, LOAD_FAILED)
        }
    }
}

pub fn handle_user_deleted(
    tui: &mut TuiState,
    users: &mut UsersState,
    id: u64,
    result: ApiResult<()>,
) -> Vec<UiEffect> {
    match result {
        Ok(()) => {
            remove_user(&mut users.users, id);
            users.clamp_selection();
            notification::notify_success(tui, DELETE_SUCCEEDED)
        }
        Err(err) => {
            tracing::warn!(id, error = %err, "failed to delete user");
            notification::notify_error(tui, DELETE_FAILED)
        }
    }
}
