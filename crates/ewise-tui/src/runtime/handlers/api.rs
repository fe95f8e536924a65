use ewise_core::api::{ApiClient, UserUpdate};

use crate::events::UiEvent;
use crate::login::LOGIN_FAILED;

/// Authenticates and stores the returned token.
///
/// The error carries the remote message when the service sent one.
pub async fn authenticate(api: ApiClient, email: String, password: String) -> UiEvent {
    let result = match api.authenticate(&email, &password).await {
        Ok(token) => api.session().set_token(&token).map_err(|e| {
            tracing::warn!("Failed to store session token: {e:#}");
            format!("Failed to save session: {e}")
        }),
        Err(err) => {
            tracing::warn!(error = %err, "login failed");
            Err(err.user_message(LOGIN_FAILED))
        }
    };
    UiEvent::LoginFinished(result)
}

pub async fn load_users(api: ApiClient, page: u32) -> UiEvent {
    UiEvent::UsersLoaded {
        page,
        result: api.list_users(page).await,
    }
}

pub async fn load_user(api: ApiClient, id: u64) -> UiEvent {
    UiEvent::UserLoaded(api.get_user(id).await)
}

pub async fn save_user(api: ApiClient, id: u64, update: UserUpdate) -> UiEvent {
    UiEvent::UserSaved(api.update_user(id, &update).await)
}

pub async fn delete_user(api: ApiClient, id: u64) -> UiEvent {
    UiEvent::UserDeleted {
        id,
        result: api.delete_user(id).await,
    }
}
