use std::time::Duration;

use crate::events::UiEvent;

/// Resolves to `event` after `after`.
///
/// Cancellation is applied by the runtime around the returned future.
pub async fn delay(after: Duration, event: UiEvent) -> UiEvent {
    tokio::time::sleep(after).await;
    event
}
