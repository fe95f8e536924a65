//! Notification reducer helpers.

use super::NotificationKind;
use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::state::TuiState;

/// Shows a notification, replacing any visible one and re-arming the timer.
pub fn notify(tui: &mut TuiState, kind: NotificationKind, message: &str) -> Vec<UiEffect> {
    let mut effects = cancel_timer(tui);
    let id = tui.notification.show(kind, message);

    let after = tui.ui.notification_duration();
    if !after.is_zero() {
        let task = tui.start_task(TaskKind::Notification);
        effects.push(UiEffect::ScheduleDismiss {
            task,
            notification: id,
            after,
        });
    }
    effects
}

pub fn notify_success(tui: &mut TuiState, message: &str) -> Vec<UiEffect> {
    notify(tui, NotificationKind::Success, message)
}

pub fn notify_error(tui: &mut TuiState, message: &str) -> Vec<UiEffect> {
    notify(tui, NotificationKind::Error, message)
}

/// Dismisses the visible notification and cancels its timer.
pub fn dismiss(tui: &mut TuiState) -> Vec<UiEffect> {
    if tui.notification.dismiss() {
        cancel_timer(tui)
    } else {
        vec![]
    }
}

pub fn handle_expired(tui: &mut TuiState, id: u64) {
    tui.notification.expire(id);
}

fn cancel_timer(tui: &mut TuiState) -> Vec<UiEffect> {
    let state = tui.tasks.state_mut(TaskKind::Notification);
    if !state.is_running() {
        return vec![];
    }
    vec![UiEffect::CancelTask {
        kind: TaskKind::Notification,
        token: state.clear(),
    }]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ewise_core::config::UiSection;
    use ewise_core::session::MemorySessionStore;

    use super::*;

    fn tui() -> TuiState {
        TuiState::new(Arc::new(MemorySessionStore::new()), UiSection::default())
    }

    #[test]
    fn test_notify_schedules_dismiss() {
        let mut tui = tui();
        let effects = notify_success(&mut tui, "User deleted successfully");

        assert_eq!(effects.len(), 1);
        let UiEffect::ScheduleDismiss {
            notification,
            after,
            ..
        } = &effects[0]
        else {
            panic!("expected ScheduleDismiss, got {effects:?}");
        };
        assert_eq!(*after, std::time::Duration::from_secs(3));
        assert_eq!(tui.notification.current().unwrap().id, *notification);
        assert!(tui.is_running(TaskKind::Notification));
    }

    #[test]
    fn test_newer_notification_replaces_and_cancels_timer() {
        let mut tui = tui();
        notify_error(&mut tui, "first");
        let effects = notify_error(&mut tui, "second");

        assert!(matches!(
            effects[0],
            UiEffect::CancelTask {
                kind: TaskKind::Notification,
                ..
            }
        ));
        assert!(matches!(effects[1], UiEffect::ScheduleDismiss { .. }));
        assert_eq!(tui.notification.current().unwrap().message, "second");
    }

    #[test]
    fn test_expired_timer_of_replaced_notification_is_ignored() {
        let mut tui = tui();
        notify_error(&mut tui, "first");
        let first_id = tui.notification.current().unwrap().id;
        notify_error(&mut tui, "second");

        handle_expired(&mut tui, first_id);
        assert_eq!(tui.notification.current().unwrap().message, "second");
    }

    #[test]
    fn test_dismiss_cancels_timer() {
        let mut tui = tui();
        notify_success(&mut tui, "done");
        let effects = dismiss(&mut tui);

        assert!(!tui.notification.is_visible());
        assert!(!tui.is_running(TaskKind::Notification));
        assert_eq!(effects.len(), 1);
        assert!(dismiss(&mut tui).is_empty());
    }

    #[test]
    fn test_zero_duration_disables_auto_dismiss() {
        let mut tui = TuiState::new(
            Arc::new(MemorySessionStore::new()),
            UiSection {
                notification_secs: 0,
                ..UiSection::default()
            },
        );
        let effects = notify_success(&mut tui, "sticky");
        assert!(effects.is_empty());
        assert!(tui.notification.is_visible());
    }
}
