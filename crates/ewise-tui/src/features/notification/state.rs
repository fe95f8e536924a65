/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

/// At most one visible notification; a newer one replaces it.
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationState {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Shows a notification and returns its id.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        self.current = Some(Notification {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Hides the current notification. Returns whether one was visible.
    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Hides the notification only if it is still `id`.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
