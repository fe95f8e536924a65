use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Login,
    UserList,
    UserLoad,
    UserSave,
    UserDelete,
    /// Auto-dismiss timer for the current notification.
    Notification,
    /// Delayed navigation after a successful save.
    Redirect,
}

impl TaskKind {
    /// Tasks owned by a view; cleared when the view is left.
    pub const VIEW_TASKS: [TaskKind; 6] = [
        TaskKind::Login,
        TaskKind::UserList,
        TaskKind::UserLoad,
        TaskKind::UserSave,
        TaskKind::UserDelete,
        TaskKind::Redirect,
    ];
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
///
/// The reducer marks a task active when it emits the effect, so in-flight
/// checks hold before the runtime has spawned anything.
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn begin(&mut self, id: TaskId) {
        self.active = Some(id);
        self.cancel = None;
    }

    /// Stores the cancel token if `started` is still the active task.
    pub fn on_started(&mut self, started: &TaskStarted) {
        if self.active == Some(started.id) {
            self.cancel.clone_from(&started.cancel);
        }
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
            self.cancel = None;
        }
        ok
    }

    /// Forgets the active task and returns its cancel token, if any.
    pub fn clear(&mut self) -> Option<CancellationToken> {
        self.active = None;
        self.cancel.take()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub login: TaskState,
    pub user_list: TaskState,
    pub user_load: TaskState,
    pub user_save: TaskState,
    pub user_delete: TaskState,
    pub notification: TaskState,
    pub redirect: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::Login => &self.login,
            TaskKind::UserList => &self.user_list,
            TaskKind::UserLoad => &self.user_load,
            TaskKind::UserSave => &self.user_save,
            TaskKind::UserDelete => &self.user_delete,
            TaskKind::Notification => &self.notification,
            TaskKind::Redirect => &self.redirect,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Login => &mut self.login,
            TaskKind::UserList => &mut self.user_list,
            TaskKind::UserLoad => &mut self.user_load,
            TaskKind::UserSave => &mut self.user_save,
            TaskKind::UserDelete => &mut self.user_delete,
            TaskKind::Notification => &mut self.notification,
            TaskKind::Redirect => &mut self.redirect,
        }
    }

    pub fn is_running(&self, kind: TaskKind) -> bool {
        self.state(kind).is_running()
    }

    /// True while any network request is in flight (drives the spinner).
    pub fn is_any_request_running(&self) -> bool {
        self.login.is_running()
            || self.user_list.is_running()
            || self.user_load.is_running()
            || self.user_save.is_running()
            || self.user_delete.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_completion_is_rejected() {
        let mut seq = TaskSeq::default();
        let mut state = TaskState::default();

        let first = seq.next_id();
        state.begin(first);
        let second = seq.next_id();
        state.begin(second);

        assert!(!state.finish_if_active(first));
        assert!(state.is_running());
        assert!(state.finish_if_active(second));
        assert!(!state.is_running());
    }

    #[test]
    fn test_started_for_cleared_task_keeps_no_token() {
        let mut seq = TaskSeq::default();
        let mut state = TaskState::default();
        let id = seq.next_id();
        state.begin(id);
        assert!(state.clear().is_none());

        state.on_started(&TaskStarted {
            id,
            cancel: Some(CancellationToken::new()),
        });
        assert!(state.cancel.is_none());
    }

    #[test]
    fn test_clear_returns_token() {
        let mut state = TaskState::default();
        let id = TaskId(7);
        state.begin(id);
        state.on_started(&TaskStarted {
            id,
            cancel: Some(CancellationToken::new()),
        });

        let token = state.clear();
        assert!(token.is_some());
        assert!(!state.is_running());
    }
}
