use ewise_core::api::User;
use ewise_core::users::{Pagination, filter_users};

use crate::input::TextField;

/// Input mode of the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UsersMode {
    #[default]
    Browse,
    /// Keys edit the search term.
    Search,
    /// Waiting for y/n on deleting this id.
    ConfirmDelete(u64),
}

/// Loaded page plus client-side filter and selection.
#[derive(Debug, Clone, Default)]
pub struct UsersState {
    pub users: Vec<User>,
    pub pagination: Pagination,
    pub search: TextField,
    pub mode: UsersMode,
    /// Index into the filtered list.
    pub selected: usize,
    /// Set after the first successful load.
    pub loaded: bool,
}

impl UsersState {
    pub fn filtered(&self) -> Vec<&User> {
        filter_users(&self.users, self.search.value())
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.filtered().get(self.selected).copied()
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = self.filtered().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Keeps the selection inside the filtered list.
    pub fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
