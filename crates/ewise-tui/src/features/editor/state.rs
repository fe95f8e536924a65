use ewise_core::api::{User, UserUpdate};

use crate::input::TextField;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorField {
    #[default]
    FirstName,
    LastName,
    Email,
}

impl EditorField {
    pub fn next(self) -> Self {
        match self {
            EditorField::FirstName => EditorField::LastName,
            EditorField::LastName => EditorField::Email,
            EditorField::Email => EditorField::FirstName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EditorField::FirstName => EditorField::Email,
            EditorField::LastName => EditorField::FirstName,
            EditorField::Email => EditorField::LastName,
        }
    }
}

/// Editable copy of one user.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub id: u64,
    /// The record as loaded; shown read-only (avatar).
    pub original: Option<User>,
    pub first_name: TextField,
    pub last_name: TextField,
    pub email: TextField,
    pub focus: EditorField,
}

impl EditorState {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            original: None,
            first_name: TextField::default(),
            last_name: TextField::default(),
            email: TextField::default(),
            focus: EditorField::default(),
        }
    }

    pub fn populate(&mut self, user: User) {
        self.first_name.set(user.first_name.clone());
        self.last_name.set(user.last_name.clone());
        self.email.set(user.email.clone());
        self.original = Some(user);
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            EditorField::FirstName => &mut self.first_name,
            EditorField::LastName => &mut self.last_name,
            EditorField::Email => &mut self.email,
        }
    }

    pub fn to_update(&self) -> UserUpdate {
        UserUpdate {
            first_name: self.first_name.value().to_string(),
            last_name: self.last_name.value().to_string(),
            email: self.email.value().to_string(),
        }
    }
}
