use crate::input::TextField;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn toggle(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

/// Login form state. The in-flight flag lives in `Tasks::login`.
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginField,
}

impl LoginState {
    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}
