//! Feature slices for the TUI (state/update/render per slice).

pub mod editor;
pub mod input;
pub mod login;
pub mod notification;
pub mod users;

use ewise_core::route::Route;

use crate::effects::UiEffect;

/// Transition returned by view handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTransition {
    Stay,
    Navigate(Route),
}

/// Update returned by view handlers.
#[derive(Debug)]
pub struct ViewUpdate {
    pub transition: ViewTransition,
    pub effects: Vec<UiEffect>,
}

impl ViewUpdate {
    fn new(transition: ViewTransition) -> Self {
        Self {
            transition,
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(ViewTransition::Stay)
    }

    pub fn navigate(route: Route) -> Self {
        Self::new(ViewTransition::Navigate(route))
    }

    #[must_use]
    pub fn with_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

impl From<Vec<UiEffect>> for ViewUpdate {
    fn from(effects: Vec<UiEffect>) -> Self {
        Self::stay().with_effects(effects)
    }
}
