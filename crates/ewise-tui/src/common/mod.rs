//! Shared leaf types for TUI features.
//!
//! This module must NOT import `UiEvent` or feature-specific state.

pub mod task;
pub mod text;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
pub use text::{display_width, pad_to_width, truncate_with_ellipsis};
