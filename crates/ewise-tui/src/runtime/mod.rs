//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Spawned tasks send `UiEvent`s to `inbox_tx`
//! - The runtime drains `inbox_rx` each loop iteration
//!
//! Structure:
//! - `mod.rs`: Core runtime (`TuiRuntime`, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers/`: Effect handler implementations

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ewise_core::api::ApiClient;
use ewise_core::route::Route;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick interval while a request is in flight (spinner cadence).
pub const FRAME_DURATION: Duration = Duration::from_millis(50);

/// Poll duration when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(200);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    api: ApiClient,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a runtime and takes over the terminal.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(state: AppState, api: ApiClient) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            api,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Enters `initial` and runs until the user quits.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns an error if drawing or reading terminal input fails.
    pub fn run(&mut self, initial: Route) -> Result<()> {
        let effects = update::start(&mut self.state, initial);
        self.execute_effects(effects);
        self.event_loop()
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;
            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
                dirty = true;
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let tick_interval = if self.state.tui.tasks.is_any_request_running() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns `f` with a uniform `TaskStarted`/`TaskCompleted` lifecycle.
    ///
    /// The future is raced against a fresh cancel token; a canceled task
    /// completes with `UiEvent::Canceled`.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let cancel = CancellationToken::new();
        let started = TaskStarted {
            id,
            cancel: Some(cancel.clone()),
        };
        let _ = tx.send(UiEvent::TaskStarted { kind, started });
        tokio::spawn(async move {
            let inner = tokio::select! {
                () = cancel.cancelled() => UiEvent::Canceled,
                event = f() => event,
            };
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::CancelTask { kind, token } => {
                tracing::trace!(?kind, "canceling task");
                if let Some(cancel) = token {
                    cancel.cancel();
                }
            }
            UiEffect::ClearSession => {
                if let Err(e) = self.api.session().clear() {
                    tracing::warn!("Failed to clear session: {e:#}");
                }
            }
            UiEffect::Authenticate {
                task,
                email,
                password,
            } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::Login, task, move || {
                    handlers::authenticate(api, email, password)
                });
            }
            UiEffect::LoadUsers { task, page } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::UserList, task, move || {
                    handlers::load_users(api, page)
                });
            }
            UiEffect::LoadUser { task, id } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::UserLoad, task, move || {
                    handlers::load_user(api, id)
                });
            }
            UiEffect::SaveUser { task, id, update } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::UserSave, task, move || {
                    handlers::save_user(api, id, update)
                });
            }
            UiEffect::DeleteUser { task, id } => {
                let api = self.api.clone();
                self.spawn_task(TaskKind::UserDelete, task, move || {
                    handlers::delete_user(api, id)
                });
            }
            UiEffect::ScheduleDismiss {
                task,
                notification,
                after,
            } => {
                self.spawn_task(TaskKind::Notification, task, move || {
                    handlers::delay(after, UiEvent::NotificationExpired { id: notification })
                });
            }
            UiEffect::ScheduleRedirect { task, route, after } => {
                self.spawn_task(TaskKind::Redirect, task, move || {
                    handlers::delay(after, UiEvent::RedirectDue { route })
                });
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
