use std::time::{Duration, Instant};

use alloy_primitives::ChainId;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{Action, Context, Module, NotifyLevel, Route, Router};
use crate::domain::chain::ChainInfo;
use crate::domain::project::SubmissionRequest;
use crate::modules::post_project::{submission::FAILED_MESSAGE, PostProject, SubmissionOutcome};

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: NotifyLevel,
    pub since: Instant,
}

/// Blocking message the user has to dismiss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: NotifyLevel,
}

pub struct App {
    route: Route,
    /// Present only while the post-project page is mounted
    wizard: Option<PostProject>,
    pub ctx: Context,
    notice: Option<Notice>,
    status: Option<StatusMessage>,
    pending_submission: Option<SubmissionRequest>,
    mounts: u64,
    detect_requested: bool,
    pub help_open: bool,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_chains(crate::domain::chain::default_chains())
    }

    pub fn with_chains(chains: Vec<ChainInfo>) -> Self {
        Self {
            route: Route::Home,
            wizard: None,
            ctx: Context::new(chains),
            notice: None,
            status: None,
            pending_submission: None,
            mounts: 0,
            detect_requested: false,
            help_open: false,
            should_quit: false,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn wizard(&self) -> Option<&PostProject> {
        self.wizard.as_ref()
    }

    pub fn wizard_mut(&mut self) -> Option<&mut PostProject> {
        self.wizard.as_mut()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: NotifyLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, NotifyLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    /// Whether a text field or popup currently owns the keyboard
    pub fn captures_input(&self) -> bool {
        self.wizard
            .as_ref()
            .map(|wizard| wizard.captures_input())
            .unwrap_or(false)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notice = None;
            }
            return;
        }

        if self.help_open {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.help_open = false;
            }
            return;
        }

        if !self.captures_input() {
            match key.code {
                KeyCode::Char('q') => {
                    self.apply_action(Action::Quit);
                    return;
                }
                KeyCode::Char('?') => {
                    self.apply_action(Action::OpenHelp);
                    return;
                }
                KeyCode::Char('r') => {
                    self.apply_action(Action::DetectNetwork);
                    return;
                }
                _ => {}
            }
        }

        let action = match (self.route, self.wizard.as_mut()) {
            (Route::PostProject, Some(wizard)) => wizard.handle_key(key, &self.ctx),
            _ => match key.code {
                KeyCode::Char('p') | KeyCode::Enter => Action::Navigate(Route::PostProject),
                _ => Action::None,
            },
        };
        self.apply_action(action);
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(route) => self.navigate(route),
            Action::Notify(text, level) => self.set_status(text, level),
            Action::Submit(request) => {
                self.pending_submission = Some(request);
                self.set_status("Posting project…", NotifyLevel::Info);
            }
            // Chain picks are consumed by the wizard itself
            Action::SelectChain(_) => {}
            Action::CloseOverlay => {
                self.notice = None;
                self.help_open = false;
            }
            Action::OpenHelp => self.help_open = true,
            Action::DetectNetwork => {
                self.detect_requested = true;
                self.set_status("Detecting chain…", NotifyLevel::Info);
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Mounting the post-project page always starts a fresh wizard; leaving
    /// it drops the old one.
    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::debug!(from = self.route.path(), to = route.path(), "navigate");
        self.wizard = match route {
            Route::PostProject => {
                self.mounts += 1;
                Some(PostProject::with_mount_id(self.mounts))
            }
            Route::Home => None,
        };
        self.route = route;
    }

    /// Whether the main loop should ask the runtime for the current chain
    pub fn take_detect_request(&mut self) -> bool {
        std::mem::take(&mut self.detect_requested)
    }

    /// Submission the main loop should hand to the runtime
    pub fn take_submission_request(&mut self) -> Option<SubmissionRequest> {
        self.pending_submission.take()
    }

    pub fn apply_submission_finished(&mut self, outcome: SubmissionOutcome) {
        match self.wizard.as_mut() {
            Some(wizard) if wizard.mount_id() == outcome.mount_id => wizard.finish_submission(),
            Some(wizard) => tracing::debug!(
                reply = outcome.mount_id,
                current = wizard.mount_id(),
                "reply from an earlier visit, loading state kept"
            ),
            None => {}
        }
        self.status = None;
        self.notice = Some(Notice {
            text: outcome.message.clone(),
            level: outcome.level,
        });
        if let Some(route) = outcome.navigate_to {
            self.navigate(route);
        }
    }

    pub fn apply_network_detected(&mut self, chain_id: Option<ChainId>, source: String) {
        self.ctx.current_chain_id = chain_id;
        self.ctx.network_source = source;
        let label = self.ctx.current_chain_label();
        self.set_status(format!("Connected chain: {label}"), NotifyLevel::Info);
    }

    pub fn apply_runtime_error(&mut self, message: String) {
        tracing::warn!(%message, "runtime error");
        self.set_status(message, NotifyLevel::Error);
    }

    /// The worker died; any in-flight submission will never report back.
    pub fn apply_worker_lost(&mut self) {
        tracing::error!("runtime worker lost");
        let in_flight = self
            .wizard
            .as_ref()
            .map(|wizard| wizard.state().is_loading)
            .unwrap_or(false);
        if in_flight {
            if let Some(wizard) = self.wizard.as_mut() {
                wizard.finish_submission();
            }
            self.notice = Some(Notice {
                text: FAILED_MESSAGE.to_string(),
                level: NotifyLevel::Error,
            });
        }
        self.set_status("Background worker stopped", NotifyLevel::Error);
    }
}

impl Router for App {
    fn push(&mut self, path: &str) {
        match Route::from_path(path) {
            Some(route) => self.navigate(route),
            None => {
                tracing::warn!(path, "unknown route");
                self.set_status(format!("Unknown page: {path}"), NotifyLevel::Warn);
            }
        }
    }

    fn current_path(&self) -> &'static str {
        self.route.path()
    }
}
