//! Application state and core logic

use crate::catalog::Catalog;
use crate::contact::{ContactWorkflow, SubmissionOutcome, WorkflowError};
use crate::state::{AppState, ContactField, ContactFocus, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Window in which a second Ctrl+C quits
const CTRL_C_WINDOW: Duration = Duration::from_secs(1);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Portfolio content shown by the list views
    pub catalog: Catalog,
    /// Contact form and its submit lifecycle
    pub workflow: ContactWorkflow,
    /// Delivery outcomes from spawned send tasks
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(catalog: Catalog, workflow: ContactWorkflow) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            catalog,
            workflow,
            outcome_tx,
            outcome_rx,
            quit: false,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// A first Ctrl+C was pressed and a second one will quit
    pub fn quit_pending(&self) -> bool {
        self.last_ctrl_c
            .is_some_and(|at| at.elapsed() < CTRL_C_WINDOW)
    }

    /// Register a Ctrl+C press at `now`; quits when it follows another within the window
    fn press_ctrl_c(&mut self, now: Instant) {
        match self.last_ctrl_c {
            Some(at) if now.saturating_duration_since(at) < CTRL_C_WINDOW => {
                self.quit = true;
                self.last_ctrl_c = None;
            }
            _ => self.last_ctrl_c = Some(now),
        }
    }

    /// Apply every delivery outcome that has arrived. Returns how many were applied.
    pub fn poll_outcomes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if self.workflow.settle(outcome) {
                applied += 1;
            }
        }
        applied
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.press_ctrl_c(Instant::now());
            return;
        }
        self.last_ctrl_c = None;

        match self.state.current_view {
            View::Contact => self.handle_contact_key(key),
            View::Projects => self.handle_projects_key(key),
            View::Services | View::Technologies | View::Experience => {
                self.handle_list_key(key);
            }
        }
    }

    /// Keys shared by every non-form view. Returns true when consumed.
    fn handle_navigation_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char(c) if c.is_ascii_digit() => match View::from_digit(c) {
                Some(view) => self.state.navigate(view),
                None => return false,
            },
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.state.navigate(self.state.current_view.next());
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.state.navigate(self.state.current_view.prev());
            }
            _ => return false,
        }
        true
    }

    /// Handle keys in the Services, Technologies and Experience views
    fn handle_list_key(&mut self, key: KeyEvent) {
        if self.handle_navigation_key(key) {
            return;
        }
        let max = self.current_list_len().saturating_sub(1);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(max),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            _ => {}
        }
    }

    /// Handle keys in the Projects view
    fn handle_projects_key(&mut self, key: KeyEvent) {
        if self.handle_navigation_key(key) {
            return;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let count = self.catalog.projects().len();
                self.state.select_next_project(count);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev_project(),
            _ => {}
        }
    }

    /// Handle keys in the Contact view
    fn handle_contact_key(&mut self, key: KeyEvent) {
        let focus = self.state.contact_focus;
        match key.code {
            KeyCode::Esc => {
                if self.workflow.status().is_settled() {
                    self.workflow.dismiss_status();
                } else {
                    self.state.navigate(View::Services);
                }
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact();
            }
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SEND_MODIFIER) => {
                self.submit_contact();
            }
            KeyCode::Tab | KeyCode::Down => self.state.contact_focus = focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.state.contact_focus = focus.prev(),
            KeyCode::Enter => match focus {
                ContactFocus::SendButton => self.submit_contact(),
                ContactFocus::Field(ContactField::Message) => {
                    self.type_char(ContactField::Message, '\n');
                }
                ContactFocus::Field(_) => self.state.contact_focus = focus.next(),
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = focus.field() {
                    self.type_char(field, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = focus.field() {
                    if !self.workflow.is_sending() {
                        self.workflow.pop_char(field);
                    }
                }
            }
            _ => {}
        }
    }

    /// Typing is frozen while a message is in flight
    fn type_char(&mut self, field: ContactField, c: char) {
        if !self.workflow.is_sending() {
            self.workflow.push_char(field, c);
        }
    }

    /// Start a submission and deliver it on a background task
    fn submit_contact(&mut self) {
        match self.workflow.begin_submit() {
            Ok(pending) => {
                tracing::debug!(
                    submission = %pending.id(),
                    to = %pending.request().template_params.to_email,
                    "Delivering contact message in background"
                );
                let tx = self.outcome_tx.clone();
                tokio::spawn(async move {
                    let outcome = pending.deliver().await;
                    if tx.send(outcome).is_err() {
                        tracing::debug!("App closed before submission outcome arrived");
                    }
                });
            }
            Err(WorkflowError::AlreadySending) => {}
            Err(err) => tracing::warn!("Could not submit contact form: {err}"),
        }
    }

    /// Number of entries in the list shown by the current view
    fn current_list_len(&self) -> usize {
        match self.state.current_view {
            View::Services => self.catalog.services().len(),
            View::Technologies => self.catalog.technologies().len(),
            View::Experience => self.catalog.experiences().len(),
            View::Projects => self.catalog.projects().len(),
            View::Contact => 0,
        }
    }
}
