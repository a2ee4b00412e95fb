//! Contact form submit lifecycle
//!
//! A submission runs in three steps so the caller never blocks on the
//! network while holding the form:
//!
//! 1. [`ContactWorkflow::begin_submit`] moves to `Sending` and snapshots the
//!    outbound request.
//! 2. [`PendingSubmission::deliver`] performs the single send call.
//! 3. [`ContactWorkflow::settle`] applies the outcome.
//!
//! [`ContactWorkflow::submit`] chains the three for callers that can await
//! in place.

use super::status::SubmissionStatus;
use super::ContactSettings;
use crate::mailer::{EmailRequest, MessageSender, SendError, TemplateParams};
use crate::state::{ContactField, ContactForm};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Errors returned by workflow operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("a submission is already in flight")]
    AlreadySending,

    #[error("unknown contact field {0:?}")]
    UnknownField(String),
}

/// A submission that has been started and still needs to be delivered
pub struct PendingSubmission {
    id: Uuid,
    request: EmailRequest,
    sender: Arc<dyn MessageSender>,
    timeout: Option<Duration>,
}

impl fmt::Debug for PendingSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSubmission")
            .field("id", &self.id)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl PendingSubmission {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn request(&self) -> &EmailRequest {
        &self.request
    }

    /// Call the send capability exactly once
    pub async fn deliver(self) -> SubmissionOutcome {
        let send = self.sender.send(&self.request);
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, send)
                .await
                .unwrap_or_else(|_| Err(SendError::Timeout(limit))),
            None => send.await,
        };
        SubmissionOutcome {
            id: self.id,
            result,
        }
    }
}

/// Result of delivering a [`PendingSubmission`]
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub id: Uuid,
    pub result: Result<(), SendError>,
}

/// Owns the contact form and drives it through the submit lifecycle
pub struct ContactWorkflow {
    form: ContactForm,
    status: SubmissionStatus,
    in_flight: Option<Uuid>,
    sender: Arc<dyn MessageSender>,
    settings: ContactSettings,
}

impl ContactWorkflow {
    pub fn new(sender: Arc<dyn MessageSender>, settings: ContactSettings) -> Self {
        Self {
            form: ContactForm::new(),
            status: SubmissionStatus::Idle,
            in_flight: None,
            sender,
            settings,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Text for the status line
    pub fn status_text(&self) -> &'static str {
        self.status.message()
    }

    pub fn is_sending(&self) -> bool {
        self.status.is_sending()
    }

    /// Replace one field's value. No validation is applied.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    /// Replace a field addressed by its wire name
    pub fn update_field_named(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), WorkflowError> {
        let field: ContactField = name
            .parse()
            .map_err(|_| WorkflowError::UnknownField(name.to_string()))?;
        self.update_field(field, value);
        Ok(())
    }

    /// Append a typed character to a field
    pub fn push_char(&mut self, field: ContactField, c: char) {
        self.form.field_mut(field).push_char(c);
    }

    /// Delete the last character of a field
    pub fn pop_char(&mut self, field: ContactField) {
        self.form.field_mut(field).pop_char();
    }

    /// Return a settled status to idle. Has no effect while sending.
    pub fn dismiss_status(&mut self) {
        if self.status.is_settled() {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// The provider request for the current form contents
    pub fn build_request(&self) -> EmailRequest {
        let settings = &self.settings;
        EmailRequest {
            service_id: settings.service_id.clone(),
            template_id: settings.template_id.clone(),
            public_key: settings.public_key.clone(),
            access_token: settings.access_token.clone(),
            template_params: TemplateParams {
                from_name: self.form.get(ContactField::Name).to_string(),
                to_name: settings.recipient_name.clone(),
                from_email: self.form.get(ContactField::Email).to_string(),
                from_phone: self.form.get(ContactField::Phone).to_string(),
                to_email: settings.recipient_email.clone(),
                message: self.form.get(ContactField::Message).to_string(),
            },
        }
    }

    /// Enter `Sending` and hand back the submission to deliver.
    /// Rejected while another submission is in flight.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, WorkflowError> {
        if self.status.is_sending() {
            tracing::debug!("Ignoring submit while a message is being sent");
            return Err(WorkflowError::AlreadySending);
        }

        let id = Uuid::new_v4();
        self.status = SubmissionStatus::Sending;
        self.in_flight = Some(id);
        tracing::info!(submission = %id, "Sending contact message");

        Ok(PendingSubmission {
            id,
            request: self.build_request(),
            sender: Arc::clone(&self.sender),
            timeout: self.settings.timeout,
        })
    }

    /// Apply a delivery outcome. Returns false when the outcome does not
    /// belong to the submission in flight and was ignored.
    pub fn settle(&mut self, outcome: SubmissionOutcome) -> bool {
        if self.in_flight != Some(outcome.id) {
            tracing::debug!(submission = %outcome.id, "Ignoring stale submission outcome");
            return false;
        }
        self.in_flight = None;

        match outcome.result {
            Ok(()) => {
                tracing::info!(submission = %outcome.id, "Contact message delivered");
                self.status = SubmissionStatus::Succeeded;
                self.form.clear();
            }
            Err(err) => {
                tracing::warn!(submission = %outcome.id, error = %err, "Contact message failed");
                self.status = SubmissionStatus::Failed(err.to_string());
            }
        }
        true
    }

    /// Send the current form and wait for the outcome
    pub async fn submit(&mut self) -> Result<(), WorkflowError> {
        let pending = self.begin_submit()?;
        let outcome = pending.deliver().await;
        self.settle(outcome);
        Ok(())
    }
}
