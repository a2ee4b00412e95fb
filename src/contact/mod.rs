//! Contact form submission
//!
//! Owns the contact form, sends it through an injected [`MessageSender`]
//! and turns the outcome into a user-visible status.
//!
//! [`MessageSender`]: crate::mailer::MessageSender

mod status;
mod workflow;

pub use status::{StatusTone, SubmissionStatus, FAILURE_MESSAGE, THANK_YOU_MESSAGE};
pub use workflow::{ContactWorkflow, PendingSubmission, SubmissionOutcome, WorkflowError};

use crate::config::PortfolioConfig;
use std::time::Duration;

/// Fixed values sent with every message. These come from configuration,
/// never from the person filling in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub access_token: Option<String>,
    pub recipient_name: String,
    pub recipient_email: String,
    /// Upper bound on one send; `None` waits for the provider indefinitely
    pub timeout: Option<Duration>,
}

impl ContactSettings {
    pub fn from_config(config: &PortfolioConfig) -> Self {
        Self {
            service_id: config.service_id().to_string(),
            template_id: config.template_id().to_string(),
            public_key: config.public_key().to_string(),
            access_token: config.emailjs_access_token.clone(),
            recipient_name: config.recipient_name().to_string(),
            recipient_email: config.recipient_email().to_string(),
            timeout: config.send_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_default_config() {
        let settings = ContactSettings::from_config(&PortfolioConfig::default());
        assert_eq!(settings.service_id, "service_vosqg83");
        assert_eq!(settings.template_id, "template_946frhs");
        assert_eq!(settings.public_key, "lE1w_v1liEXZNF7jS");
        assert_eq!(settings.recipient_name, "Christopher Nwokwule");
        assert_eq!(settings.recipient_email, "christopher_webdev@outlook.com");
        assert!(settings.access_token.is_none());
        assert_eq!(settings.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_settings_follow_overrides() {
        let config = PortfolioConfig {
            recipient_name: Some("Someone Else".to_string()),
            emailjs_access_token: Some("private".to_string()),
            send_timeout_secs: Some(0),
            ..Default::default()
        };
        let settings = ContactSettings::from_config(&config);
        assert_eq!(settings.recipient_name, "Someone Else");
        assert_eq!(settings.access_token.as_deref(), Some("private"));
        assert_eq!(settings.timeout, None);
    }
}
