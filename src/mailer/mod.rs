//! Email delivery through the hosted EmailJS service

mod client;
mod traits;

pub use client::{EmailJsClient, DEFAULT_ENDPOINT};
pub use traits::MessageSender;

#[cfg(test)]
pub use traits::MockMessageSender;

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Why a message could not be delivered
#[derive(Debug, Error)]
pub enum SendError {
    #[error("request to email provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("email provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("email provider did not answer within {0:?}")]
    Timeout(Duration),
}

/// Values substituted into the provider-side email template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub to_name: String,
    pub from_email: String,
    pub from_phone: String,
    pub to_email: String,
    pub message: String,
}

/// Body of an EmailJS send call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    /// The account's public key
    #[serde(rename = "user_id")]
    pub public_key: String,
    /// Private key, only required when the account enforces it
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub template_params: TemplateParams,
}

#[cfg(test)]
impl EmailRequest {
    pub fn sample() -> Self {
        Self {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "public_test".to_string(),
            access_token: None,
            template_params: TemplateParams {
                from_name: "Ada".to_string(),
                to_name: "Owner".to_string(),
                from_email: "ada@example.com".to_string(),
                from_phone: "555-0100".to_string(),
                to_email: "owner@example.com".to_string(),
                message: "Hi".to_string(),
            },
        }
    }
}
