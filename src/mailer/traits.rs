//! Trait abstraction for the email delivery provider to enable mocking in tests

use super::{EmailRequest, SendError};
use async_trait::async_trait;

/// Delivers a contact message through the external provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send one message. Resolves once the provider has accepted or refused it.
    async fn send(&self, request: &EmailRequest) -> Result<(), SendError>;
}
