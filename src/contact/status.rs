//! Submission status of the contact form

/// Shown after the provider accepted the message
pub const THANK_YOU_MESSAGE: &str = "Thank you! I will get back to you as soon as possible.";

/// Shown for every kind of delivery failure
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Where the contact form is in its submit lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    /// Delivery failed. The reason is kept for diagnostics and never displayed.
    Failed(String),
}

/// How the status line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
}

impl SubmissionStatus {
    /// User-visible status text; empty while idle or sending
    pub fn message(&self) -> &'static str {
        match self {
            Self::Idle | Self::Sending => "",
            Self::Succeeded => THANK_YOU_MESSAGE,
            Self::Failed(_) => FAILURE_MESSAGE,
        }
    }

    pub fn tone(&self) -> Option<StatusTone> {
        match self {
            Self::Idle | Self::Sending => None,
            Self::Succeeded => Some(StatusTone::Success),
            Self::Failed(_) => Some(StatusTone::Error),
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// Succeeded or failed, waiting for the next submit
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_messages() {
        assert_eq!(SubmissionStatus::Idle.message(), "");
        assert_eq!(SubmissionStatus::Sending.message(), "");
        assert_eq!(
            SubmissionStatus::Succeeded.message(),
            "Thank you! I will get back to you as soon as possible."
        );
        assert_eq!(
            SubmissionStatus::Failed("timeout".to_string()).message(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn test_failure_reason_not_in_message() {
        let status = SubmissionStatus::Failed("HTTP 412 bad template".to_string());
        assert!(!status.message().contains("412"));
    }

    #[test]
    fn test_tone_comes_from_tag() {
        assert_eq!(SubmissionStatus::Idle.tone(), None);
        assert_eq!(SubmissionStatus::Sending.tone(), None);
        assert_eq!(SubmissionStatus::Succeeded.tone(), Some(StatusTone::Success));
        // A failure whose reason mentions "Thank you" is still an error
        assert_eq!(
            SubmissionStatus::Failed("Thank you".to_string()).tone(),
            Some(StatusTone::Error)
        );
    }

    #[test]
    fn test_settled_states() {
        assert!(!SubmissionStatus::Idle.is_settled());
        assert!(!SubmissionStatus::Sending.is_settled());
        assert!(SubmissionStatus::Succeeded.is_settled());
        assert!(SubmissionStatus::Failed(String::new()).is_settled());
    }
}
