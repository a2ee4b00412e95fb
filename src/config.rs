//! Configuration handling for the TUI

use crate::mailer::DEFAULT_ENDPOINT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the EmailJS endpoint
pub const ENDPOINT_ENV: &str = "PORTFOLIO_EMAILJS_ENDPOINT";

const DEFAULT_SERVICE_ID: &str = "service_vosqg83";
const DEFAULT_TEMPLATE_ID: &str = "template_946frhs";
const DEFAULT_PUBLIC_KEY: &str = "lE1w_v1liEXZNF7jS";
const DEFAULT_RECIPIENT_NAME: &str = "Christopher Nwokwule";
const DEFAULT_RECIPIENT_EMAIL: &str = "christopher_webdev@outlook.com";
const DEFAULT_SEND_TIMEOUT_SECS: u64 = 15;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortfolioConfig {
    /// EmailJS send endpoint
    pub emailjs_endpoint: Option<String>,
    /// EmailJS service identifier
    pub emailjs_service_id: Option<String>,
    /// EmailJS template identifier
    pub emailjs_template_id: Option<String>,
    /// EmailJS public key
    pub emailjs_public_key: Option<String>,
    /// EmailJS private key, for accounts that require it
    pub emailjs_access_token: Option<String>,
    /// Name the message is addressed to
    pub recipient_name: Option<String>,
    /// Address the message is delivered to
    pub recipient_email: Option<String>,
    /// Seconds to wait for the provider; 0 waits indefinitely
    pub send_timeout_secs: Option<u64>,
    /// Catalog file replacing the built-in content
    pub catalog_path: Option<PathBuf>,
}

impl PortfolioConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "portfolio", "portfolio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "portfolio", "portfolio-tui")
            .map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: PortfolioConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded configuration from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Whether a config file is present on disk
    pub fn exists() -> bool {
        Self::config_path().is_some_and(|path| path.exists())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Endpoint to post messages to, honouring the environment override
    pub fn endpoint(&self) -> String {
        self.resolve_endpoint(std::env::var(ENDPOINT_ENV).ok())
    }

    fn resolve_endpoint(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|value| !value.is_empty())
            .or_else(|| self.emailjs_endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn service_id(&self) -> &str {
        self.emailjs_service_id
            .as_deref()
            .unwrap_or(DEFAULT_SERVICE_ID)
    }

    pub fn template_id(&self) -> &str {
        self.emailjs_template_id
            .as_deref()
            .unwrap_or(DEFAULT_TEMPLATE_ID)
    }

    pub fn public_key(&self) -> &str {
        self.emailjs_public_key
            .as_deref()
            .unwrap_or(DEFAULT_PUBLIC_KEY)
    }

    pub fn recipient_name(&self) -> &str {
        self.recipient_name
            .as_deref()
            .unwrap_or(DEFAULT_RECIPIENT_NAME)
    }

    pub fn recipient_email(&self) -> &str {
        self.recipient_email
            .as_deref()
            .unwrap_or(DEFAULT_RECIPIENT_EMAIL)
    }

    /// Send timeout, `None` when disabled
    pub fn send_timeout(&self) -> Option<Duration> {
        match self.send_timeout_secs.unwrap_or(DEFAULT_SEND_TIMEOUT_SECS) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
