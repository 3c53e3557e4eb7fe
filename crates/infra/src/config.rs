//! Configuration loading and representation.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable selecting the confirmation channel.
pub const NOTIFIER_ENV: &str = "ORDERDESK_NOTIFIER";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown notification channel {0:?} (expected \"email\" or \"sms\")")]
    UnknownChannel(String),
}

/// Confirmation channel used for new orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    #[default]
    Email,
    Sms,
}

impl NotificationChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "email",
            NotificationChannel::Sms => "sms",
        }
    }
}

impl core::fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationChannel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(NotificationChannel::Email),
            "sms" => Ok(NotificationChannel::Sms),
            _ => Err(ConfigError::UnknownChannel(s.to_string())),
        }
    }
}

/// Process configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub notification_channel: NotificationChannel,
}

impl AppConfig {
    pub fn new(notification_channel: NotificationChannel) -> Self {
        Self {
            notification_channel,
        }
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables. Unset or blank values fall back
    /// to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let notification_channel = match lookup(NOTIFIER_ENV) {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => NotificationChannel::default(),
        };
        Ok(Self {
            notification_channel,
        })
    }
}
