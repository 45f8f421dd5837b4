//! Outbound mail relay configuration.

use serde::{Deserialize, Serialize};

/// Settings for the HTTP mail relay used for order notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// When `false`, notifications are only logged.
    #[serde(default)]
    pub enabled: bool,
    /// Relay send endpoint.
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
    /// Bearer token for the relay API.
    #[serde(default)]
    pub api_token: String,
    /// Sender address.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Sender display name.
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            relay_url: default_relay_url(),
            api_token: String::new(),
            from_address: default_from_address(),
            from_name: default_from_name(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_relay_url() -> String {
    "https://send.api.mailtrap.io/api/send".to_string()
}

fn default_from_address() -> String {
    "no-reply@docesabor.com.br".to_string()
}

fn default_from_name() -> String {
    "Confeitaria Doce Sabor".to_string()
}

fn default_timeout() -> u64 {
    10
}
