//! HTTP mail relay client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};

use docesabor_core::config::MailConfig;
use docesabor_core::error::{AppError, ErrorKind};
use docesabor_core::result::AppResult;

use super::dispatcher::{MailDispatcher, MailMessage};

/// Sends mail through a JSON send API authenticated with a bearer token.
pub struct HttpMailRelay {
    client: Client,
    relay_url: String,
    api_token: String,
    from_address: String,
    from_name: String,
}

impl std::fmt::Debug for HttpMailRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpMailRelay")
            .field("relay_url", &self.relay_url)
            .field("from_address", &self.from_address)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct Mailbox<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: Mailbox<'a>,
    to: [Mailbox<'a>; 1],
    subject: &'a str,
    html: &'a str,
    category: &'static str,
}

impl HttpMailRelay {
    /// Build a relay client from mail configuration.
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build mail relay HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            client,
            relay_url: config.relay_url.clone(),
            api_token: config.api_token.clone(),
            from_address: config.from_address.clone(),
            from_name: config.from_name.clone(),
        })
    }

    fn request<'a>(&'a self, message: &'a MailMessage) -> SendRequest<'a> {
        SendRequest {
            from: Mailbox {
                email: &self.from_address,
                name: &self.from_name,
            },
            to: [Mailbox {
                email: &message.to_address,
                name: &message.to_name,
            }],
            subject: &message.subject,
            html: &message.html,
            category: "order-status",
        }
    }
}

#[async_trait]
impl MailDispatcher for HttpMailRelay {
    async fn send(&self, message: &MailMessage) -> AppResult<()> {
        let response = self
            .client
            .post(&self.relay_url)
            .bearer_auth(&self.api_token)
            .json(&self.request(message))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    "Mail relay request failed",
                    e,
                )
            })?;

        let status = response.status();
        if status.is_success() {
            info!(to = %message.to_address, subject = %message.subject, "Mail sent");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Mail relay rejected the message");
            Err(AppError::external_service(format!("Mail relay returned {status}")))
        }
    }
}
