//! Mail dispatcher abstraction.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use docesabor_core::result::AppResult;

/// A rendered e-mail ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    /// Recipient address.
    pub to_address: String,
    /// Recipient display name.
    pub to_name: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
}

/// Delivers e-mail.
#[async_trait]
pub trait MailDispatcher: Send + Sync + 'static {
    /// Send one message.
    async fn send(&self, message: &MailMessage) -> AppResult<()>;

    /// Whether messages actually leave the process.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Dispatcher used when mail is turned off. Logs and drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledMailer;

#[async_trait]
impl MailDispatcher for DisabledMailer {
    async fn send(&self, message: &MailMessage) -> AppResult<()> {
        debug!(
            to = %message.to_address,
            subject = %message.subject,
            "Mail disabled, message dropped"
        );
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
