//! Customer e-mail notifications.
//!
//! [`OrderNotifier`] turns order status changes into [`MailMessage`]s and
//! hands them to a [`MailDispatcher`] in the background.

pub mod dispatcher;
pub mod notifier;
pub mod relay;

pub use dispatcher::{DisabledMailer, MailDispatcher, MailMessage};
pub use notifier::OrderNotifier;
pub use relay::HttpMailRelay;
