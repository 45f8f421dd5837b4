//! Order status e-mails.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::warn;

use docesabor_entity::order::OrderDetails;

use super::dispatcher::{MailDispatcher, MailMessage};

/// Sends a status e-mail to the customer after each order transition.
#[derive(Clone)]
pub struct OrderNotifier {
    dispatcher: Arc<dyn MailDispatcher>,
}

impl std::fmt::Debug for OrderNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderNotifier")
            .field("enabled", &self.dispatcher.is_enabled())
            .finish()
    }
}

impl OrderNotifier {
    /// Creates a notifier over the given dispatcher.
    pub fn new(dispatcher: Arc<dyn MailDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Render the status e-mail for an order.
    pub fn compose(order: &OrderDetails) -> MailMessage {
        let status = order.order.status;
        let observations = match order.order.observations.as_deref() {
            Some(text) if !text.trim().is_empty() => escape_html(text),
            _ => "No observations.".to_string(),
        };

        let html = format!(
            "<h2>Confeitaria Doce Sabor</h2>\
             <p>Hello, {name}!</p>\
             <p>Your order #{id} is now <strong>{status}</strong>.</p>\
             <p>Cake: {cake}</p>\
             <p>Quantity: {quantity}</p>\
             <p>Observations: {observations}</p>\
             <p>Thank you for ordering with us.</p>",
            name = escape_html(&order.customer_name),
            id = order.order.id,
            cake = escape_html(&order.cake_name),
            quantity = order.order.quantity,
        );

        MailMessage {
            to_address: order.customer_email.clone(),
            to_name: order.customer_name.clone(),
            subject: format!("Order update: {status}"),
            html,
        }
    }

    /// Send the status e-mail in the background.
    ///
    /// Delivery failures are logged and never reach the caller.
    pub fn notify_status_change(&self, order: &OrderDetails) -> JoinHandle<()> {
        let dispatcher = self.dispatcher.clone();
        let order_id = order.order.id;
        let message = Self::compose(order);
        tokio::spawn(async move {
            if let Err(e) = dispatcher.send(&message).await {
                warn!(order_id, error = %e, "Order status e-mail not delivered");
            }
        })
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
