//! Mail transport collaborator.
//!
//! The dispatcher hands email deliveries to a [`MailTransport`]. Network
//! delivery, retries and bounce handling all belong to the transport.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::error::TransportError;
use crate::models::Document;

/// A message handed to a mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// The recipient address, already syntax-checked.
    pub to: String,
    /// The subject line.
    pub subject: String,
    /// The document to attach.
    pub attachment: Document,
}

/// A service able to accept mail for delivery.
///
/// Implementations must be `Send + Sync` so a single transport can be
/// shared by concurrent deliveries and stored in axum application state.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Accepts a message for delivery.
    ///
    /// Returns the transport's identifier for the queued message.
    async fn send(&self, mail: OutgoingMail) -> Result<String, TransportError>;
}

/// A transport that only records hand-offs in the log.
///
/// Every message is accepted and given a fresh UUID as its message ID.
/// Used when no mail service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingTransport;

#[async_trait]
impl MailTransport for LoggingTransport {
    async fn send(&self, mail: OutgoingMail) -> Result<String, TransportError> {
        let message_id = Uuid::new_v4().to_string();
        info!(
            message_id = %message_id,
            to = %mail.to,
            subject = %mail.subject,
            attachment = %mail.attachment.filename,
            attachment_bytes = mail.attachment.len(),
            "Mail accepted by logging transport"
        );
        Ok(message_id)
    }
}
