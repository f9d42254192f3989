//! Document delivery dispatching.
//!
//! The [`Dispatcher`] takes a rendered document and a destination channel
//! and performs a single delivery attempt, reporting the result as a
//! [`DeliveryOutcome`].

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EngineResult, TransportError};
use crate::models::Document;

use super::address::validate_address;
use super::transport::{MailTransport, OutgoingMail};

/// Default upper bound on a single transport attempt.
pub const DEFAULT_TRANSPORT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where a document should be delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeliveryChannel {
    /// Hand the document back to the caller for local saving.
    LocalDownload,
    /// Send the document as an email attachment.
    Email {
        /// The recipient address.
        address: String,
    },
}

/// The observable result of a delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The document is handed back to the caller for local persistence.
    Delivered(Document),
    /// The mail transport accepted the document for delivery.
    Queued {
        /// The recipient address.
        address: String,
        /// The transport's identifier for the queued message.
        message_id: String,
    },
    /// The mail transport failed or did not answer in time.
    TransportFailed {
        /// The recipient address.
        address: String,
        /// What the transport reported.
        reason: TransportError,
    },
}

impl DeliveryOutcome {
    /// Returns true unless the transport failed.
    pub fn is_success(&self) -> bool {
        !matches!(self, DeliveryOutcome::TransportFailed { .. })
    }
}

/// Dispatches documents to their delivery channel.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use payslip_engine::delivery::{DeliveryChannel, DeliveryOutcome, Dispatcher, LoggingTransport};
/// use payslip_engine::models::Document;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let dispatcher = Dispatcher::new(Arc::new(LoggingTransport));
/// let document = Document::new(b"%PDF".to_vec(), "slip.pdf", "application/pdf");
///
/// let outcome = dispatcher
///     .deliver(document, &DeliveryChannel::Email { address: "john.doe@example.com".into() })
///     .await
///     .unwrap();
/// assert!(matches!(outcome, DeliveryOutcome::Queued { .. }));
/// # }
/// ```
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn MailTransport>,
    timeout: Duration,
}

impl Dispatcher {
    /// Creates a dispatcher sending email through `transport`.
    pub fn new(transport: Arc<dyn MailTransport>) -> Self {
        Self {
            transport,
            timeout: DEFAULT_TRANSPORT_TIMEOUT,
        }
    }

    /// Sets the upper bound on a single transport attempt.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the transport attempt timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Delivers a document to a channel.
    ///
    /// - `LocalDownload` always yields `Delivered` with the document.
    /// - `Email` checks the address, then makes exactly one transport
    ///   attempt. A transport failure or timeout is reported as
    ///   `TransportFailed`, not as an error. There are no retries.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` for a malformed email address; the
    /// transport is not called in that case.
    pub async fn deliver(
        &self,
        document: Document,
        channel: &DeliveryChannel,
    ) -> EngineResult<DeliveryOutcome> {
        let address = match channel {
            DeliveryChannel::LocalDownload => {
                info!(filename = %document.filename, bytes = document.len(), "Document ready for download");
                return Ok(DeliveryOutcome::Delivered(document));
            }
            DeliveryChannel::Email { address } => address,
        };

        validate_address(address)?;

        let filename = document.filename.clone();
        let mail = OutgoingMail {
            to: address.clone(),
            subject: format!("Your document: {}", filename),
            attachment: document,
        };

        let result = match tokio::time::timeout(self.timeout, self.transport.send(mail)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::TimedOut {
                millis: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        };

        match result {
            Ok(message_id) => {
                info!(
                    to = %address,
                    filename = %filename,
                    message_id = %message_id,
                    "Document queued for email delivery"
                );
                Ok(DeliveryOutcome::Queued {
                    address: address.clone(),
                    message_id,
                })
            }
            Err(reason) => {
                warn!(
                    to = %address,
                    filename = %filename,
                    error = %reason,
                    "Email delivery failed"
                );
                Ok(DeliveryOutcome::TransportFailed {
                    address: address.clone(),
                    reason,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<OutgoingMail>>,
    }

    impl RecordingTransport {
        fn sent(&self) -> Vec<OutgoingMail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MailTransport for RecordingTransport {
        async fn send(&self, mail: OutgoingMail) -> Result<String, TransportError> {
            let mut sent = self.sent.lock().unwrap();
            sent.push(mail);
            Ok(format!("msg-{}", sent.len()))
        }
    }

    struct RejectingTransport;

    #[async_trait]
    impl MailTransport for RejectingTransport {
        async fn send(&self, _mail: OutgoingMail) -> Result<String, TransportError> {
            Err(TransportError::Rejected("mailbox unavailable".to_string()))
        }
    }

    struct StalledTransport;

    #[async_trait]
    impl MailTransport for StalledTransport {
        async fn send(&self, _mail: OutgoingMail) -> Result<String, TransportError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("never".to_string())
        }
    }

    fn document() -> Document {
        Document::new(
            b"%PDF-1.4".to_vec(),
            "salary-slip-john-doe-june-2023.pdf",
            "application/pdf",
        )
    }

    fn email(address: &str) -> DeliveryChannel {
        DeliveryChannel::Email {
            address: address.to_string(),
        }
    }

    #[tokio::test]
    async fn test_local_download_returns_document() {
        let transport = Arc::new(RecordingTransport::default());
        let dispatcher = Dispatcher::new(transport.clone());

        let outcome = dispatcher
            .deliver(document(), &DeliveryChannel::LocalDownload)
            .await
            .unwrap();

        assert_eq!(outcome, DeliveryOutcome::Delivered(document()));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_email_is_queued_with_attachment() {
        let transport = Arc::new(RecordingTransport::default());
        let dispatcher = Dispatcher::new(transport.clone());

        let outcome = dispatcher
            .deliver(document(), &email("john.doe@example.com"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            DeliveryOutcome::Queued {
                address: "john.doe@example.com".to_string(),
                message_id: "msg-1".to_string(),
            }
        );
        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "john.doe@example.com");
        assert_eq!(sent[0].attachment, document());
        assert!(sent[0].subject.contains("salary-slip-john-doe-june-2023.pdf"));
    }

    #[tokio::test]
    async fn test_invalid_address_fails_before_transport() {
        let transport = Arc::new(RecordingTransport::default());
        let dispatcher = Dispatcher::new(transport.clone());

        let result = dispatcher.deliver(document(), &email("not-an-address")).await;

        match result {
            Err(EngineError::InvalidAddress { address }) => assert_eq!(address, "not-an-address"),
            other => panic!("Expected InvalidAddress, got {:?}", other),
        }
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_an_outcome() {
        let dispatcher = Dispatcher::new(Arc::new(RejectingTransport));

        let outcome = dispatcher
            .deliver(document(), &email("john.doe@example.com"))
            .await
            .unwrap();

        assert!(!outcome.is_success());
        assert_eq!(
            outcome,
            DeliveryOutcome::TransportFailed {
                address: "john.doe@example.com".to_string(),
                reason: TransportError::Rejected("mailbox unavailable".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_stalled_transport_times_out() {
        let dispatcher =
            Dispatcher::new(Arc::new(StalledTransport)).with_timeout(Duration::from_millis(20));

        let outcome = dispatcher
            .deliver(document(), &email("john.doe@example.com"))
            .await
            .unwrap();

        match outcome {
            DeliveryOutcome::TransportFailed { reason, .. } => {
                assert_eq!(reason, TransportError::TimedOut { millis: 20 });
                assert_eq!(reason.to_string(), "Mail transport timed out after 20ms");
            }
            other => panic!("Expected TransportFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_each_delivery_is_one_attempt() {
        let transport = Arc::new(RecordingTransport::default());
        let dispatcher = Dispatcher::new(transport.clone());

        for _ in 0..3 {
            dispatcher
                .deliver(document(), &email("john.doe@example.com"))
                .await
                .unwrap();
        }
        assert_eq!(transport.sent().len(), 3);
    }

    #[test]
    fn test_default_timeout() {
        let dispatcher = Dispatcher::new(Arc::new(RejectingTransport));
        assert_eq!(dispatcher.timeout(), DEFAULT_TRANSPORT_TIMEOUT);
    }

    #[test]
    fn test_channel_deserialization() {
        let channel: DeliveryChannel =
            serde_json::from_str(r#"{"type": "email", "address": "a@b.co"}"#).unwrap();
        assert_eq!(channel, email("a@b.co"));

        let channel: DeliveryChannel =
            serde_json::from_str(r#"{"type": "local_download"}"#).unwrap();
        assert_eq!(channel, DeliveryChannel::LocalDownload);
    }
}
