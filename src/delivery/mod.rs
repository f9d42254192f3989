//! Delivery of rendered documents.
//!
//! A document is either handed back to the caller for local saving or
//! passed to a [`MailTransport`] as an email attachment.

mod address;
mod dispatcher;
mod transport;

pub use address::validate_address;
pub use dispatcher::{DEFAULT_TRANSPORT_TIMEOUT, DeliveryChannel, DeliveryOutcome, Dispatcher};
pub use transport::{LoggingTransport, MailTransport, OutgoingMail};
