//! Error types for the Payslip Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing, rendering and
//! delivering payroll documents.

use thiserror::Error;

use crate::models::PayPeriod;

/// The main error type for the Payslip Engine.
///
/// All fallible pipeline operations return this error type. Every variant
/// renders a distinct message so the presentation layer never has to show
/// a generic failure.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
///
/// let error = EngineError::DuplicateEmployee {
///     employee_id: "EMP-1".to_string(),
/// };
/// assert_eq!(error.to_string(), "Duplicate employee 'EMP-1' in bank advice batch");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A compensation record contained an invalid amount or category.
    #[error("Invalid compensation record for '{employee_id}': {message}")]
    InvalidRecord {
        /// The employee the record belongs to.
        employee_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A payslip could not be rendered into a document.
    #[error("Cannot render salary slip for '{employee_id}': {message}")]
    RenderError {
        /// The employee whose slip failed to render.
        employee_id: String,
        /// A description of the render failure.
        message: String,
    },

    /// A payslip passed to the advice builder belongs to another period.
    #[error("Payslip for '{employee_id}' is for {found}, expected {expected}")]
    PeriodMismatch {
        /// The employee whose payslip has the wrong period.
        employee_id: String,
        /// The period the batch is being built for.
        expected: PayPeriod,
        /// The period found on the payslip.
        found: PayPeriod,
    },

    /// The net pay of a bank advice batch is too large to sum.
    #[error("Bank advice total for {period} is too large to represent")]
    AdviceTotalOverflow {
        /// The period the batch is being built for.
        period: PayPeriod,
    },

    /// Two payslips in one advice batch share an employee ID.
    #[error("Duplicate employee '{employee_id}' in bank advice batch")]
    DuplicateEmployee {
        /// The repeated employee ID.
        employee_id: String,
    },

    /// An email delivery address is syntactically malformed.
    #[error("Invalid email address: '{address}'")]
    InvalidAddress {
        /// The rejected address.
        address: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Failure reported by a mail transport.
///
/// Transport failures are not pipeline errors: the dispatcher folds them
/// into [`DeliveryOutcome::TransportFailed`](crate::delivery::DeliveryOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The transport rejected or failed to accept the message.
    #[error("Mail transport rejected message: {0}")]
    Rejected(String),

    /// The transport did not answer within the allotted time.
    #[error("Mail transport timed out after {millis}ms")]
    TimedOut {
        /// The timeout that elapsed, in milliseconds.
        millis: u64,
    },
}
