//! Request types for the Payslip Engine API.
//!
//! `POST /payslips/compute` and `POST /payslips/slip` take a bare
//! [`CompensationRecord`] body; the types here cover the remaining
//! endpoints and the slip query string.

use serde::{Deserialize, Serialize};

use crate::models::{CompensationRecord, PayPeriod};
use crate::render::SlipFormat;

/// Query string for `POST /payslips/slip`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SlipQuery {
    /// The document format; PDF when omitted.
    #[serde(default)]
    pub format: SlipFormat,
}

/// Request body for `POST /payslips/email`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRequest {
    /// The record to compute and render.
    pub record: CompensationRecord,
    /// The recipient address.
    pub address: String,
    /// The attachment format; PDF when omitted.
    #[serde(default)]
    pub format: SlipFormat,
}

/// Request body for `POST /bank-advice`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAdviceRequest {
    /// The period the batch is built for.
    pub period: PayPeriod,
    /// One record per employee, in any order.
    pub records: Vec<CompensationRecord>,
}
