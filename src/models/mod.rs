//! Core data models for the Payslip Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod bank_advice;
mod compensation;
mod document;
mod pay_period;
mod payslip;

pub use bank_advice::{AdviceEntry, BankAdviceBatch};
pub use compensation::{BankDetails, CompensationItem, CompensationRecord};
pub use document::Document;
pub use pay_period::{Month, PayPeriod, UnknownMonth};
pub use payslip::{BreakdownLine, ComputedPayslip};
