//! Payslip Engine
//!
//! This crate computes monthly payslips from per-employee compensation
//! records, renders them as salary slips (PDF or plain text), builds bank
//! advice CSV files for a pay period, and delivers documents by local
//! download or email.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod delivery;
pub mod error;
pub mod models;
pub mod render;
