//! Calculation logic for the Payslip Engine.
//!
//! This module contains the payroll calculator, which turns compensation
//! records into payslips, and the bank advice builder, which aggregates
//! payslips for one pay period into a transfer batch.

mod bank_advice;
mod payroll;

pub use bank_advice::build_advice;
pub use payroll::{
    MONEY_DECIMAL_PLACES, PERCENTAGE_DECIMAL_PLACES, compute, percentage_of, round_money,
};
