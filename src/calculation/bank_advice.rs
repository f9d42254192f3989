//! Bank advice batch construction.
//!
//! This module aggregates computed payslips for one pay period into a
//! [`BankAdviceBatch`] with one transfer entry per employee.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AdviceEntry, BankAdviceBatch, ComputedPayslip, PayPeriod};

/// Builds a bank advice batch for `period` from a set of payslips.
///
/// Entries are ordered by employee ID ascending regardless of input order,
/// so the same set of payslips always produces the same batch.
///
/// # Errors
///
/// - `PeriodMismatch` if any payslip belongs to a different period
/// - `DuplicateEmployee` if two payslips share an employee ID
/// - `AdviceTotalOverflow` if the summed net pay cannot be represented
///
/// Payslips are examined in employee ID order, so the reported error does
/// not depend on input order either.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::{build_advice, compute};
/// use payslip_engine::models::{CompensationRecord, Month, PayPeriod};
/// use rust_decimal::Decimal;
///
/// let june = PayPeriod::new(Month::June, 2023);
/// let second = compute(&CompensationRecord::new("EMP-2", "Jane Smith", june)
///     .with_earning("basic", Decimal::new(4000, 0))).unwrap();
/// let first = compute(&CompensationRecord::new("EMP-1", "John Doe", june)
///     .with_earning("basic", Decimal::new(3500, 0))).unwrap();
///
/// let batch = build_advice(&[second, first], june).unwrap();
/// assert_eq!(batch.entries()[0].employee_id, "EMP-1");
/// assert_eq!(batch.total(), Decimal::new(7500, 0));
/// ```
pub fn build_advice(payslips: &[ComputedPayslip], period: PayPeriod) -> EngineResult<BankAdviceBatch> {
    let mut ordered: Vec<&ComputedPayslip> = payslips.iter().collect();
    ordered.sort_by(|a, b| a.employee_id().cmp(b.employee_id()));

    if let Some(stray) = ordered.iter().find(|p| p.period() != period) {
        return Err(EngineError::PeriodMismatch {
            employee_id: stray.employee_id().to_string(),
            expected: period,
            found: stray.period(),
        });
    }

    let mut entries: BTreeMap<&str, AdviceEntry> = BTreeMap::new();
    for payslip in ordered {
        if entries.contains_key(payslip.employee_id()) {
            return Err(EngineError::DuplicateEmployee {
                employee_id: payslip.employee_id().to_string(),
            });
        }
        entries.insert(
            payslip.employee_id(),
            AdviceEntry {
                employee_id: payslip.employee_id().to_string(),
                employee_name: payslip.employee_name().to_string(),
                bank_name: payslip.bank().bank_name.clone(),
                account_number: payslip.bank().account_number.clone(),
                net_pay: payslip.net_pay(),
            },
        );
    }

    let batch = BankAdviceBatch::new(period, entries.into_values().collect())
        .ok_or(EngineError::AdviceTotalOverflow { period })?;
    debug!(
        period = %period,
        entries = batch.entries().len(),
        total = %batch.total(),
        "Built bank advice batch"
    );

    Ok(batch)
}
