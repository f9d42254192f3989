//! Payroll calculation functionality.
//!
//! This module turns a [`CompensationRecord`] into a [`ComputedPayslip`]:
//! gross pay, total deductions, net pay, and a per-category breakdown with
//! each category's share of gross pay.

use std::collections::HashSet;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{BreakdownLine, CompensationItem, CompensationRecord, ComputedPayslip};

/// Decimal places kept for monetary amounts.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Decimal places kept for percentages of gross pay.
pub const PERCENTAGE_DECIMAL_PLACES: u32 = 1;

/// Rounds a monetary amount to two decimal places, half away from zero.
///
/// The result always carries exactly two decimal places.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(12345, 3)).to_string(), "12.35");
/// assert_eq!(round_money(Decimal::new(5000, 0)).to_string(), "5000.00");
/// assert_eq!(round_money(Decimal::new(-12345, 3)).to_string(), "-12.35");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}

/// Computes `amount` as a percentage of `gross`, to one decimal place.
///
/// Returns `0.0` when `gross` is zero instead of dividing by zero, and
/// `None` when the ratio is too large to represent.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::percentage_of;
/// use rust_decimal::Decimal;
///
/// let pct = percentage_of(Decimal::new(800, 0), Decimal::new(5000, 0)).unwrap();
/// assert_eq!(pct.to_string(), "16.0");
///
/// let pct = percentage_of(Decimal::new(800, 0), Decimal::ZERO).unwrap();
/// assert_eq!(pct.to_string(), "0.0");
///
/// assert_eq!(percentage_of(Decimal::MAX, Decimal::new(1, 2)), None);
/// ```
pub fn percentage_of(amount: Decimal, gross: Decimal) -> Option<Decimal> {
    let raw = if gross.is_zero() {
        Decimal::ZERO
    } else {
        amount
            .checked_div(gross)?
            .checked_mul(Decimal::ONE_HUNDRED)?
    };
    let mut rounded = raw.round_dp_with_strategy(
        PERCENTAGE_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(PERCENTAGE_DECIMAL_PLACES);
    Some(rounded)
}

/// Computes a payslip from a compensation record.
///
/// Every line amount is rounded to two decimal places, and gross pay and
/// total deductions are the sums of those rounded lines, so a slip's lines
/// always add up to its totals. Net pay is the exact difference of the two
/// totals and is allowed to be negative. Each percentage is the line's
/// unrounded amount over the unrounded gross, rounded on its own to one
/// decimal place.
///
/// # Errors
///
/// Returns `InvalidRecord` if:
/// - Any earnings or deductions amount is negative
/// - A category name is empty or appears twice in the same mapping
/// - The amounts are too large to sum
/// - A deduction is too large relative to gross pay to express as a percentage
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::compute;
/// use payslip_engine::models::{CompensationRecord, Month, PayPeriod};
/// use rust_decimal::Decimal;
///
/// let record = CompensationRecord::new("EMP-2023-001", "John Doe", PayPeriod::new(Month::June, 2023))
///     .with_earning("basic", Decimal::new(3500, 0))
///     .with_earning("houseRent", Decimal::new(800, 0))
///     .with_earning("cola", Decimal::new(400, 0))
///     .with_earning("utilities", Decimal::new(300, 0))
///     .with_deduction("tax", Decimal::new(500, 0));
///
/// let payslip = compute(&record).unwrap();
/// assert_eq!(payslip.gross_pay(), Decimal::new(5000, 0));
/// assert_eq!(payslip.total_deductions(), Decimal::new(500, 0));
/// assert_eq!(payslip.net_pay(), Decimal::new(4500, 0));
///
/// let percentages: Vec<String> = payslip
///     .breakdown()
///     .iter()
///     .map(|line| line.percentage_of_gross.to_string())
///     .collect();
/// assert_eq!(percentages, vec!["70.0", "16.0", "8.0", "6.0"]);
/// ```
pub fn compute(record: &CompensationRecord) -> EngineResult<ComputedPayslip> {
    validate_items(record, &record.earnings, "earning")?;
    validate_items(record, &record.deductions, "deduction")?;

    let raw_gross = checked_sum(record, record.earnings.iter().map(|e| e.amount))?;

    let breakdown = breakdown_lines(record, &record.earnings, raw_gross)?;
    let deductions = breakdown_lines(record, &record.deductions, raw_gross)?;

    let gross_pay = round_money(checked_sum(record, breakdown.iter().map(|l| l.amount))?);
    let total_deductions = round_money(checked_sum(record, deductions.iter().map(|l| l.amount))?);

    debug!(
        employee_id = %record.employee_id,
        period = %record.period,
        gross_pay = %gross_pay,
        total_deductions = %total_deductions,
        "Computed payslip"
    );

    Ok(ComputedPayslip::new(
        record.clone(),
        gross_pay,
        total_deductions,
        breakdown,
        deductions,
    ))
}

fn validate_items(
    record: &CompensationRecord,
    items: &[CompensationItem],
    kind: &str,
) -> EngineResult<()> {
    let mut seen = HashSet::new();

    for item in items {
        if item.category.trim().is_empty() {
            return Err(invalid(record, format!("{} category name is empty", kind)));
        }
        if item.amount.is_sign_negative() && !item.amount.is_zero() {
            return Err(invalid(
                record,
                format!("{} '{}' is negative ({})", kind, item.category, item.amount),
            ));
        }
        if !seen.insert(item.category.as_str()) {
            return Err(invalid(
                record,
                format!("{} category '{}' appears more than once", kind, item.category),
            ));
        }
    }

    Ok(())
}

fn checked_sum(
    record: &CompensationRecord,
    mut amounts: impl Iterator<Item = Decimal>,
) -> EngineResult<Decimal> {
    amounts
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or_else(|| invalid(record, "amounts are too large to sum".to_string()))
}

fn breakdown_lines(
    record: &CompensationRecord,
    items: &[CompensationItem],
    raw_gross: Decimal,
) -> EngineResult<Vec<BreakdownLine>> {
    items
        .iter()
        .map(|item| {
            let percentage_of_gross = percentage_of(item.amount, raw_gross).ok_or_else(|| {
                invalid(
                    record,
                    format!("'{}' is too large relative to gross pay", item.category),
                )
            })?;
            Ok(BreakdownLine {
                category: item.category.clone(),
                amount: round_money(item.amount),
                percentage_of_gross,
            })
        })
        .collect()
}

fn invalid(record: &CompensationRecord, message: String) -> EngineError {
    EngineError::InvalidRecord {
        employee_id: record.employee_id.clone(),
        message,
    }
}
