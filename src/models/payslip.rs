//! Computed payslip models.
//!
//! This module contains the [`ComputedPayslip`] type produced by the payroll
//! calculator, and the [`BreakdownLine`] rows used by the slip renderer and
//! by breakdown charts.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{BankDetails, CompensationRecord, PayPeriod};

/// One category of a payslip breakdown.
///
/// # Example
///
/// ```
/// use payslip_engine::models::BreakdownLine;
/// use rust_decimal::Decimal;
///
/// let line = BreakdownLine {
///     category: "basic".to_string(),
///     amount: Decimal::new(3500, 0),
///     percentage_of_gross: Decimal::new(700, 1),
/// };
/// assert_eq!(line.percentage_of_gross.to_string(), "70.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownLine {
    /// The category key.
    pub category: String,
    /// The amount for the category, to two decimal places.
    pub amount: Decimal,
    /// The amount as a share of gross pay, to one decimal place.
    pub percentage_of_gross: Decimal,
}

/// The result of running a [`CompensationRecord`] through the calculator.
///
/// A payslip cannot be constructed or modified outside the calculator;
/// all fields are exposed through accessors only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComputedPayslip {
    record: CompensationRecord,
    gross_pay: Decimal,
    total_deductions: Decimal,
    net_pay: Decimal,
    breakdown: Vec<BreakdownLine>,
    deductions: Vec<BreakdownLine>,
}

impl ComputedPayslip {
    pub(crate) fn new(
        record: CompensationRecord,
        gross_pay: Decimal,
        total_deductions: Decimal,
        breakdown: Vec<BreakdownLine>,
        deductions: Vec<BreakdownLine>,
    ) -> Self {
        Self {
            record,
            gross_pay,
            total_deductions,
            net_pay: gross_pay - total_deductions,
            breakdown,
            deductions,
        }
    }

    /// Returns the record this payslip was computed from.
    pub fn record(&self) -> &CompensationRecord {
        &self.record
    }

    /// Returns the employee ID.
    pub fn employee_id(&self) -> &str {
        &self.record.employee_id
    }

    /// Returns the employee's display name.
    pub fn employee_name(&self) -> &str {
        &self.record.employee_name
    }

    /// Returns the pay period.
    pub fn period(&self) -> PayPeriod {
        self.record.period
    }

    /// Returns the bank account details.
    pub fn bank(&self) -> &BankDetails {
        &self.record.bank
    }

    /// Returns the sum of all earnings.
    pub fn gross_pay(&self) -> Decimal {
        self.gross_pay
    }

    /// Returns the sum of all deductions.
    pub fn total_deductions(&self) -> Decimal {
        self.total_deductions
    }

    /// Returns gross pay minus total deductions. May be negative.
    pub fn net_pay(&self) -> Decimal {
        self.net_pay
    }

    /// Returns the earnings breakdown in record order.
    pub fn breakdown(&self) -> &[BreakdownLine] {
        &self.breakdown
    }

    /// Returns the deductions in record order.
    pub fn deductions(&self) -> &[BreakdownLine] {
        &self.deductions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    fn line(category: &str, amount: i64, pct_tenths: i64) -> BreakdownLine {
        BreakdownLine {
            category: category.to_string(),
            amount: Decimal::new(amount, 0),
            percentage_of_gross: Decimal::new(pct_tenths, 1),
        }
    }

    fn sample_payslip() -> ComputedPayslip {
        let record = CompensationRecord::new("EMP-1", "John Doe", PayPeriod::new(Month::June, 2023))
            .with_bank("HSBC Bank", "XXXX-XXXX-1234");
        ComputedPayslip::new(
            record,
            Decimal::new(1000, 0),
            Decimal::new(1200, 0),
            vec![line("basic", 1000, 1000)],
            vec![line("tax", 1200, 1200)],
        )
    }

    #[test]
    fn test_net_pay_is_gross_minus_deductions() {
        let payslip = sample_payslip();
        assert_eq!(payslip.net_pay(), Decimal::new(-200, 0));
    }

    #[test]
    fn test_accessors_expose_record_fields() {
        let payslip = sample_payslip();
        assert_eq!(payslip.employee_id(), "EMP-1");
        assert_eq!(payslip.employee_name(), "John Doe");
        assert_eq!(payslip.period(), PayPeriod::new(Month::June, 2023));
        assert_eq!(payslip.bank().bank_name, "HSBC Bank");
        assert_eq!(payslip.breakdown().len(), 1);
        assert_eq!(payslip.deductions()[0].category, "tax");
    }

    #[test]
    fn test_payslip_serialization() {
        let json = serde_json::to_value(sample_payslip()).unwrap();
        assert_eq!(json["gross_pay"], "1000");
        assert_eq!(json["net_pay"], "-200");
        assert_eq!(json["breakdown"][0]["percentage_of_gross"], "100.0");
        assert_eq!(json["record"]["employee_id"], "EMP-1");
    }
}
