//! Compensation record model.
//!
//! This module defines the [`CompensationRecord`] struct, the input to the
//! payroll calculator for one employee and one pay period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// A single named amount in an earnings or deductions mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationItem {
    /// The category key (e.g., "basic", "houseRent", "tax").
    pub category: String,
    /// The amount for this category.
    pub amount: Decimal,
}

impl CompensationItem {
    /// Creates a new compensation item.
    pub fn new(category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// Bank account details used for salary transfer.
///
/// Both fields are opaque display strings and are never validated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BankDetails {
    /// The name of the bank (e.g., "HSBC Bank").
    pub bank_name: String,
    /// The account number, possibly masked (e.g., "XXXX-XXXX-1234").
    pub account_number: String,
}

/// Earnings and deductions for one employee for one pay period.
///
/// Earnings and deductions are open-ended category mappings kept in the
/// order they were supplied; that order is the order of the computed
/// breakdown and of the rendered slip.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{BankDetails, CompensationRecord, Month, PayPeriod};
/// use rust_decimal::Decimal;
///
/// let record = CompensationRecord::new("EMP-2023-001", "John Doe", PayPeriod::new(Month::June, 2023))
///     .with_earning("basic", Decimal::new(3500, 0))
///     .with_earning("houseRent", Decimal::new(800, 0))
///     .with_deduction("tax", Decimal::new(500, 0));
///
/// assert_eq!(record.earnings.len(), 2);
/// assert_eq!(record.deductions[0].category, "tax");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationRecord {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's department.
    #[serde(default)]
    pub department: String,
    /// The employee's position or job title.
    #[serde(default)]
    pub position: String,
    /// The pay period this record covers.
    pub period: PayPeriod,
    /// Earnings by category, in display order.
    #[serde(default)]
    pub earnings: Vec<CompensationItem>,
    /// Deductions by category, in display order.
    #[serde(default)]
    pub deductions: Vec<CompensationItem>,
    /// The bank account net pay is transferred to.
    #[serde(default)]
    pub bank: BankDetails,
}

impl CompensationRecord {
    /// Creates a record with no earnings, deductions or bank details.
    pub fn new(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        period: PayPeriod,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            department: String::new(),
            position: String::new(),
            period,
            earnings: Vec::new(),
            deductions: Vec::new(),
            bank: BankDetails::default(),
        }
    }

    /// Sets the department and position.
    pub fn with_role(mut self, department: impl Into<String>, position: impl Into<String>) -> Self {
        self.department = department.into();
        self.position = position.into();
        self
    }

    /// Sets the bank details.
    pub fn with_bank(
        mut self,
        bank_name: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        self.bank = BankDetails {
            bank_name: bank_name.into(),
            account_number: account_number.into(),
        };
        self
    }

    /// Appends an earnings category.
    pub fn with_earning(mut self, category: impl Into<String>, amount: Decimal) -> Self {
        self.earnings.push(CompensationItem::new(category, amount));
        self
    }

    /// Appends a deductions category.
    pub fn with_deduction(mut self, category: impl Into<String>, amount: Decimal) -> Self {
        self.deductions.push(CompensationItem::new(category, amount));
        self
    }
}
