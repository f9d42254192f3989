//! Bank advice models.
//!
//! A [`BankAdviceBatch`] instructs a bank to transfer net pay to every
//! employee account for one pay period.

use rust_decimal::Decimal;
use serde::Serialize;

use super::PayPeriod;

/// One transfer line of a bank advice batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceEntry {
    /// The employee ID; entries are ordered by this field.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The receiving bank.
    pub bank_name: String,
    /// The receiving account number.
    pub account_number: String,
    /// The amount to transfer.
    pub net_pay: Decimal,
}

/// A bank transfer batch for one pay period.
///
/// Built by [`build_advice`](crate::calculation::build_advice), which
/// guarantees one entry per employee ordered by employee ID ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankAdviceBatch {
    period: PayPeriod,
    entries: Vec<AdviceEntry>,
    total: Decimal,
}

impl BankAdviceBatch {
    /// Returns `None` if the entries' net pay cannot be summed.
    pub(crate) fn new(period: PayPeriod, entries: Vec<AdviceEntry>) -> Option<Self> {
        let total = entries
            .iter()
            .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.net_pay))?;
        Some(Self {
            period,
            entries,
            total,
        })
    }

    /// Returns the pay period of the batch.
    pub fn period(&self) -> PayPeriod {
        self.period
    }

    /// Returns the entries ordered by employee ID.
    pub fn entries(&self) -> &[AdviceEntry] {
        &self.entries
    }

    /// Returns the sum of all entries' net pay.
    pub fn total(&self) -> Decimal {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    fn entry(id: &str, net_pay: Decimal) -> AdviceEntry {
        AdviceEntry {
            employee_id: id.to_string(),
            employee_name: format!("Employee {}", id),
            bank_name: "HSBC Bank".to_string(),
            account_number: "1234".to_string(),
            net_pay,
        }
    }

    #[test]
    fn test_total_sums_net_pay() {
        let batch = BankAdviceBatch::new(
            PayPeriod::new(Month::June, 2023),
            vec![
                entry("EMP-1", Decimal::new(450000, 2)),
                entry("EMP-2", Decimal::new(-2550, 2)),
            ],
        )
        .unwrap();
        assert_eq!(batch.total(), Decimal::new(447450, 2));
    }

    #[test]
    fn test_empty_batch_total_is_zero() {
        let batch = BankAdviceBatch::new(PayPeriod::new(Month::June, 2023), vec![]).unwrap();
        assert_eq!(batch.total(), Decimal::ZERO);
        assert!(batch.entries().is_empty());
    }

    #[test]
    fn test_unrepresentable_total_is_refused() {
        let batch = BankAdviceBatch::new(
            PayPeriod::new(Month::June, 2023),
            vec![entry("EMP-1", Decimal::MAX), entry("EMP-2", Decimal::MAX)],
        );
        assert!(batch.is_none());
    }
}
