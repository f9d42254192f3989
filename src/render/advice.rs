//! Bank advice CSV rendering.

use crate::models::{BankAdviceBatch, Document, PayPeriod};

use super::money::format_plain;

/// Column header row of a bank advice file.
pub const ADVICE_HEADER: &str = "employee_id,employee_name,bank_name,account_number,net_pay";

/// Returns the file name for a period's bank advice: `bank-advice-<month>-<year>.csv`.
pub fn advice_filename(period: PayPeriod) -> String {
    format!("bank-advice-{}.csv", period.slug())
}

/// Renders a bank advice batch as CSV.
///
/// One row per entry in batch order, net pay as a plain two-decimal number.
/// Fields containing a comma, double quote, CR or LF are quoted with inner
/// quotes doubled. Rows end with `\n`.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::{build_advice, compute};
/// use payslip_engine::models::{CompensationRecord, Month, PayPeriod};
/// use payslip_engine::render::render_advice;
/// use rust_decimal::Decimal;
///
/// let june = PayPeriod::new(Month::June, 2023);
/// let payslip = compute(&CompensationRecord::new("EMP-1", "Doe, John", june)
///     .with_bank("HSBC Bank", "XXXX-1234")
///     .with_earning("basic", Decimal::new(4500, 0))).unwrap();
/// let batch = build_advice(&[payslip], june).unwrap();
///
/// let document = render_advice(&batch);
/// assert_eq!(document.filename, "bank-advice-june-2023.csv");
/// assert_eq!(
///     String::from_utf8(document.bytes).unwrap(),
///     "employee_id,employee_name,bank_name,account_number,net_pay\n\
///      EMP-1,\"Doe, John\",HSBC Bank,XXXX-1234,4500.00\n"
/// );
/// ```
pub fn render_advice(batch: &BankAdviceBatch) -> Document {
    let mut csv = String::from(ADVICE_HEADER);
    csv.push('\n');

    for entry in batch.entries() {
        let row = [
            escape_field(&entry.employee_id),
            escape_field(&entry.employee_name),
            escape_field(&entry.bank_name),
            escape_field(&entry.account_number),
            format_plain(entry.net_pay),
        ];
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    Document::new(csv.into_bytes(), advice_filename(batch.period()), "text/csv")
}

fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
