//! Salary slip rendering.
//!
//! This module lays out a [`ComputedPayslip`] as a fixed-section salary slip
//! and encodes it as PDF or plain text.

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{BreakdownLine, ComputedPayslip, Document, PayPeriod};

use super::money::format_money;
use super::pdf::encode_pdf;

/// Width in characters of the slip layout.
pub const SLIP_WIDTH: usize = 72;

/// Output format of a rendered salary slip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlipFormat {
    /// A single-page A4 PDF.
    #[default]
    Pdf,
    /// Print-friendly plain text with the same layout.
    Text,
}

impl SlipFormat {
    /// Returns the file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            SlipFormat::Pdf => "pdf",
            SlipFormat::Text => "txt",
        }
    }

    /// Returns the MIME type for the format.
    pub fn mime_type(self) -> &'static str {
        match self {
            SlipFormat::Pdf => "application/pdf",
            SlipFormat::Text => "text/plain; charset=utf-8",
        }
    }
}

/// Returns the file name for an employee's salary slip.
///
/// Every whitespace run in the name, leading and trailing ones included,
/// becomes a single hyphen and the result is lower-cased:
/// `salary-slip-<name>-<month>-<year>.<ext>`.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{Month, PayPeriod};
/// use payslip_engine::render::{slip_filename, SlipFormat};
///
/// let name = slip_filename("John  Doe", PayPeriod::new(Month::June, 2023), SlipFormat::Pdf);
/// assert_eq!(name, "salary-slip-john-doe-june-2023.pdf");
/// ```
pub fn slip_filename(employee_name: &str, period: PayPeriod, format: SlipFormat) -> String {
    let mut name = String::with_capacity(employee_name.len());
    let mut in_whitespace = false;
    for c in employee_name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('-');
            }
            in_whitespace = true;
        } else {
            name.push(c);
            in_whitespace = false;
        }
    }
    let name = name.to_lowercase();
    format!("salary-slip-{}-{}.{}", name, period.slug(), format.extension())
}

/// Renders payslips into salary slip documents.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::compute;
/// use payslip_engine::config::RenderConfig;
/// use payslip_engine::models::{CompensationRecord, Month, PayPeriod};
/// use payslip_engine::render::{SlipFormat, SlipRenderer};
/// use rust_decimal::Decimal;
///
/// let record = CompensationRecord::new("EMP-1", "John Doe", PayPeriod::new(Month::June, 2023))
///     .with_earning("basic", Decimal::new(3500, 0));
/// let payslip = compute(&record).unwrap();
///
/// let renderer = SlipRenderer::new(RenderConfig::default());
/// let document = renderer.render(&payslip, SlipFormat::Text).unwrap();
/// assert_eq!(document.filename, "salary-slip-john-doe-june-2023.txt");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlipRenderer {
    config: RenderConfig,
}

impl SlipRenderer {
    /// Creates a renderer using the given employer and label configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Returns the renderer's configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders a payslip into a document.
    ///
    /// The output is a pure function of the payslip, the format and the
    /// renderer configuration.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the payslip has no earnings lines.
    pub fn render(&self, payslip: &ComputedPayslip, format: SlipFormat) -> EngineResult<Document> {
        let lines = self.layout(payslip)?;

        let bytes = match format {
            SlipFormat::Pdf => encode_pdf(&lines),
            SlipFormat::Text => {
                let mut text = lines.join("\n");
                text.push('\n');
                text.into_bytes()
            }
        };

        Ok(Document::new(
            bytes,
            slip_filename(payslip.employee_name(), payslip.period(), format),
            format.mime_type(),
        ))
    }

    /// Lays out the slip as lines of at most [`SLIP_WIDTH`] columns, except
    /// where a single value is itself wider.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the payslip has no earnings lines.
    pub fn layout(&self, payslip: &ComputedPayslip) -> EngineResult<Vec<String>> {
        if payslip.breakdown().is_empty() {
            return Err(EngineError::RenderError {
                employee_id: payslip.employee_id().to_string(),
                message: "payslip has no earnings to render".to_string(),
            });
        }

        let employer = self.config.employer();
        let symbol = employer.currency_symbol.as_str();
        let record = payslip.record();
        let heavy_rule = "=".repeat(SLIP_WIDTH);
        let light_rule = "-".repeat(SLIP_WIDTH);

        let mut lines = Vec::new();

        // Header
        lines.push(employer.name.clone());
        lines.push(columns(&employer.document_title, &payslip.period().to_string()));
        lines.push(heavy_rule.clone());

        // Employee identity
        for (label, value) in [
            ("Employee", record.employee_name.as_str()),
            ("Employee ID", record.employee_id.as_str()),
            ("Department", record.department.as_str()),
            ("Position", record.position.as_str()),
            ("Bank", record.bank.bank_name.as_str()),
            ("Account Number", record.bank.account_number.as_str()),
        ] {
            lines.push(format!("{:<18}{}", format!("{}:", label), value));
        }
        lines.push(light_rule.clone());

        // Earnings
        lines.push("SALARY DETAILS".to_string());
        self.push_items(&mut lines, payslip.breakdown(), symbol);
        lines.push(light_rule.clone());
        lines.push(columns("Total Earnings", &format_money(payslip.gross_pay(), symbol)));
        lines.push(String::new());

        // Deductions
        lines.push("DEDUCTIONS".to_string());
        if payslip.deductions().is_empty() {
            lines.push("No deductions".to_string());
        } else {
            self.push_items(&mut lines, payslip.deductions(), symbol);
        }
        lines.push(light_rule);
        lines.push(columns(
            "Total Deductions",
            &format_money(payslip.total_deductions(), symbol),
        ));
        lines.push(String::new());

        // Net pay
        lines.push(heavy_rule.clone());
        lines.push(columns("NET PAY", &format_money(payslip.net_pay(), symbol)));
        lines.push(heavy_rule);

        // Footer
        lines.push(String::new());
        lines.extend(employer.disclaimer.iter().cloned());
        lines.push(format!(
            "For any questions regarding your salary slip, please contact HR at {}",
            employer.hr_contact
        ));

        Ok(lines)
    }

    fn push_items(&self, lines: &mut Vec<String>, items: &[BreakdownLine], symbol: &str) {
        for item in items {
            lines.push(columns(
                &self.config.label_for(&item.category),
                &format_money(item.amount, symbol),
            ));
        }
    }
}

/// Left-aligns `left` and right-aligns `right` within the slip width,
/// keeping at least one space between them.
fn columns(left: &str, right: &str) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = SLIP_WIDTH.saturating_sub(used).max(1);
    format!("{}{}{}", left, " ".repeat(gap), right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute;
    use crate::config::EmployerProfile;
    use crate::models::{CompensationRecord, Month};
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_record() -> CompensationRecord {
        CompensationRecord::new("EMP-2023-001", "John Doe", PayPeriod::new(Month::June, 2023))
            .with_role("Engineering", "Senior Developer")
            .with_bank("HSBC Bank", "XXXX-XXXX-1234")
            .with_earning("basic", dec("3500"))
            .with_earning("houseRent", dec("800"))
            .with_earning("cola", dec("400"))
            .with_earning("utilities", dec("300"))
            .with_deduction("tax", dec("500"))
    }

    fn render_text(record: &CompensationRecord) -> String {
        let payslip = compute(record).unwrap();
        let doc = SlipRenderer::default()
            .render(&payslip, SlipFormat::Text)
            .unwrap();
        String::from_utf8(doc.bytes).unwrap()
    }

    #[test]
    fn test_text_slip_layout() {
        let text = render_text(&sample_record());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "PayMaster Inc.");
        assert!(lines[1].starts_with("Official Salary Slip"));
        assert!(lines[1].ends_with("June 2023"));
        assert_eq!(lines[1].len(), SLIP_WIDTH);
        assert!(text.contains("Employee:         John Doe\n"));
        assert!(text.contains("Employee ID:      EMP-2023-001\n"));
        assert!(text.contains("Account Number:   XXXX-XXXX-1234\n"));
    }

    #[test]
    fn test_text_slip_amounts() {
        let text = render_text(&sample_record());
        assert!(text.contains(&columns("Basic Salary", "$3,500.00")));
        assert!(text.contains(&columns("House Rent Allowance", "$800.00")));
        assert!(text.contains(&columns("Cost of Living Adjustment", "$400.00")));
        assert!(text.contains(&columns("Utilities Allowance", "$300.00")));
        assert!(text.contains(&columns("Total Earnings", "$5,000.00")));
        assert!(text.contains(&columns("Income Tax", "$500.00")));
        assert!(text.contains(&columns("Total Deductions", "$500.00")));
        assert!(text.contains(&columns("NET PAY", "$4,500.00")));
    }

    #[test]
    fn test_sections_appear_in_order() {
        let text = render_text(&sample_record());
        let order = [
            "PayMaster Inc.",
            "Employee:",
            "SALARY DETAILS",
            "Total Earnings",
            "DEDUCTIONS",
            "Total Deductions",
            "NET PAY",
            "computer-generated",
            "hr@paymaster.com",
        ];
        let positions: Vec<usize> = order.iter().map(|s| text.find(s).unwrap()).collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_negative_net_pay_is_rendered_with_sign() {
        let record = CompensationRecord::new("EMP-9", "Jane Roe", PayPeriod::new(Month::May, 2024))
            .with_earning("basic", dec("1000"))
            .with_deduction("tax", dec("1250.50"));
        let text = render_text(&record);
        assert!(text.contains(&columns("NET PAY", "-$250.50")));
    }

    #[test]
    fn test_missing_deductions_are_stated() {
        let record = CompensationRecord::new("EMP-9", "Jane Roe", PayPeriod::new(Month::May, 2024))
            .with_earning("basic", dec("1000"));
        let text = render_text(&record);
        assert!(text.contains("DEDUCTIONS\nNo deductions\n"));
        assert!(text.contains(&columns("Total Deductions", "$0.00")));
    }

    #[test]
    fn test_empty_breakdown_is_a_render_error() {
        let record = CompensationRecord::new("EMP-9", "Jane Roe", PayPeriod::new(Month::May, 2024))
            .with_deduction("tax", dec("10"));
        let payslip = compute(&record).unwrap();
        let result = SlipRenderer::default().render(&payslip, SlipFormat::Pdf);
        match result {
            Err(EngineError::RenderError { employee_id, .. }) => assert_eq!(employee_id, "EMP-9"),
            other => panic!("Expected RenderError, got {:?}", other),
        }
    }

    #[test]
    fn test_pdf_slip_metadata() {
        let payslip = compute(&sample_record()).unwrap();
        let doc = SlipRenderer::default()
            .render(&payslip, SlipFormat::Pdf)
            .unwrap();
        assert_eq!(doc.filename, "salary-slip-john-doe-june-2023.pdf");
        assert_eq!(doc.mime_type, "application/pdf");
        assert!(doc.bytes.starts_with(b"%PDF-1.4"));
        let body = String::from_utf8_lossy(&doc.bytes);
        assert!(body.contains("NET PAY"));
        assert!(body.contains("$4,500.00) Tj"));
    }

    #[test]
    fn test_render_is_byte_identical_for_same_record() {
        let renderer = SlipRenderer::default();
        for format in [SlipFormat::Pdf, SlipFormat::Text] {
            let first = renderer
                .render(&compute(&sample_record()).unwrap(), format)
                .unwrap();
            let second = renderer
                .render(&compute(&sample_record()).unwrap(), format)
                .unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_custom_employer_and_labels() {
        let employer = EmployerProfile {
            name: "Acme Ltd".to_string(),
            document_title: "Payslip".to_string(),
            hr_contact: "payroll@acme.test".to_string(),
            currency_symbol: "£".to_string(),
            disclaimer: vec!["Confidential".to_string()],
        };
        let labels = HashMap::from([("basic".to_string(), "Base Pay".to_string())]);
        let renderer = SlipRenderer::new(RenderConfig::new(employer, labels));

        let payslip = compute(&sample_record()).unwrap();
        let doc = renderer.render(&payslip, SlipFormat::Text).unwrap();
        let text = String::from_utf8(doc.bytes).unwrap();

        assert!(text.starts_with("Acme Ltd\nPayslip"));
        assert!(text.contains(&columns("Base Pay", "£3,500.00")));
        assert!(text.contains(&columns("House Rent", "£800.00")));
        assert!(text.contains("Confidential\n"));
        assert!(text.contains("payroll@acme.test"));
    }

    #[test]
    fn test_slip_filename_collapses_whitespace() {
        let period = PayPeriod::new(Month::December, 2024);
        assert_eq!(
            slip_filename("Mary   Ann\tSmith", period, SlipFormat::Text),
            "salary-slip-mary-ann-smith-december-2024.txt"
        );
    }

    #[test]
    fn test_slip_filename_keeps_edge_whitespace_as_hyphens() {
        let period = PayPeriod::new(Month::June, 2023);
        assert_eq!(
            slip_filename(" John Doe", period, SlipFormat::Pdf),
            "salary-slip--john-doe-june-2023.pdf"
        );
        assert_eq!(
            slip_filename("  Mary   Ann\tSmith ", period, SlipFormat::Text),
            "salary-slip--mary-ann-smith--june-2023.txt"
        );
    }

    #[test]
    fn test_columns_keep_one_space_when_too_wide() {
        let left = "x".repeat(SLIP_WIDTH);
        assert_eq!(columns(&left, "$1.00"), format!("{} $1.00", left));
    }

    #[test]
    fn test_slip_format_deserialization() {
        let format: SlipFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(format, SlipFormat::Text);
        assert_eq!(SlipFormat::default(), SlipFormat::Pdf);
    }
}
