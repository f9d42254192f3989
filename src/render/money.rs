//! Monetary amount formatting.

use rust_decimal::Decimal;

use crate::calculation::round_money;

/// Formats an amount for display with a currency symbol and thousands separators.
///
/// Negative amounts carry an explicit leading minus sign before the symbol.
///
/// # Examples
///
/// ```
/// use payslip_engine::render::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(450000, 2), "$"), "$4,500.00");
/// assert_eq!(format_money(Decimal::new(-25050, 2), "$"), "-$250.50");
/// assert_eq!(format_money(Decimal::new(1234567891, 1), "£"), "£123,456,789.10");
/// ```
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let plain = format_plain(amount);
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (whole, cents) = digits.split_once('.').unwrap_or((digits, "00"));

    format!("{}{}{}.{}", sign, symbol, group_thousands(whole), cents)
}

/// Formats an amount as a plain two-decimal number (`4500.00`, `-250.00`).
///
/// Used where the consumer is a machine, such as bank advice files.
pub fn format_plain(amount: Decimal) -> String {
    let rounded = round_money(amount);
    if rounded.is_zero() {
        // Avoid "-0.00" for negative zero.
        return "0.00".to_string();
    }
    rounded.to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
