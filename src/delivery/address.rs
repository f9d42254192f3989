//! Email address syntax checking.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{EngineError, EngineResult};

/// One `@`, a non-empty local part, and a dotted domain whose labels do not
/// start or end with a hyphen. No whitespace anywhere.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

/// Checks that an email address is syntactically well formed.
///
/// This is a syntax check only; deliverability is the mail transport's
/// concern.
///
/// # Errors
///
/// Returns `InvalidAddress` if the address is malformed.
///
/// # Examples
///
/// ```
/// use payslip_engine::delivery::validate_address;
///
/// assert!(validate_address("john.doe@example.com").is_ok());
/// assert!(validate_address("not-an-address").is_err());
/// ```
pub fn validate_address(address: &str) -> EngineResult<()> {
    let well_formed = EMAIL_PATTERN.is_match(address)
        && address.len() <= 254
        && address.split_once('@').is_some_and(|(local, _)| {
            local.len() <= 64
                && !local.starts_with('.')
                && !local.ends_with('.')
                && !local.contains("..")
        });

    if well_formed {
        Ok(())
    } else {
        Err(EngineError::InvalidAddress {
            address: address.to_string(),
        })
    }
}
