//! Pay period models.
//!
//! This module contains the [`PayPeriod`] and [`Month`] types identifying one
//! monthly payroll cycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A calendar month.
///
/// Serializes as the lower-case English name (`"june"`) and parses the
/// English name case-insensitively, so `"June"` and `"JUNE"` are accepted.
///
/// # Example
///
/// ```
/// use payslip_engine::models::Month;
///
/// let month: Month = "June".parse().unwrap();
/// assert_eq!(month, Month::June);
/// assert_eq!(month.name(), "June");
/// assert_eq!(month.slug(), "june");
/// assert_eq!(month.number(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Month {
    /// January.
    January,
    /// February.
    February,
    /// March.
    March,
    /// April.
    April,
    /// May.
    May,
    /// June.
    June,
    /// July.
    July,
    /// August.
    August,
    /// September.
    September,
    /// October.
    October,
    /// November.
    November,
    /// December.
    December,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the capitalised English name of the month.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Returns the lower-case name used in file names.
    pub fn slug(self) -> String {
        self.name().to_lowercase()
    }

    /// Returns the month number, 1 for January through 12 for December.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMonth(pub String);

impl fmt::Display for UnknownMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown month: '{}'", self.0)
    }
}

impl std::error::Error for UnknownMonth {}

impl FromStr for Month {
    type Err = UnknownMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Month::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownMonth(s.to_string()))
    }
}

impl TryFrom<String> for Month {
    type Error = UnknownMonth;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A monthly pay period.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{Month, PayPeriod};
///
/// let period = PayPeriod::new(Month::June, 2023);
/// assert_eq!(period.to_string(), "June 2023");
/// assert_eq!(period.slug(), "june-2023");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The month of the pay cycle.
    pub month: Month,
    /// The calendar year of the pay cycle.
    pub year: i32,
}

impl PayPeriod {
    /// Creates a new pay period.
    pub fn new(month: Month, year: i32) -> Self {
        Self { month, year }
    }

    /// Returns `<month-lowercase>-<year>`, the period part of document file names.
    pub fn slug(&self) -> String {
        format!("{}-{}", self.month.slug(), self.year)
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}
