//! Configuration types for document rendering.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::HashMap;

/// Identity of the employer issuing salary slips.
///
/// Deserialized from `employer.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployerProfile {
    /// The employer's display name (e.g., "PayMaster Inc.").
    pub name: String,
    /// The title printed under the employer name.
    #[serde(default = "default_document_title")]
    pub document_title: String,
    /// Contact address for salary slip questions.
    pub hr_contact: String,
    /// Symbol prefixed to monetary amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Footer lines printed at the bottom of every slip.
    #[serde(default)]
    pub disclaimer: Vec<String>,
}

fn default_document_title() -> String {
    "Official Salary Slip".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for EmployerProfile {
    fn default() -> Self {
        Self {
            name: "PayMaster Inc.".to_string(),
            document_title: default_document_title(),
            hr_contact: "hr@paymaster.com".to_string(),
            currency_symbol: default_currency_symbol(),
            disclaimer: vec![
                "This is a computer-generated document and does not require a signature."
                    .to_string(),
            ],
        }
    }
}

/// Category labels configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesConfig {
    /// Map of category key to display label.
    pub labels: HashMap<String, String>,
}

/// The complete rendering configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    employer: EmployerProfile,
    labels: HashMap<String, String>,
}

impl RenderConfig {
    /// Creates a new RenderConfig from its component parts.
    pub fn new(employer: EmployerProfile, labels: HashMap<String, String>) -> Self {
        Self { employer, labels }
    }

    /// Returns the employer profile.
    pub fn employer(&self) -> &EmployerProfile {
        &self.employer
    }

    /// Returns all configured category labels.
    pub fn labels(&self) -> &HashMap<String, String> {
        &self.labels
    }

    /// Returns the display label for a category key.
    ///
    /// Unconfigured keys fall back to a title-cased form of the key, splitting
    /// camelCase, snake_case and kebab-case words.
    ///
    /// # Example
    ///
    /// ```
    /// use payslip_engine::config::RenderConfig;
    ///
    /// let config = RenderConfig::default();
    /// assert_eq!(config.label_for("basic"), "Basic Salary");
    /// assert_eq!(config.label_for("overtimeBonus"), "Overtime Bonus");
    /// assert_eq!(config.label_for("meal_allowance"), "Meal Allowance");
    /// ```
    pub fn label_for(&self, category: &str) -> String {
        self.labels
            .get(category)
            .cloned()
            .unwrap_or_else(|| humanize(category))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        let labels = [
            ("basic", "Basic Salary"),
            ("houseRent", "House Rent Allowance"),
            ("cola", "Cost of Living Adjustment"),
            ("utilities", "Utilities Allowance"),
            ("tax", "Income Tax"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self::new(EmployerProfile::default(), labels)
    }
}

fn humanize(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
