//! Configuration loading and management for the Payslip Engine.
//!
//! This module provides functionality to load rendering configuration from
//! YAML files: the employer identity printed on salary slips and the display
//! labels for earnings and deductions categories.
//!
//! # Example
//!
//! ```no_run
//! use payslip_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/paymaster").unwrap();
//! println!("Loaded employer: {}", config.employer().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CategoriesConfig, EmployerProfile, RenderConfig};
