//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rendering
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CategoriesConfig, EmployerProfile, RenderConfig};

/// Loads and provides access to rendering configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/paymaster/
/// ├── employer.yaml    # Employer identity, currency symbol, slip footer
/// └── categories.yaml  # Display labels for category keys
/// ```
///
/// # Example
///
/// ```no_run
/// use payslip_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/paymaster").unwrap();
/// println!("Employer: {}", loader.employer().name);
/// println!("Label: {}", loader.config().label_for("houseRent"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: RenderConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/paymaster")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a required field (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let employer = Self::load_yaml::<EmployerProfile>(&path.join("employer.yaml"))?;
        let categories = Self::load_yaml::<CategoriesConfig>(&path.join("categories.yaml"))?;

        Ok(Self {
            config: RenderConfig::new(employer, categories.labels),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying rendering configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Returns the employer profile.
    pub fn employer(&self) -> &EmployerProfile {
        self.config.employer()
    }

    /// Consumes the loader and returns the rendering configuration.
    pub fn into_config(self) -> RenderConfig {
        self.config
    }
}
