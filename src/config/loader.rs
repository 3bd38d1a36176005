//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading fiscal-year
//! regime rules from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::Regime;

use super::fy2024_25;
use super::types::{FiscalYearConfig, FiscalYearMetadata, RegimeConfig};

/// Loads and provides access to fiscal-year regime rules.
///
/// # Directory Structure
///
/// ```text
/// config/fy2024-25/
/// ├── fiscal_year.yaml   # Code, name, cess rate
/// ├── old_regime.yaml    # Old regime slabs, rebate, surcharge, deduction caps
/// └── new_regime.yaml    # New regime slabs, rebate, surcharge, deduction caps
/// ```
///
/// # Example
///
/// ```no_run
/// use tax_regime_engine::config::ConfigLoader;
/// use tax_regime_engine::models::Regime;
///
/// let loader = ConfigLoader::load("./config/fy2024-25").unwrap();
/// println!("Loaded {}", loader.metadata().name);
/// println!("Old regime standard deduction: {}", loader.regime(Regime::Old).standard_deduction);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: FiscalYearConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - A regime file declares the wrong regime (`RegimeMismatch`)
    /// - A slab table or cap fails validation (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<FiscalYearMetadata>(&path.join("fiscal_year.yaml"))?;
        let old_regime = Self::load_regime(&path.join("old_regime.yaml"), Regime::Old)?;
        let new_regime = Self::load_regime(&path.join("new_regime.yaml"), Regime::New)?;

        let config = FiscalYearConfig::new(metadata, old_regime, new_regime);
        config.validate()?;

        info!(
            fiscal_year = %config.metadata().code,
            path = %path.display(),
            "Loaded regime configuration"
        );

        Ok(Self { config })
    }

    /// Returns a loader holding the compiled-in FY 2024-25 rules.
    pub fn builtin() -> Self {
        Self {
            config: fy2024_25::builtin().clone(),
        }
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: FiscalYearConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
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

    /// Loads one regime file and checks that it declares the expected regime.
    fn load_regime(path: &Path, expected: Regime) -> EngineResult<RegimeConfig> {
        let config = Self::load_yaml::<RegimeConfig>(path)?;

        if config.regime != expected {
            return Err(EngineError::RegimeMismatch {
                path: path.display().to_string(),
                expected: expected.to_string(),
                found: config.regime.to_string(),
            });
        }

        debug!(
            regime = %expected,
            slabs = config.slabs.len(),
            surcharge_slabs = config.surcharge.slabs.len(),
            "Parsed regime file"
        );

        Ok(config)
    }

    /// Returns the underlying fiscal-year configuration.
    pub fn config(&self) -> &FiscalYearConfig {
        &self.config
    }

    /// Returns the fiscal-year metadata.
    pub fn metadata(&self) -> &FiscalYearMetadata {
        self.config.metadata()
    }

    /// Returns the rules for one regime.
    pub fn regime(&self, regime: Regime) -> &RegimeConfig {
        self.config.regime(regime)
    }
}
