//! Application state for the Tax Regime Engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, FiscalYearConfig};

/// Shared application state.
///
/// Holds the fiscal-year rules every handler computes against. The rules
/// are immutable once loaded, so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates application state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Application state backed by the compiled-in FY 2024-25 rules.
    pub fn builtin() -> Self {
        Self::new(ConfigLoader::builtin())
    }

    /// Returns the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the fiscal-year rules.
    pub fn fiscal_year(&self) -> &FiscalYearConfig {
        self.config.config()
    }
}
