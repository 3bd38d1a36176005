//! Command-line commands for the `tax-regime-engine` binary.

mod compare;

use std::path::Path;

use tracing::info;

use crate::config::ConfigLoader;
use crate::error::EngineResult;

pub use compare::{CompareCommand, CompareOutcome, read_inputs, report_path};

/// Loads rules from `path`, or the built-in FY 2024-25 rules when none is given.
pub fn load_config(path: Option<&Path>) -> EngineResult<ConfigLoader> {
    match path {
        Some(path) => ConfigLoader::load(path),
        None => {
            info!("No configuration directory given, using built-in FY 2024-25 rules");
            Ok(ConfigLoader::builtin())
        }
    }
}
