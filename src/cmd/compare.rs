//! Compare command - both regimes for a JSON inputs file

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::info;

use crate::api::TaxInputsRequest;
use crate::calculation::run_comparison;
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{ComparisonResult, TaxInputs};
use crate::report::{TaxReport, render_summary};

use super::load_config;

/// Compare both regimes for the inputs in a JSON file
#[derive(Args, Debug)]
pub struct CompareCommand {
    /// JSON file with the taxpayer's inputs
    inputs: PathBuf,

    /// Directory holding fiscal_year.yaml, old_regime.yaml and new_regime.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full comparison as JSON instead of the summary
    #[arg(long)]
    json: bool,

    /// Also write the printable report to this file or directory
    #[arg(short, long)]
    report: Option<PathBuf>,
}

/// What a compare run produced.
#[derive(Debug)]
pub struct CompareOutcome {
    /// The comparison that was printed.
    pub result: ComparisonResult,
    /// Where the report was written, if one was requested.
    pub report_path: Option<PathBuf>,
}

impl CompareCommand {
    /// Runs against stdout, dating any report with today's local date.
    pub fn exec(&self) -> EngineResult<CompareOutcome> {
        let config = load_config(self.config.as_deref())?;
        let mut out = io::stdout().lock();
        self.run(&config, &mut out, Local::now().date_naive())
    }

    /// Runs with explicit rules, output and report date.
    ///
    /// Nothing is printed and no report is written unless the inputs file
    /// reads and validates.
    pub fn run<W: Write>(
        &self,
        config: &ConfigLoader,
        out: &mut W,
        today: NaiveDate,
    ) -> EngineResult<CompareOutcome> {
        let inputs = read_inputs(&self.inputs)?;
        let result = run_comparison(&inputs, config.config());

        let text = if self.json {
            json_text(&result)?
        } else {
            summary_text(&result)
        };
        out.write_all(text.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| EngineError::OutputError {
                message: e.to_string(),
            })?;

        let report_path = match &self.report {
            Some(target) => {
                let report = TaxReport::build(&inputs, &result.comparison, today, config.config());
                let path = report_path(target, &report);
                report.save(&path)?;
                info!(path = %path.display(), pages = report.page_count(), "Report written");
                Some(path)
            }
            None => None,
        };

        Ok(CompareOutcome {
            result,
            report_path,
        })
    }
}

fn json_text(result: &ComparisonResult) -> EngineResult<String> {
    let mut text = serde_json::to_string_pretty(result).map_err(|e| EngineError::OutputError {
        message: e.to_string(),
    })?;
    text.push('\n');
    Ok(text)
}

fn summary_text(result: &ComparisonResult) -> String {
    let mut text = render_summary(&result.comparison);
    for warning in &result.audit_trace.warnings {
        text.push_str(&format!("  ! {}\n", warning.message));
    }
    text
}

/// Reads a JSON inputs file and validates it like an API request.
pub fn read_inputs(path: &Path) -> EngineResult<TaxInputs> {
    let input_error = |message: String| EngineError::InputFileError {
        path: path.display().to_string(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| input_error(e.to_string()))?;
    let request: TaxInputsRequest =
        serde_json::from_str(&content).map_err(|e| input_error(e.to_string()))?;
    TaxInputs::try_from(request)
}

/// Where `--report` writes: inside `target` when it is a directory.
pub fn report_path(target: &Path, report: &TaxReport) -> PathBuf {
    if target.is_dir() {
        target.join(report.file_name())
    } else {
        target.to_path_buf()
    }
}
