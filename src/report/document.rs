//! Printable comparison report.
//!
//! The report is laid out as plain text on fixed-height pages. Each page is
//! padded to the same number of body lines and closed with a
//! "Page n of m" footer; pages are separated by a form feed.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::calculation::derive_deductions;
use crate::config::FiscalYearConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Regime, TaxComparison, TaxInputs, TaxResult};

use super::currency::format_inr;

/// Characters per line.
pub const PAGE_WIDTH: usize = 72;

/// Body lines per page, not counting the page footer.
pub const DEFAULT_PAGE_HEIGHT: usize = 56;

const FORM_FEED: char = '\u{0C}';

/// A paginated tax comparison report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxReport {
    lines: Vec<String>,
    page_height: usize,
    generated_on: NaiveDate,
}

impl TaxReport {
    /// Lays out the report for a comparison.
    ///
    /// The deductions section lists what the old regime allows under
    /// `fiscal_year`, so claims above a cap show the capped amount.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rust_decimal_macros::dec;
    /// use tax_regime_engine::calculation::compare_regimes;
    /// use tax_regime_engine::config::fy2024_25;
    /// use tax_regime_engine::models::TaxInputs;
    /// use tax_regime_engine::report::TaxReport;
    ///
    /// let inputs = TaxInputs {
    ///     gross_salary: dec!(1200000),
    ///     ..TaxInputs::default()
    /// };
    /// let comparison = compare_regimes(&inputs);
    /// let date = NaiveDate::from_ymd_opt(2024, 7, 31).unwrap();
    /// let report = TaxReport::build(&inputs, &comparison, date, fy2024_25::builtin());
    ///
    /// assert_eq!(report.file_name(), "Tax_Comparison_Report_2024.txt");
    /// assert!(report.render().contains("Page 1 of 1"));
    /// ```
    pub fn build(
        inputs: &TaxInputs,
        comparison: &TaxComparison,
        generated_on: NaiveDate,
        fiscal_year: &FiscalYearConfig,
    ) -> Self {
        let mut lines = Vec::new();
        let name = &fiscal_year.metadata().name;

        lines.push(centered("Tax Liability Comparison Report"));
        lines.push(centered(&format!(
            "{} | Generated on: {}",
            name,
            generated_on.format("%-d %B %Y")
        )));
        lines.push(String::new());

        heading(&mut lines, "Income Summary");
        field(&mut lines, "Gross Salary", inputs.gross_salary);
        field(&mut lines, "Other Income", inputs.other_income);
        field(&mut lines, "Total Income", comparison.old_regime.total_income);
        lines.push(String::new());

        heading(&mut lines, "Deductions Applied (Old Regime Only)");
        let old_deductions = derive_deductions(inputs, fiscal_year.regime(Regime::Old));
        for line in &old_deductions.lines {
            field(&mut lines, &line.label, line.allowed);
        }
        lines.push(String::new());

        heading(&mut lines, "Tax Liability Comparison");
        comparison_table(&mut lines, &comparison.old_regime, &comparison.new_regime);
        lines.push(String::new());

        heading(&mut lines, "Tax Savings Recommendation");
        lines.push(format!(
            "Recommended: {}",
            comparison.recommended_regime.display_name()
        ));
        lines.push(format!(
            "Potential Savings: {}",
            format_inr(comparison.savings)
        ));
        lines.push(String::new());

        lines.push(format!(
            "Note: This calculation is based on the tax slabs and rules for {}.",
            name
        ));
        lines.push("Please consult a tax advisor for personalized tax planning advice.".to_string());
        lines.push(String::new());
        lines.push(centered("Generated by Tax Regime Engine"));

        Self {
            lines,
            page_height: DEFAULT_PAGE_HEIGHT,
            generated_on,
        }
    }

    /// Re-flows the report onto pages with `page_height` body lines.
    pub fn with_page_height(mut self, page_height: usize) -> Self {
        self.page_height = page_height.max(1);
        self
    }

    /// The body lines of each page, without padding or footer.
    pub fn pages(&self) -> Vec<&[String]> {
        self.lines.chunks(self.page_height).collect()
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.lines.len().div_ceil(self.page_height).max(1)
    }

    /// Default file name, stamped with the year the report was generated.
    pub fn file_name(&self) -> String {
        format!("Tax_Comparison_Report_{}.txt", self.generated_on.year())
    }

    /// Renders every page, padded and footed, into one string.
    pub fn render(&self) -> String {
        let pages = self.pages();
        let total = self.page_count();
        let mut out = String::new();

        for index in 0..total {
            if index > 0 {
                out.push(FORM_FEED);
            }
            let body: &[String] = pages.get(index).copied().unwrap_or(&[]);
            for line in body {
                out.push_str(line);
                out.push('\n');
            }
            for _ in body.len()..self.page_height {
                out.push('\n');
            }
            out.push_str(&centered(&format!("Page {} of {}", index + 1, total)));
            out.push('\n');
        }
        out
    }

    /// Writes the rendered report.
    ///
    /// The whole document is rendered before anything is written, so a
    /// layout problem never leaves a partial file behind.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> EngineResult<()> {
        let rendered = self.render();
        writer
            .write_all(rendered.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| EngineError::ReportError {
                message: format!("Failed to write report: {}", e),
            })
    }

    /// Writes the report to a file at `path`.
    ///
    /// The report goes to a sibling temporary file that is renamed over
    /// `path` only once fully written. On failure the temporary file is
    /// removed and any existing file at `path` is left untouched.
    pub fn save(&self, path: impl AsRef<Path>) -> EngineResult<()> {
        save_atomically(path.as_ref(), |file| self.write_to(file))
    }
}

fn report_error(message: String) -> EngineError {
    EngineError::ReportError { message }
}

fn temp_path(path: &Path) -> EngineResult<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| report_error(format!("'{}' is not a file path", path.display())))?;
    Ok(path.with_file_name(format!(".{}.tmp", name.to_string_lossy())))
}

fn save_atomically<F>(path: &Path, write: F) -> EngineResult<()>
where
    F: FnOnce(&mut File) -> EngineResult<()>,
{
    let tmp = temp_path(path)?;
    let result = write_and_replace(&tmp, path, write);
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_and_replace<F>(tmp: &Path, path: &Path, write: F) -> EngineResult<()>
where
    F: FnOnce(&mut File) -> EngineResult<()>,
{
    let mut file = File::create(tmp)
        .map_err(|e| report_error(format!("Failed to create '{}': {}", tmp.display(), e)))?;
    write(&mut file)?;
    file.sync_all()
        .map_err(|e| report_error(format!("Failed to sync '{}': {}", tmp.display(), e)))?;
    drop(file);

    fs::rename(tmp, path)
        .map_err(|e| report_error(format!("Failed to replace '{}': {}", path.display(), e)))
}

fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = PAGE_WIDTH)
        .trim_end()
        .to_string()
}

fn heading(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push("-".repeat(title.chars().count()));
}

fn field(lines: &mut Vec<String>, label: &str, amount: Decimal) {
    lines.push(format!("{:<40}{:>20}", format!("{label}:"), format_inr(amount)));
}

fn table_row(lines: &mut Vec<String>, label: &str, old: String, new: String) {
    lines.push(format!("{:<32}{:>20}{:>20}", label, old, new));
}

fn comparison_table(lines: &mut Vec<String>, old: &TaxResult, new: &TaxResult) {
    table_row(
        lines,
        "Particulars",
        "Old Regime".to_string(),
        "New Regime".to_string(),
    );
    lines.push("=".repeat(PAGE_WIDTH));

    let rows: [(&str, fn(&TaxResult) -> Decimal); 8] = [
        ("Total Income", |r| r.total_income),
        ("Total Deductions", |r| r.total_deductions),
        ("Taxable Income", |r| r.taxable_income),
        ("Tax Before Rebate", |r| r.tax_before_rebate),
        ("Rebate u/s 87A", |r| r.rebate_amount),
        ("Tax After Rebate", |r| r.tax_after_rebate),
        ("Surcharge", |r| r.surcharge),
        ("Health & Education Cess", |r| r.cess),
    ];
    for (label, amount) in rows {
        table_row(lines, label, format_inr(amount(old)), format_inr(amount(new)));
    }

    lines.push("-".repeat(PAGE_WIDTH));
    table_row(
        lines,
        "Total Tax Liability",
        format_inr(old.total_tax),
        format_inr(new.total_tax),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compare_regimes;
    use crate::config::fy2024_25;
    use std::io;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn example_report() -> TaxReport {
        let inputs = TaxInputs {
            gross_salary: dec("1200000"),
            basic_salary: dec("600000"),
            section_80c: dec("200000"),
            section_80d: dec("25000"),
            ..TaxInputs::default()
        };
        let comparison = compare_regimes(&inputs);
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        TaxReport::build(&inputs, &comparison, date, fy2024_25::builtin())
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_report_sections() {
        let text = example_report().render();

        assert!(text.contains("Tax Liability Comparison Report"));
        assert!(text.contains("Financial Year 2024-25 | Generated on: 15 January 2025"));
        assert!(text.contains("Income Summary"));
        assert!(text.contains("Deductions Applied (Old Regime Only)"));
        assert!(text.contains("Rebate u/s 87A"));
        assert!(text.contains("Health & Education Cess"));
        assert!(text.contains("Total Tax Liability"));
        assert!(text.contains("Tax Savings Recommendation"));
        assert!(text.contains("Recommended: New Tax Regime"));
        assert!(text.contains("Potential Savings: ₹29,900"));
        assert!(text.contains("Generated by Tax Regime Engine"));
    }

    #[test]
    fn test_deductions_show_allowed_amounts() {
        let text = example_report().render();
        let line = text
            .lines()
            .find(|l| l.starts_with("Section 80C:"))
            .unwrap();

        assert!(line.ends_with("₹1,50,000"));
        assert!(!text.contains("₹2,00,000"));
    }

    #[test]
    fn test_total_row_holds_both_totals() {
        let text = example_report().render();
        let line = text
            .lines()
            .find(|l| l.starts_with("Total Tax Liability"))
            .unwrap();

        assert!(line.contains("₹1,11,800"));
        assert!(line.ends_with("₹81,900"));
    }

    #[test]
    fn test_single_page_by_default() {
        let report = example_report();
        let text = report.render();

        assert_eq!(report.page_count(), 1);
        assert!(text.contains("Page 1 of 1"));
        assert!(!text.contains(FORM_FEED));
        assert_eq!(text.lines().count(), DEFAULT_PAGE_HEIGHT + 1);
    }

    #[test]
    fn test_short_pages_split_report() {
        let report = example_report().with_page_height(20);
        let text = report.render();
        let pages: Vec<&str> = text.split(FORM_FEED).collect();

        assert_eq!(pages.len(), report.page_count());
        assert!(report.page_count() > 1);
        for (index, page) in pages.iter().enumerate() {
            assert_eq!(page.lines().count(), 21);
            let footer = format!("Page {} of {}", index + 1, pages.len());
            assert!(page.trim_end().ends_with(&footer));
        }
    }

    #[test]
    fn test_write_to_buffer() {
        let report = example_report();
        let mut buffer = Vec::new();
        report.write_to(&mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), report.render());
    }

    #[test]
    fn test_write_failure_maps_to_report_error() {
        let result = example_report().write_to(&mut FailingWriter);

        match result {
            Err(EngineError::ReportError { message }) => assert!(message.contains("disk full")),
            other => panic!("Expected ReportError, got {:?}", other),
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tax-regime-engine-report-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_save_writes_rendered_report() {
        let dir = scratch_dir("save");
        let path = dir.join("report.txt");
        let report = example_report();

        report.save(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), report.render());
        assert!(!dir.join(".report.txt.tmp").exists());
    }

    #[test]
    fn test_failed_save_keeps_previous_report() {
        let dir = scratch_dir("failed-save");
        let path = dir.join("report.txt");
        fs::write(&path, "previous report").unwrap();

        let result = save_atomically(&path, |file| {
            file.write_all(b"partial").unwrap();
            Err(report_error("disk full".to_string()))
        });

        assert!(matches!(result, Err(EngineError::ReportError { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous report");
        assert!(!dir.join(".report.txt.tmp").exists());
    }

    #[test]
    fn test_failed_save_leaves_no_file() {
        let dir = scratch_dir("no-file");
        let path = dir.join("report.txt");
        let _ = fs::remove_file(&path);

        let result = save_atomically(&path, |file| {
            file.write_all(b"partial").unwrap();
            Err(report_error("disk full".to_string()))
        });

        assert!(result.is_err());
        assert!(!path.exists());
        assert!(!dir.join(".report.txt.tmp").exists());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let path = scratch_dir("missing").join("absent").join("report.txt");

        let result = example_report().save(&path);

        assert!(matches!(result, Err(EngineError::ReportError { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_file_name_uses_generation_year() {
        assert_eq!(example_report().file_name(), "Tax_Comparison_Report_2025.txt");
    }
}
