//! On-screen text summary of a comparison.

use rust_decimal::Decimal;

use crate::models::{Regime, TaxComparison, TaxResult};

use super::currency::format_inr;

const CARD_WIDTH: usize = 56;

/// Renders both regimes as text cards followed by the recommendation.
///
/// Rebate and surcharge lines only appear when they are non-zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_regime_engine::calculation::compare_regimes;
/// use tax_regime_engine::models::TaxInputs;
/// use tax_regime_engine::report::render_summary;
///
/// let inputs = TaxInputs {
///     gross_salary: dec!(1200000),
///     ..TaxInputs::default()
/// };
/// let summary = render_summary(&compare_regimes(&inputs));
/// assert!(summary.contains("New Tax Regime [Recommended]"));
/// ```
pub fn render_summary(comparison: &TaxComparison) -> String {
    let mut out = String::new();

    for regime in Regime::ALL {
        let recommended = regime == comparison.recommended_regime;
        render_card(&mut out, comparison.result_for(regime), recommended);
        out.push('\n');
    }

    render_recommendation(&mut out, comparison);
    out
}

fn tagline(regime: Regime) -> &'static str {
    match regime {
        Regime::Old => "Traditional regime with multiple deductions",
        Regime::New => "Simplified regime with lower rates, limited deductions",
    }
}

fn rule(out: &mut String, ch: char) {
    out.extend(std::iter::repeat_n(ch, CARD_WIDTH));
    out.push('\n');
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn row(out: &mut String, label: &str, value: String) {
    line(out, &format!("  {:<30}{:>24}", label, value));
}

fn deducted(amount: Decimal) -> String {
    format!("-{}", format_inr(amount))
}

fn render_card(out: &mut String, result: &TaxResult, recommended: bool) {
    rule(out, '=');
    let title = if recommended {
        format!("  {} [Recommended]", result.regime.display_name())
    } else {
        format!("  {}", result.regime.display_name())
    };
    line(out, &title);
    line(out, &format!("  {}", tagline(result.regime)));
    rule(out, '-');

    row(out, "Total Income:", format_inr(result.total_income));
    row(out, "Total Deductions:", deducted(result.total_deductions));
    row(out, "Taxable Income:", format_inr(result.taxable_income));
    rule(out, '-');
    row(out, "Tax Before Rebate:", format_inr(result.tax_before_rebate));
    if result.rebate_amount > Decimal::ZERO {
        row(out, "Rebate u/s 87A:", deducted(result.rebate_amount));
    }
    row(out, "Tax After Rebate:", format_inr(result.tax_after_rebate));
    if result.surcharge > Decimal::ZERO {
        row(out, "Surcharge:", format_inr(result.surcharge));
    }
    row(out, "Health & Education Cess:", format_inr(result.cess));
    rule(out, '-');
    row(out, "Total Tax Liability:", format_inr(result.total_tax));
    rule(out, '=');
}

fn render_recommendation(out: &mut String, comparison: &TaxComparison) {
    let recommended = comparison.recommended_regime;

    line(out, "Tax Savings Analysis");
    rule(out, '-');
    line(out, &format!("  Recommended Regime: {}", recommended.display_name()));
    line(out, &format!("  Potential Savings:  {}", format_inr(comparison.savings)));
    out.push('\n');
    line(out, "Key Insights:");
    for hint in hints(comparison) {
        line(out, &format!("  * {hint}"));
    }
}

fn hints(comparison: &TaxComparison) -> Vec<String> {
    match comparison.recommended_regime {
        Regime::Old => vec![
            "The Old Tax Regime is more beneficial due to available deductions".to_string(),
            format!(
                "Your total deductions of {} significantly reduce taxable income",
                format_inr(comparison.old_regime.total_deductions)
            ),
            "Consider maximizing deductions under sections 80C, 80D, and others".to_string(),
        ],
        Regime::New => vec![
            "The New Tax Regime offers lower tax rates despite limited deductions".to_string(),
            "Simplified tax structure with fewer compliance requirements".to_string(),
            "Consider if the convenience outweighs the tax savings".to_string(),
        ],
    }
}
