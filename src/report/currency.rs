//! Rupee formatting.

use rust_decimal::Decimal;

use crate::calculation::round_to_whole;

/// Formats an amount as whole rupees with Indian digit grouping.
///
/// The last three digits form one group and every group above it has two
/// digits, so ten lakh is `₹10,00,000`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_regime_engine::report::format_inr;
///
/// assert_eq!(format_inr(dec!(112500)), "₹1,12,500");
/// assert_eq!(format_inr(dec!(123456789)), "₹12,34,56,789");
/// assert_eq!(format_inr(dec!(-2500)), "-₹2,500");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_to_whole(amount);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}₹{}", group_indian(&digits))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(last_three);
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_small_amounts_are_not_grouped() {
        assert_eq!(format_inr(Decimal::ZERO), "₹0");
        assert_eq!(format_inr(dec("7")), "₹7");
        assert_eq!(format_inr(dec("999")), "₹999");
    }

    #[test]
    fn test_thousands_and_lakhs() {
        assert_eq!(format_inr(dec("1000")), "₹1,000");
        assert_eq!(format_inr(dec("50000")), "₹50,000");
        assert_eq!(format_inr(dec("111800")), "₹1,11,800");
        assert_eq!(format_inr(dec("1000000")), "₹10,00,000");
    }

    #[test]
    fn test_crores() {
        assert_eq!(format_inr(dec("10000000")), "₹1,00,00,000");
        assert_eq!(format_inr(dec("123456789")), "₹12,34,56,789");
    }

    #[test]
    fn test_rounds_to_whole_rupees() {
        assert_eq!(format_inr(dec("1234.5")), "₹1,235");
        assert_eq!(format_inr(dec("1234.49")), "₹1,234");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_inr(dec("-29900")), "-₹29,900");
        assert_eq!(format_inr(dec("-0.2")), "₹0");
    }
}
