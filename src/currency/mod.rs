//! Money formatting for reports and the shell.

const PRECISION: usize = 2;
const GROUPING_SEPARATOR: char = ',';

/// Formats `amount` as `<symbol><grouped>.<cents>`, e.g. `₱1,585.54`.
/// Negative amounts carry a leading minus: `-₱585.54`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let body = format_number(amount.abs());
    if amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

/// Formats a non-negative value with thousands grouping and two decimals.
pub fn format_number(value: f64) -> String {
    let body = format!("{:.*}", PRECISION, value);
    match body.split_once('.') {
        Some((int_part, fraction)) => format!("{}.{}", group_digits(int_part), fraction),
        None => group_digits(&body),
    }
}

/// Renders a percentage without trailing zeros: `35%`, `33.5%`.
pub fn format_percentage(value: f64) -> String {
    let raw = format!("{:.2}", value);
    let trimmed = raw.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, GROUPING_SEPARATOR);
        }
        grouped.insert(0, ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_two_decimals() {
        assert_eq!(format_currency(1585.54, "₱"), "₱1,585.54");
        assert_eq!(format_currency(1234567.0, "$"), "$1,234,567.00");
        assert_eq!(format_currency(0.0, "₱"), "₱0.00");
    }

    #[test]
    fn negative_amounts_lead_with_minus() {
        assert_eq!(format_currency(-585.54, "₱"), "-₱585.54");
        assert_eq!(format_currency(-0.001, "₱"), "₱0.00");
    }

    #[test]
    fn percentages_drop_trailing_zeros() {
        assert_eq!(format_percentage(35.0), "35%");
        assert_eq!(format_percentage(33.5), "33.5%");
    }
}
