//! Number formatting for dashboard cards, tables and tooltips

/// Currency symbol prepended by [`format_money`]
pub const CURRENCY_SYMBOL: &str = "₹";

/// Inserts `separator` every 3 digits from the end of an unsigned integer string
fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Formats a number with a thousands separator (comma) and the given number of decimals
///
/// # Examples
///
/// ```
/// use contracts::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    // "-0.00" after rounding is printed without the sign
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    let grouped = group_thousands(integer_part, ',');
    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a money amount: currency symbol, thousands separator, no fraction digits
///
/// # Examples
///
/// ```
/// use contracts::shared::number_format::format_money;
/// assert_eq!(format_money(1234567.0), "₹1,234,567");
/// assert_eq!(format_money(-950.4), "-₹950");
/// ```
pub fn format_money(value: f64) -> String {
    let formatted = format_number_with_decimals(value, 0);
    match formatted.strip_prefix('-') {
        Some(abs) => format!("-{}{}", CURRENCY_SYMBOL, abs),
        None => format!("{}{}", CURRENCY_SYMBOL, formatted),
    }
}

/// Formats a percentage with one decimal and no thousands separator: `140.0%`
pub fn format_percent(value: f64) -> String {
    // -0.0 prints as "-0.0"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.1}%", value)
}

/// Formats a change percentage: `+` for values >= 0, otherwise the minus of the
/// number itself (`+33.3%`, `-5.0%`, `-0.0%` for small declines).
pub fn format_signed_percent(value: f64) -> String {
    let formatted = format_percent(value);
    if value >= 0.0 {
        format!("+{}", formatted)
    } else {
        formatted
    }
}

/// Formats a count with a thousands separator
pub fn format_count(n: usize, separator: char) -> String {
    group_thousands(&n.to_string(), separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1,234.50");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "₹0");
        assert_eq!(format_money(350.0), "₹350");
        assert_eq!(format_money(1234567.89), "₹1,234,568");
        assert_eq!(format_money(-1234.0), "-₹1,234");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(140.0), "140.0%");
        assert_eq!(format_percent(33.3333), "33.3%");
        assert_eq!(format_percent(1234.56), "1234.6%");
        assert_eq!(format_percent(-0.0), "0.0%");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(33.3333), "+33.3%");
        assert_eq!(format_signed_percent(0.0), "+0.0%");
        assert_eq!(format_signed_percent(-12.345), "-12.3%");
        assert_eq!(format_signed_percent(-0.01), "-0.0%");
        assert_eq!(format_signed_percent(-0.0), "+0.0%");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0, '.'), "0");
        assert_eq!(format_count(1000, '.'), "1.000");
        assert_eq!(format_count(1234567, ','), "1,234,567");
    }
}
