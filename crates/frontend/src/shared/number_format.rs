//! Number formatting for table cells and stat cards

/// Thousands separated by a space, fixed number of decimals
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();
    // "-0.00" reads as zero
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.insert(0, '-');
    }
    match decimal_part {
        Some(d) => format!("{}.{}", result, d),
        None => result,
    }
}

/// Amount held in INR lakh, e.g. "₹ 420.00 L"
pub fn format_lakh(value: f64) -> String {
    format!("₹ {} L", format_number_with_decimals(value, 2))
}

pub fn format_percent(value: u32) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_number_with_decimals(1234.56, 2), "1 234.56");
        assert_eq!(format_number_with_decimals(1234567.891, 2), "1 234 567.89");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_number_with_decimals(-1234.5, 1), "-1 234.5");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
    }

    #[test]
    fn test_lakh_and_percent() {
        assert_eq!(format_lakh(180.5), "₹ 180.50 L");
        assert_eq!(format_percent(87), "87%");
    }
}
