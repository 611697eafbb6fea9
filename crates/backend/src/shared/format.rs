use contracts::shared::number_format::{format_grouped, group_thousands};

/// Formats a count with dots as thousands separators
///
/// ```ignore
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    group_thousands(&n.to_string(), '.')
}

/// Formats a decimal with a space as thousands separator and a fixed number of decimals
///
/// `format_decimal(1234.5, 2)` → `"1 234.50"`
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format_grouped(value, decimals, ' ')
}

/// Sales amounts: whole numbers without decimals, everything else with 2
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format_decimal(value, 0)
    } else {
        format_decimal(value, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(150.0, 2), "150.00");
        assert_eq!(format_decimal(1234.567, 2), "1 234.57");
        assert_eq!(format_decimal(1234567.0, 0), "1 234 567");
        assert_eq!(format_decimal(-1234.5, 1), "-1 234.5");
        assert_eq!(format_decimal(0.0, 0), "0");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(750.0), "750");
        assert_eq!(format_amount(12500.0), "12 500");
        assert_eq!(format_amount(100.5), "100.50");
    }
}
