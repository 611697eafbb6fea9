//! Number grouping shared by the backend view model and the frontend axes

/// Formats `value` with `decimals` fraction digits and the integer part
/// grouped by three with `separator`
///
/// `format_grouped(-1234.5, 1, ' ')` → `"-1 234.5"`
pub fn format_grouped(value: f64, decimals: usize, separator: char) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let grouped = group_thousands(integer_part, separator);
    match decimal_part {
        Some(d) => format!("{sign}{grouped}.{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Inserts `separator` every three digits from the right
pub fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
