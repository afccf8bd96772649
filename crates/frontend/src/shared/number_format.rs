//! Number formatting for cards and table cells

/// Formats a number with a thousands separator (space) and the given number
/// of decimal places
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Insert a space every 3 digits, counted from the end of the integer part
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Formats a rupee amount: literal "Rs." prefix, fixed two decimals.
///
/// The prefix and the two-decimal format are part of the observable output
/// and must stay exactly as they are.
pub fn format_rupees(value: f64) -> String {
    format!("Rs. {}", format_number_with_decimals(value, 2))
}

/// Formats a count with a thousands separator
pub fn format_count(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(150.0), "Rs. 150.00");
        assert_eq!(format_rupees(0.0), "Rs. 0.00");
        assert_eq!(format_rupees(99.999), "Rs. 100.00");
        assert_eq!(format_rupees(1234567.89), "Rs. 1 234 567.89");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1 234.50");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(12345.0), "12 345");
    }
}
