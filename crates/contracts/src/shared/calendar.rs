//! Explicit calendar arithmetic for the dashboard filters.
//!
//! Month names are matched by index, never by locale-dependent string
//! comparison, and days-in-month uses real leap-year arithmetic.

/// English month labels, indexed by calendar month - 1.
pub const MONTH_LABELS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Label for a 1-based calendar month. Out-of-range months map to "?".
pub fn month_label(month: u32) -> &'static str {
    MONTH_LABELS
        .get(month.checked_sub(1).unwrap_or(12) as usize)
        .copied()
        .unwrap_or("?")
}

/// 1-based calendar month for an English label, case-insensitive.
pub fn month_from_label(label: &str) -> Option<u32> {
    MONTH_LABELS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(label))
        .map(|i| i as u32 + 1)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month, 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Valid day numbers `1..=N` for a month/year pair.
///
/// Empty while either selector is unset, which disables the day control.
pub fn day_options(month: Option<u32>, year: Option<i32>) -> Vec<u32> {
    match (month, year) {
        (Some(month), Some(year)) => (1..=days_in_month(year, month)).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    /// First day of the month that follows (year, month).
    fn first_of_next_month(year: i32, month: u32) -> Option<NaiveDate> {
        if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
    }

    #[test]
    fn month_labels_round_trip() {
        assert_eq!(month_label(1), "January");
        assert_eq!(month_label(12), "December");
        assert_eq!(month_from_label("february"), Some(2));
        assert_eq!(month_from_label("Brumaire"), None);
        assert_eq!(month_label(0), "?");
        assert_eq!(month_label(13), "?");
    }

    #[test]
    fn february_respects_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn january_always_has_31_days() {
        for year in [1999, 2000, 2024, 2100] {
            assert_eq!(days_in_month(year, 1), 31);
        }
    }

    #[test]
    fn days_agree_with_chrono() {
        for year in 2020..=2025 {
            for month in 1..=12 {
                let expected = first_of_next_month(year, month)
                    .unwrap()
                    .pred_opt()
                    .unwrap()
                    .day();
                assert_eq!(days_in_month(year, month), expected, "{year}-{month}");
            }
        }
    }

    #[test]
    fn day_options_need_both_selectors() {
        assert!(day_options(Some(2), None).is_empty());
        assert!(day_options(None, Some(2024)).is_empty());
        assert_eq!(day_options(Some(2), Some(2024)).len(), 29);
        assert_eq!(day_options(Some(1), Some(2023)).last(), Some(&31));
    }
}
