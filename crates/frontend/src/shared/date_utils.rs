/// Utilities for date formatting
///
/// Dates arrive from the API as ISO strings; month pickers work with the
/// `<input type="month">` value format `YYYY-MM`.
use chrono::{Datelike, NaiveDate};

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// `NaiveDate` -> value of a month input ("2025-01")
pub fn to_month_input(date: Option<NaiveDate>) -> String {
    date.map(|d| format!("{:04}-{:02}", d.year(), d.month()))
        .unwrap_or_default()
}

/// Value of a month input -> first day of that month; blank or malformed gives `None`
pub fn from_month_input(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.trim().split_once('-')?;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// "Jan 2025"
pub fn month_title(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_month_input_conversion() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(to_month_input(Some(d)), "2025-01");
        assert_eq!(to_month_input(None), "");
        assert_eq!(from_month_input("2025-01"), Some(d));
        assert_eq!(from_month_input(""), None);
        assert_eq!(from_month_input("2025-13"), None);
    }

    #[test]
    fn test_month_title() {
        let d = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
        assert_eq!(month_title(d), "Nov 2024");
    }
}
