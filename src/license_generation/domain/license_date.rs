//! Date and version formatting used by license files.
//!
//! License files write dates as `dd-mmm-yyyy` with a lowercase month
//! (`01-jan-2024`) and versions as `YYYY.MM`.

use chrono::{DateTime, Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Fallback formats tried when a token is not `dd-mmm-yyyy`
const GENERIC_DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y", "%b %d %Y"];

/// Formats a date as `dd-mmm-yyyy`, or an empty string when unset
pub fn format_license_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!(
            "{:02}-{}-{:04}",
            date.day(),
            MONTHS[date.month0() as usize],
            date.year()
        ),
        None => String::new(),
    }
}

/// Parses a license date token
///
/// Accepts `dd-mmm-yyyy` (month abbreviation in any case) first, then a
/// handful of common generic formats. Returns `None` for anything else,
/// including the empty string.
pub fn parse_license_date(token: &str) -> Option<NaiveDate> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    parse_day_month_year(token)
        .or_else(|| {
            GENERIC_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(token, format).ok())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(token)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

fn parse_day_month_year(token: &str) -> Option<NaiveDate> {
    let mut parts = token.split('-');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || day.len() != 2 || month.len() != 3 || year.len() != 4 {
        return None;
    }

    let month = month.to_ascii_lowercase();
    let month_index = MONTHS.iter().position(|m| *m == month)?;
    let day: u32 = day.parse().ok()?;
    let year: i32 = year.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month_index as u32 + 1, day)
}

/// `YYYY.MM` for the month containing `date`
pub fn year_month_of(date: NaiveDate) -> String {
    format!("{:04}.{:02}", date.year(), date.month())
}

/// Whether `value` is empty or a well-formed `YYYY.MM`
pub fn is_valid_year_month(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    match value.split_once('.') {
        Some((year, month)) => {
            year.len() == 4
                && month.len() == 2
                && year.chars().all(|c| c.is_ascii_digit())
                && matches!(month.parse::<u32>(), Ok(1..=12))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_license_date() {
        assert_eq!(format_license_date(Some(date(2024, 1, 1))), "01-jan-2024");
        assert_eq!(format_license_date(Some(date(2025, 6, 15))), "15-jun-2025");
        assert_eq!(format_license_date(Some(date(2023, 12, 9))), "09-dec-2023");
    }

    #[test]
    fn test_format_license_date_none() {
        assert_eq!(format_license_date(None), "");
    }

    #[test]
    fn test_parse_license_date_lowercase() {
        assert_eq!(parse_license_date("15-jun-2025"), Some(date(2025, 6, 15)));
    }

    #[test]
    fn test_parse_license_date_case_insensitive_month() {
        assert_eq!(parse_license_date("01-JAN-2024"), Some(date(2024, 1, 1)));
        assert_eq!(parse_license_date("28-Feb-2026"), Some(date(2026, 2, 28)));
    }

    #[test]
    fn test_parse_license_date_generic_formats() {
        assert_eq!(parse_license_date("2025-03-31"), Some(date(2025, 3, 31)));
        assert_eq!(parse_license_date("2025/03/31"), Some(date(2025, 3, 31)));
        assert_eq!(parse_license_date("03/31/2025"), Some(date(2025, 3, 31)));
        assert_eq!(
            parse_license_date("2025-03-31T10:00:00Z"),
            Some(date(2025, 3, 31))
        );
    }

    #[test]
    fn test_parse_license_date_invalid() {
        assert_eq!(parse_license_date(""), None);
        assert_eq!(parse_license_date("permanent"), None);
        assert_eq!(parse_license_date("31-xyz-2025"), None);
        assert_eq!(parse_license_date("31-feb-2025"), None);
    }

    #[test]
    fn test_year_month_of() {
        assert_eq!(year_month_of(date(2024, 12, 31)), "2024.12");
        assert_eq!(year_month_of(date(2025, 3, 1)), "2025.03");
    }

    #[test]
    fn test_is_valid_year_month() {
        assert!(is_valid_year_month(""));
        assert!(is_valid_year_month("2025.03"));
        assert!(is_valid_year_month("2024.12"));
        assert!(!is_valid_year_month("2025.13"));
        assert!(!is_valid_year_month("2025-03"));
        assert!(!is_valid_year_month("25.03"));
    }
}
