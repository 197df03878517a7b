//! Vietnamese-locale display formatting.
//!
//! Currency and dates are always rendered in vi-VN conventions; these exact
//! strings are part of the UI contract and are asserted by tests.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Indochina Time; backend timestamps are UTC.
fn ict() -> FixedOffset {
    FixedOffset::east_opt(7 * 3600).unwrap()
}

/// Format an integer VND amount with dot thousands separators: `3.500.000 ₫`.
pub fn format_vnd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let bytes = digits.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*b as char);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} ₫", sign, grouped)
}

/// `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `dd/mm/yyyy hh:mm` in Indochina Time.
pub fn format_datetime(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&ict()).format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_vnd_groups_by_thousands() {
        assert_eq!(format_vnd(0), "0 ₫");
        assert_eq!(format_vnd(500), "500 ₫");
        assert_eq!(format_vnd(1_000), "1.000 ₫");
        assert_eq!(format_vnd(3_500_000), "3.500.000 ₫");
        assert_eq!(format_vnd(1_234_567_890), "1.234.567.890 ₫");
    }

    #[test]
    fn test_format_vnd_negative() {
        assert_eq!(format_vnd(-250_000), "-250.000 ₫");
    }

    #[test]
    fn test_format_date_vietnamese_order() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(format_date(date), "01/09/2025");
    }

    #[test]
    fn test_format_datetime_shifts_to_ict() {
        // 2025-08-01 18:30 UTC is 2025-08-02 01:30 in Indochina Time.
        let ts = Utc.with_ymd_and_hms(2025, 8, 1, 18, 30, 0).unwrap();
        assert_eq!(format_datetime(&ts), "02/08/2025 01:30");
    }
}
