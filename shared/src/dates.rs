//! Date and timestamp formatting for display.

use chrono::{NaiveDate, NaiveDateTime};

/// "Jun 15, 2023" — used in tables and card rows.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "June 15, 2023" — used where the fuller form reads better, like the
/// profile page.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Jun 14 at 06:45 PM" — used for notification timestamps.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%b %-d at %I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        assert_eq!(format_short_date(date), "Jun 15, 2023");

        let single_digit = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap();
        assert_eq!(format_short_date(single_digit), "Jun 5, 2023");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        assert_eq!(format_long_date(date), "January 15, 2020");
    }

    #[test]
    fn test_timestamp() {
        let timestamp = NaiveDate::from_ymd_opt(2023, 6, 14)
            .unwrap()
            .and_hms_opt(18, 45, 0)
            .unwrap();
        assert_eq!(format_timestamp(timestamp), "Jun 14 at 06:45 PM");

        let morning = NaiveDate::from_ymd_opt(2023, 6, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(format_timestamp(morning), "Jun 15 at 10:30 AM");
    }
}
