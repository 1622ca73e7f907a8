//! Error types for the eumryeok-calendar crate.

use eumryeok_table::TableError;

use crate::date::CalendarKind;

/// Error type for all fallible operations in the eumryeok-calendar crate.
///
/// Every variant describes why a date request was rejected. The boolean
/// setters on [`KoreanLunarCalendar`](crate::KoreanLunarCalendar) collapse
/// these into `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when `year * 10000 + month * 100 + day` falls outside the
    /// supported range of the calendar.
    #[error("{kind} date {value} is outside the supported range {min}..={max}")]
    OutOfRange {
        /// Calendar the date was given in.
        kind: CalendarKind,
        /// The date packed as `YYYYMMDD`.
        value: i64,
        /// Earliest supported date, packed as `YYYYMMDD`.
        min: i64,
        /// Latest supported date, packed as `YYYYMMDD`.
        max: i64,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a day number is zero or exceeds the month's length.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The month for which the day is invalid.
        month: u32,
        /// The number of days in that month.
        max_day: u32,
    },

    /// Returned when no month of the target year starts on or before the
    /// absolute day being converted.
    #[error("no month starts on or before absolute day {absolute_day}")]
    NoMonthFound {
        /// The absolute day number that could not be placed.
        absolute_day: i32,
    },

    /// A lookup into the lunar year table failed.
    #[error(transparent)]
    Table(#[from] TableError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_out_of_range() {
        let err = CalendarError::OutOfRange {
            kind: CalendarKind::Solar,
            value: 20510101,
            min: 10000213,
            max: 20501231,
        };
        assert_eq!(
            err.to_string(),
            "solar date 20510101 is outside the supported range 10000213..=20501231"
        );
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            month: 5,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for month 5 (max 29)");
    }

    #[test]
    fn error_from_table() {
        let err: CalendarError = TableError::InvalidMonth { month: 0 }.into();
        assert_eq!(err.to_string(), "invalid month: 0 (must be 1..=12)");
        assert!(matches!(err, CalendarError::Table(_)));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
