//! Validity rule shared by the lunar and solar setters.

use eumryeok_table as table;

use crate::absolute::solar_month_length;
use crate::date::CalendarKind;
use crate::error::CalendarError;

/// Earliest supported lunar date, packed as `YYYYMMDD`.
pub const LUNAR_MIN: i64 = 1000_01_01;
/// Latest supported lunar date, packed as `YYYYMMDD`.
pub const LUNAR_MAX: i64 = 2050_11_18;
/// Earliest supported solar date, packed as `YYYYMMDD`.
pub const SOLAR_MIN: i64 = 1000_02_13;
/// Latest supported solar date, packed as `YYYYMMDD`.
pub const SOLAR_MAX: i64 = 2050_12_31;

impl CalendarKind {
    /// Returns the inclusive `(min, max)` bounds, packed as `YYYYMMDD`.
    pub fn bounds(self) -> (i64, i64) {
        match self {
            Self::Lunar => (LUNAR_MIN, LUNAR_MAX),
            Self::Solar => (SOLAR_MIN, SOLAR_MAX),
        }
    }
}

/// Checks that a date can be converted.
///
/// The date must lie within the bounds of `kind`, `month` must be in
/// 1..=12 and `day` must be between 1 and the month's length. For lunar
/// dates the month length is that of the intercalation month when
/// `is_intercalation` is set and `month` is the year's intercalation month.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`], [`CalendarError::InvalidMonth`]
/// or [`CalendarError::InvalidDay`] for the first rule that fails.
pub fn check_valid_date(
    kind: CalendarKind,
    is_intercalation: bool,
    year: i32,
    month: u32,
    day: u32,
) -> Result<(), CalendarError> {
    let value = i64::from(year) * 10_000 + i64::from(month) * 100 + i64::from(day);
    let (min, max) = kind.bounds();
    // A huge day can carry into a neighbouring year; never let that reach the table.
    if !(min..=max).contains(&value) || !table::contains(year) {
        return Err(CalendarError::OutOfRange {
            kind,
            value,
            min,
            max,
        });
    }
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let max_day = match kind {
        CalendarKind::Lunar => table::month_length(year, month, is_intercalation)?,
        CalendarKind::Solar => solar_month_length(year, month)?,
    };
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            max_day,
        });
    }
    Ok(())
}
