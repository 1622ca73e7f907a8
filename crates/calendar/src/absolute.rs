//! Absolute day numbers for lunar and solar dates.
//!
//! Both calendars count days from a shared origin: lunar `1000-01-01` and
//! solar `1000-02-13` are both absolute day 1. Every call re-sums the table
//! from [`BASE_YEAR`], so results never depend on prior calls.

use eumryeok_table::{BASE_YEAR, TableError, record};

/// Offset between the solar and lunar day counts at [`BASE_YEAR`].
pub const SOLAR_LUNAR_DAY_DIFF: i32 = 43;

/// Days in each solar month of a common year (index 0 = January).
const SOLAR_MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns the number of days in solar `month` of `year`.
///
/// February takes 29 days when the table marks `year` as a solar leap year.
///
/// # Errors
///
/// Returns [`TableError`] if `year` is outside the table or `month` is not
/// in 1..=12.
pub fn solar_month_length(year: i32, month: u32) -> Result<u32, TableError> {
    let rec = record(year)?;
    if !(1..=12).contains(&month) {
        return Err(TableError::InvalidMonth { month });
    }
    if month == 2 && rec.is_solar_leap_year() {
        return Ok(29);
    }
    Ok(SOLAR_MONTH_DAYS[(month - 1) as usize])
}

/// Returns 366 for a solar leap year, otherwise 365.
pub fn solar_year_length(year: i32) -> Result<u32, TableError> {
    Ok(if record(year)?.is_solar_leap_year() {
        366
    } else {
        365
    })
}

/// Returns the absolute day number of a solar date.
///
/// Only the years `BASE_YEAR..year` and the months before `month` are read
/// from the table, so `solar_absolute_day(LAST_YEAR + 1, 1, 1)` is valid.
///
/// # Errors
///
/// Returns [`TableError`] if a year that has to be summed is outside the table.
pub fn solar_absolute_day(year: i32, month: u32, day: u32) -> Result<i32, TableError> {
    let before_year = (BASE_YEAR..year)
        .map(solar_year_length)
        .sum::<Result<u32, _>>()?;
    let before_month = (1..month)
        .map(|m| solar_month_length(year, m))
        .sum::<Result<u32, _>>()?;
    Ok(before_year as i32 + before_month as i32 + day as i32 - SOLAR_LUNAR_DAY_DIFF)
}

/// Returns the absolute day number of a lunar date.
///
/// The days of an intercalation month follow those of the ordinary month
/// with the same number. `is_intercalation` only has an effect when `month`
/// is the year's intercalation month.
///
/// # Errors
///
/// Returns [`TableError`] if a year that has to be summed is outside the table.
pub fn lunar_absolute_day(
    year: i32,
    month: u32,
    day: u32,
    is_intercalation: bool,
) -> Result<i32, TableError> {
    let before_year = (BASE_YEAR..year)
        .map(|y| record(y).map(|r| r.year_days()))
        .sum::<Result<u32, _>>()?;
    let mut days = before_year as i32 + lunar_days_before_month(year, month)? as i32 + day as i32;

    if is_intercalation {
        let rec = record(year)?;
        if rec.intercalation_month() == Some(month) {
            days += rec.month_days(month, false)? as i32;
        }
    }
    Ok(days)
}

/// Days from the first of lunar `year` to the first of ordinary `month`,
/// counting an intercalation month that falls before `month`.
fn lunar_days_before_month(year: i32, month: u32) -> Result<u32, TableError> {
    if month <= 1 {
        return Ok(0);
    }
    let rec = record(year)?;
    let mut days = (1..month)
        .map(|m| rec.month_days(m, false))
        .sum::<Result<u32, _>>()?;
    if let Some(leap) = rec.intercalation_month() {
        if leap < month {
            days += rec.month_days(leap, true)?;
        }
    }
    Ok(days)
}
