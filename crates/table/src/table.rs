//! Year-indexed lookups into the packed table.

use crate::data::LUNAR_YEAR_DATA;
use crate::error::TableError;
use crate::record::LunarYearRecord;

/// First year covered by the table.
pub const BASE_YEAR: i32 = 1000;

/// Last year covered by the table.
pub const LAST_YEAR: i32 = BASE_YEAR + LUNAR_YEAR_DATA.len() as i32 - 1;

/// Returns `true` if `year` has a record in the table.
pub fn contains(year: i32) -> bool {
    (BASE_YEAR..=LAST_YEAR).contains(&year)
}

/// Returns the packed record for `year`.
///
/// # Errors
///
/// Returns [`TableError::YearOutOfRange`] if `year` is not in
/// `BASE_YEAR..=LAST_YEAR`.
pub fn record(year: i32) -> Result<LunarYearRecord, TableError> {
    if !contains(year) {
        return Err(TableError::YearOutOfRange {
            year,
            min: BASE_YEAR,
            max: LAST_YEAR,
        });
    }
    Ok(LunarYearRecord::from_bits(
        LUNAR_YEAR_DATA[(year - BASE_YEAR) as usize],
    ))
}

/// Returns the length (29 or 30) of lunar `month` in `year`.
///
/// With `is_intercalation` set and `month` equal to the year's
/// intercalation month, the intercalation month's length is returned.
pub fn month_length(year: i32, month: u32, is_intercalation: bool) -> Result<u32, TableError> {
    record(year)?.month_days(month, is_intercalation)
}

/// Returns the total number of days in lunar `year`.
pub fn year_length(year: i32) -> Result<u32, TableError> {
    Ok(record(year)?.year_days())
}

/// Returns the intercalation month of `year`, if any.
pub fn intercalation_month(year: i32) -> Result<Option<u32>, TableError> {
    Ok(record(year)?.intercalation_month())
}

/// Returns `true` if the solar year `year` is a leap year.
pub fn is_solar_leap_year(year: i32) -> Result<bool, TableError> {
    Ok(record(year)?.is_solar_leap_year())
}
