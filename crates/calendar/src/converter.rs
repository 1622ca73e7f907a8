//! Bidirectional lunar / solar conversion.

use eumryeok_table as table;
use tracing::{debug, trace};

use crate::absolute::{lunar_absolute_day, solar_absolute_day};
use crate::config::RenderConfig;
use crate::date::{CalendarDate, CalendarKind, LunarDate, SolarDate};
use crate::error::CalendarError;
use crate::gapja::{Gapja, Script};
use crate::validate::check_valid_date;

/// Converts dates between the Korean lunar calendar and the Gregorian
/// solar calendar.
///
/// The converter holds one [`CalendarDate`]. A setter either replaces it
/// completely or, when the request is rejected, leaves it untouched. Each
/// caller owns its own instance; share one across threads behind a lock.
///
/// # Example
///
/// ```
/// use eumryeok_calendar::KoreanLunarCalendar;
///
/// let mut calendar = KoreanLunarCalendar::new();
/// assert!(calendar.set_solar_date(2017, 6, 24));
///
/// assert_eq!(calendar.lunar_iso_format(), "2017-05-01 Intercalation");
/// assert_eq!(calendar.gapja_string(), "정유년 병오월 임오일 (윤월)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KoreanLunarCalendar {
    date: CalendarDate,
}

impl KoreanLunarCalendar {
    /// Creates a converter with no date set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a lunar date and derives the matching solar date.
    ///
    /// Returns `false`, leaving the current date unchanged, if the date is
    /// not valid. `is_intercalation` is cleared when `month` is not the
    /// year's intercalation month.
    pub fn set_lunar_date(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        is_intercalation: bool,
    ) -> bool {
        match self.try_set_lunar_date(year, month, day, is_intercalation) {
            Ok(()) => true,
            Err(e) => {
                debug!(year, month, day, is_intercalation, error = %e, "rejected lunar date");
                false
            }
        }
    }

    /// Sets a solar date and derives the matching lunar date.
    ///
    /// Returns `false`, leaving the current date unchanged, if the date is
    /// not valid.
    pub fn set_solar_date(&mut self, year: i32, month: u32, day: u32) -> bool {
        match self.try_set_solar_date(year, month, day) {
            Ok(()) => true,
            Err(e) => {
                debug!(year, month, day, error = %e, "rejected solar date");
                false
            }
        }
    }

    /// Like [`set_lunar_date`](Self::set_lunar_date), reporting why a date
    /// was rejected.
    ///
    /// # Errors
    ///
    /// Returns the [`CalendarError`] of the first validity rule that fails.
    pub fn try_set_lunar_date(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        is_intercalation: bool,
    ) -> Result<(), CalendarError> {
        check_valid_date(CalendarKind::Lunar, is_intercalation, year, month, day)?;
        let lunar = LunarDate {
            year,
            month,
            day,
            is_intercalation: is_intercalation
                && table::intercalation_month(year)? == Some(month),
        };
        let solar = solar_for_lunar(&lunar)?;
        self.date = CalendarDate { lunar, solar };
        trace!(%lunar, %solar, "lunar date set");
        Ok(())
    }

    /// Like [`set_solar_date`](Self::set_solar_date), reporting why a date
    /// was rejected.
    ///
    /// # Errors
    ///
    /// Returns the [`CalendarError`] of the first validity rule that fails.
    pub fn try_set_solar_date(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<(), CalendarError> {
        check_valid_date(CalendarKind::Solar, false, year, month, day)?;
        let solar = SolarDate { year, month, day };
        let lunar = lunar_for_solar(&solar)?;
        self.date = CalendarDate { lunar, solar };
        trace!(%lunar, %solar, "solar date set");
        Ok(())
    }

    /// Returns the current date in both calendars.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the current lunar date.
    pub fn lunar_date(&self) -> LunarDate {
        self.date.lunar
    }

    /// Returns the current solar date.
    pub fn solar_date(&self) -> SolarDate {
        self.date.solar
    }

    /// Lunar year of the current date.
    pub fn lunar_year(&self) -> i32 {
        self.date.lunar.year
    }

    /// Lunar month of the current date.
    pub fn lunar_month(&self) -> u32 {
        self.date.lunar.month
    }

    /// Lunar day of the current date.
    pub fn lunar_day(&self) -> u32 {
        self.date.lunar.day
    }

    /// Returns `true` if the current lunar month is an intercalation month.
    pub fn is_intercalation(&self) -> bool {
        self.date.lunar.is_intercalation
    }

    /// Solar year of the current date.
    pub fn solar_year(&self) -> i32 {
        self.date.solar.year
    }

    /// Solar month of the current date.
    pub fn solar_month(&self) -> u32 {
        self.date.solar.month
    }

    /// Solar day of the current date.
    pub fn solar_day(&self) -> u32 {
        self.date.solar.day
    }

    /// Lunar date as `YYYY-MM-DD`, with `" Intercalation"` appended when applicable.
    pub fn lunar_iso_format(&self) -> String {
        self.date.lunar.iso_format()
    }

    /// Solar date as `YYYY-MM-DD`.
    pub fn solar_iso_format(&self) -> String {
        self.date.solar.iso_format()
    }

    /// Returns the sexagenary names of the current lunar date.
    pub fn gapja(&self) -> Gapja {
        // The stored date is either the zeroed default or has passed validation.
        Gapja::from_lunar(&self.date.lunar).unwrap_or_default()
    }

    /// Sexagenary names in Hangul, e.g. `정유년 병오월 임오일 (윤월)`.
    pub fn gapja_string(&self) -> String {
        self.gapja().render(Script::Korean)
    }

    /// Sexagenary names in Hanja, e.g. `丁酉年 丙午月 壬午日 (閏月)`.
    pub fn chinese_gapja_string(&self) -> String {
        self.gapja().render(Script::Chinese)
    }

    /// Sexagenary names rendered with `config`.
    pub fn gapja_string_with(&self, config: &RenderConfig) -> String {
        self.gapja().render_with(config)
    }
}

/// Finds the largest month in 12..=1 whose first day is on or before
/// `target`, returning it together with that first day.
fn last_month_starting_by(
    target: i32,
    mut first_day: impl FnMut(u32) -> Result<i32, CalendarError>,
) -> Result<(u32, i32), CalendarError> {
    for month in (1..=12).rev() {
        let start = first_day(month)?;
        if start <= target {
            return Ok((month, start));
        }
    }
    Err(CalendarError::NoMonthFound {
        absolute_day: target,
    })
}

fn solar_for_lunar(lunar: &LunarDate) -> Result<SolarDate, CalendarError> {
    let absolute_day =
        lunar_absolute_day(lunar.year, lunar.month, lunar.day, lunar.is_intercalation)?;

    let year = if absolute_day < solar_absolute_day(lunar.year + 1, 1, 1)? {
        lunar.year
    } else {
        lunar.year + 1
    };
    let (month, start) =
        last_month_starting_by(absolute_day, |m| Ok(solar_absolute_day(year, m, 1)?))?;

    Ok(SolarDate {
        year,
        month,
        day: (absolute_day - start + 1) as u32,
    })
}

fn lunar_for_solar(solar: &SolarDate) -> Result<LunarDate, CalendarError> {
    let absolute_day = solar_absolute_day(solar.year, solar.month, solar.day)?;

    let year = if absolute_day >= lunar_absolute_day(solar.year, 1, 1, false)? {
        solar.year
    } else {
        solar.year - 1
    };
    let (month, mut start) =
        last_month_starting_by(absolute_day, |m| Ok(lunar_absolute_day(year, m, 1, false)?))?;

    let mut is_intercalation = false;
    if table::intercalation_month(year)? == Some(month) {
        let leap_start = lunar_absolute_day(year, month, 1, true)?;
        if absolute_day >= leap_start {
            is_intercalation = true;
            start = leap_start;
        }
    }

    Ok(LunarDate {
        year,
        month,
        day: (absolute_day - start + 1) as u32,
        is_intercalation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_instance_is_unset() {
        let calendar = KoreanLunarCalendar::new();
        assert!(!calendar.date().is_set());
        assert_eq!(calendar.lunar_year(), 0);
        assert_eq!(calendar.solar_day(), 0);
        assert!(!calendar.is_intercalation());
        assert_eq!(calendar.gapja_string(), "갑자년 갑자월 갑자일");
    }

    #[test]
    fn solar_to_lunar_intercalation() {
        let mut calendar = KoreanLunarCalendar::new();
        assert!(calendar.set_solar_date(2017, 6, 24));
        assert_eq!(
            calendar.lunar_date(),
            LunarDate {
                year: 2017,
                month: 5,
                day: 1,
                is_intercalation: true,
            }
        );
        assert_eq!(calendar.lunar_iso_format(), "2017-05-01 Intercalation");
        assert_eq!(calendar.solar_iso_format(), "2017-06-24");
    }

    #[test]
    fn lunar_to_solar_intercalation() {
        let mut calendar = KoreanLunarCalendar::new();
        assert!(calendar.set_lunar_date(2017, 5, 1, true));
        assert_eq!(
            calendar.solar_date(),
            SolarDate {
                year: 2017,
                month: 6,
                day: 24,
            }
        );
        assert!(calendar.set_lunar_date(2017, 5, 1, false));
        assert_eq!(calendar.solar_iso_format(), "2017-05-26");
    }

    #[test]
    fn intercalation_flag_cleared_for_ordinary_month() {
        let mut calendar = KoreanLunarCalendar::new();
        assert!(calendar.set_lunar_date(2018, 5, 1, true));
        assert!(!calendar.is_intercalation());
        assert_eq!(calendar.lunar_iso_format(), "2018-05-01");

        let mut plain = KoreanLunarCalendar::new();
        assert!(plain.set_lunar_date(2018, 5, 1, false));
        assert_eq!(calendar, plain);
    }

    #[test]
    fn lunar_new_year_rolls_solar_year() {
        let mut calendar = KoreanLunarCalendar::new();
        assert!(calendar.set_solar_date(2000, 1, 1));
        assert_eq!(calendar.lunar_iso_format(), "1999-11-25");
        assert!(calendar.set_lunar_date(1999, 11, 25, false));
        assert_eq!(calendar.solar_iso_format(), "2000-01-01");
    }

    #[test]
    fn rejected_request_keeps_state() {
        let mut calendar = KoreanLunarCalendar::new();
        assert!(calendar.set_solar_date(2017, 6, 24));
        let before = calendar.clone();

        assert!(!calendar.set_solar_date(2017, 2, 29));
        assert!(!calendar.set_lunar_date(2017, 13, 1, false));
        assert!(!calendar.set_lunar_date(2050, 11, 19, false));
        assert_eq!(calendar, before);
    }

    #[test]
    fn try_setters_report_reason() {
        let mut calendar = KoreanLunarCalendar::new();
        assert_eq!(
            calendar.try_set_lunar_date(2020, 4, 30, true).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 4,
                max_day: 29,
            }
        );
        assert!(!calendar.date().is_set());
    }

    #[test]
    fn reverse_search_picks_largest_month() {
        let starts = [1, 31, 61, 91, 121, 151, 181, 211, 241, 271, 301, 331];
        let found = last_month_starting_by(61, |m| Ok(starts[(m - 1) as usize])).unwrap();
        assert_eq!(found, (3, 61));
        let found = last_month_starting_by(60, |m| Ok(starts[(m - 1) as usize])).unwrap();
        assert_eq!(found, (2, 31));
        assert_eq!(
            last_month_starting_by(0, |m| Ok(starts[(m - 1) as usize])).unwrap_err(),
            CalendarError::NoMonthFound { absolute_day: 0 }
        );
    }

    #[test]
    fn send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<KoreanLunarCalendar>();
    }
}
