//! Typed view over one packed lunar year word.

use crate::error::TableError;

/// Days in a "small" lunar month.
pub const SMALL_MONTH_DAYS: u32 = 29;

/// Days in a "big" lunar month.
pub const BIG_MONTH_DAYS: u32 = 30;

const INTERCALATION_MONTH_SHIFT: u32 = 12;
const INTERCALATION_MONTH_MASK: u32 = 0x0F;
const INTERCALATION_BIG_SHIFT: u32 = 16;
const YEAR_DAYS_SHIFT: u32 = 17;
const YEAR_DAYS_MASK: u32 = 0x01FF;
const SOLAR_LEAP_SHIFT: u32 = 30;

/// One lunar year of the table, packed into 32 bits.
///
/// | Bits  | Meaning |
/// |-------|---------|
/// | 0-11  | big (30) / small (29) flag for months 1..=12, month `m` at bit `12 - m` |
/// | 12-15 | intercalation month number, `0` when the year has none |
/// | 16    | big / small flag of the intercalation month |
/// | 17-25 | total days in the lunar year |
/// | 30    | the overlapping solar year is a leap year |
///
/// The remaining bits are not interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarYearRecord(u32);

impl LunarYearRecord {
    /// Wraps a raw packed word.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw packed word.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if ordinary month `month` has 30 days.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn month_is_big(self, month: u32) -> Result<bool, TableError> {
        if !(1..=12).contains(&month) {
            return Err(TableError::InvalidMonth { month });
        }
        Ok((self.0 >> (12 - month)) & 0x01 == 1)
    }

    /// Returns the intercalation month number, or `None` for a year without one.
    pub fn intercalation_month(self) -> Option<u32> {
        match (self.0 >> INTERCALATION_MONTH_SHIFT) & INTERCALATION_MONTH_MASK {
            0 => None,
            month => Some(month),
        }
    }

    /// Returns `true` if the intercalation month has 30 days.
    ///
    /// Only meaningful when [`intercalation_month`](Self::intercalation_month) is `Some`.
    pub fn intercalation_is_big(self) -> bool {
        (self.0 >> INTERCALATION_BIG_SHIFT) & 0x01 == 1
    }

    /// Returns the number of days (29 or 30) in `month`.
    ///
    /// The intercalation flag is honoured only when `month` is this year's
    /// intercalation month; otherwise the ordinary month length is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn month_days(self, month: u32, is_intercalation: bool) -> Result<u32, TableError> {
        let big = if is_intercalation && self.intercalation_month() == Some(month) {
            self.intercalation_is_big()
        } else {
            self.month_is_big(month)?
        };
        Ok(if big { BIG_MONTH_DAYS } else { SMALL_MONTH_DAYS })
    }

    /// Returns the stored total number of days in the lunar year.
    pub fn year_days(self) -> u32 {
        (self.0 >> YEAR_DAYS_SHIFT) & YEAR_DAYS_MASK
    }

    /// Returns `true` if the solar year sharing this slot is a leap year.
    pub fn is_solar_leap_year(self) -> bool {
        (self.0 >> SOLAR_LEAP_SHIFT) & 0x01 == 1
    }

    /// Sums the month lengths encoded in bits 0-16.
    ///
    /// Equals [`year_days`](Self::year_days) for every well-formed record.
    pub fn summed_month_days(self) -> u32 {
        let ordinary: u32 = (1..=12)
            .map(|m| {
                if (self.0 >> (12 - m)) & 0x01 == 1 {
                    BIG_MONTH_DAYS
                } else {
                    SMALL_MONTH_DAYS
                }
            })
            .sum();
        let intercalation = match self.intercalation_month() {
            Some(_) if self.intercalation_is_big() => BIG_MONTH_DAYS,
            Some(_) => SMALL_MONTH_DAYS,
            None => 0,
        };
        ordinary + intercalation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2017: intercalation after month 5, 384 days, common solar year.
    const Y2017: LunarYearRecord = LunarYearRecord::from_bits(0x8300_5557);

    #[test]
    fn month_flags() {
        // 0x..557 -> months 1..=12: 0 1 0 1 0 1 0 1 0 1 1 1
        let expected = [
            false, true, false, true, false, true, false, true, false, true, true, true,
        ];
        for (m, big) in (1..=12).zip(expected) {
            assert_eq!(Y2017.month_is_big(m).unwrap(), big, "month {m}");
        }
    }

    #[test]
    fn month_is_big_rejects_bad_month() {
        assert_eq!(
            Y2017.month_is_big(0).unwrap_err(),
            TableError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            Y2017.month_is_big(13).unwrap_err(),
            TableError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn intercalation_fields() {
        assert_eq!(Y2017.intercalation_month(), Some(5));
        assert!(!Y2017.intercalation_is_big());
        assert_eq!(Y2017.month_days(5, true).unwrap(), 29);
        assert_eq!(Y2017.month_days(5, false).unwrap(), 29);
    }

    #[test]
    fn intercalation_flag_ignored_for_other_months() {
        assert_eq!(Y2017.month_days(1, true).unwrap(), 29);
        assert_eq!(Y2017.month_days(2, true).unwrap(), 30);
    }

    #[test]
    fn no_intercalation() {
        let rec = LunarYearRecord::from_bits(0x82c6_0a57);
        assert_eq!(rec.intercalation_month(), None);
        assert_eq!(rec.year_days(), 355);
    }

    #[test]
    fn year_days_and_leap_flag() {
        assert_eq!(Y2017.year_days(), 384);
        assert!(!Y2017.is_solar_leap_year());
        let leap = LunarYearRecord::from_bits(0xc300_95ad);
        assert!(leap.is_solar_leap_year());
    }

    #[test]
    fn summed_matches_stored() {
        assert_eq!(Y2017.summed_month_days(), Y2017.year_days());
    }

    #[test]
    fn bits_roundtrip() {
        assert_eq!(Y2017.bits(), 0x8300_5557);
    }
}
