//! Lunar and solar date values held by the converter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two calendars a date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    /// Korean lunar calendar.
    Lunar,
    /// Gregorian solar calendar.
    Solar,
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lunar => f.write_str("lunar"),
            Self::Solar => f.write_str("solar"),
        }
    }
}

/// A date in the Korean lunar calendar.
///
/// `is_intercalation` marks the repeated (leap) month carrying the same
/// number as `month`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_intercalation: bool,
}

impl LunarDate {
    /// Formats the date as `YYYY-MM-DD`, followed by `" Intercalation"` for
    /// a day of an intercalation month.
    pub fn iso_format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.is_intercalation {
            f.write_str(" Intercalation")?;
        }
        Ok(())
    }
}

/// A date in the Gregorian solar calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    /// Formats the date as `YYYY-MM-DD`.
    pub fn iso_format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// The same day expressed in both calendars.
///
/// The default value has every field zeroed and stands for "no date set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub lunar: LunarDate,
    pub solar: SolarDate,
}

impl CalendarDate {
    /// Returns `false` for the zeroed default.
    pub fn is_set(&self) -> bool {
        *self != Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lunar_iso() {
        let date = LunarDate {
            year: 2017,
            month: 5,
            day: 1,
            is_intercalation: true,
        };
        assert_eq!(date.iso_format(), "2017-05-01 Intercalation");

        let date = LunarDate {
            is_intercalation: false,
            ..date
        };
        assert_eq!(date.iso_format(), "2017-05-01");
    }

    #[test]
    fn solar_iso() {
        let date = SolarDate {
            year: 1000,
            month: 2,
            day: 13,
        };
        assert_eq!(date.iso_format(), "1000-02-13");
    }

    #[test]
    fn unset_default() {
        let date = CalendarDate::default();
        assert!(!date.is_set());
        assert_eq!(date.lunar.iso_format(), "0000-00-00");
        assert_eq!(date.solar.iso_format(), "0000-00-00");
    }

    #[test]
    fn kind_display() {
        assert_eq!(CalendarKind::Lunar.to_string(), "lunar");
        assert_eq!(CalendarKind::Solar.to_string(), "solar");
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<CalendarDate>();
    }
}
