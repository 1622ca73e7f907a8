//! Korean lunar calendar conversion.
//!
//! Converts dates between the Korean lunar calendar and the Gregorian
//! solar calendar for lunar 1000-01-01 through 2050-11-18, and names the
//! year, month and day in the sixty-term sexagenary (gapja) cycle.
//!
//! | Crate | Contents |
//! |---|---|
//! | [`table`] | packed per-year lunar data and its accessors |
//! | [`calendar`] | absolute day counter, converter, gapja names |
//!
//! This crate re-exports both and adds a TOML configuration layer
//! ([`config`], [`convert`]) and [`logging`] setup.
//!
//! # Example
//!
//! ```
//! use eumryeok::{KoreanLunarCalendar, Script};
//!
//! let mut calendar = KoreanLunarCalendar::new();
//! assert!(calendar.set_lunar_date(2017, 5, 1, true));
//! assert_eq!(calendar.solar_iso_format(), "2017-06-24");
//! assert_eq!(calendar.gapja().render(Script::Chinese), "丁酉年 丙午月 壬午日 (閏月)");
//! ```

pub mod config;
pub mod convert;
pub mod logging;

pub use eumryeok_calendar as calendar;
pub use eumryeok_table as table;

pub use eumryeok_calendar::{
    CalendarDate, CalendarError, CalendarKind, Gapja, KoreanLunarCalendar, LunarDate,
    RenderConfig, Script, SolarDate, StemBranch,
};
pub use eumryeok_table::TableError;
