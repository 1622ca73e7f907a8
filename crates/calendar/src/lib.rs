//! # eumryeok-calendar
//!
//! Conversion between the Korean lunar calendar and the Gregorian solar
//! calendar for 1000..=2050, plus sexagenary (gapja) names.
//!
//! ## Architecture
//!
//! ```text
//! KoreanLunarCalendar::set_solar_date() / set_lunar_date()
//!   ├─ check_valid_date()                  (validate.rs)
//!   ├─ solar_absolute_day() / lunar_absolute_day()
//!   │                                      (absolute.rs, over eumryeok-table)
//!   └─ reverse month scan 12..=1           (converter.rs)
//!
//! KoreanLunarCalendar::gapja()
//!   └─ Gapja::from_lunar() -> render()     (gapja.rs)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use eumryeok_calendar::KoreanLunarCalendar;
//!
//! let mut calendar = KoreanLunarCalendar::new();
//! assert!(calendar.set_lunar_date(2017, 5, 1, true));
//!
//! assert_eq!(calendar.solar_iso_format(), "2017-06-24");
//! assert_eq!(calendar.chinese_gapja_string(), "丁酉年 丙午月 壬午日 (閏月)");
//!
//! // Rejected requests leave the converter untouched.
//! assert!(!calendar.set_solar_date(2017, 2, 29));
//! assert_eq!(calendar.solar_iso_format(), "2017-06-24");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `absolute` | Absolute day numbers shared by both calendars |
//! | `converter` | [`KoreanLunarCalendar`] |
//! | `date` | Lunar, solar and paired date values |
//! | `validate` | Supported range and the validity rule |
//! | `gapja` | Sexagenary names and scripts |
//! | `config` | Rendering options |
//! | `error` | Error types |

pub mod absolute;
pub mod config;
pub mod error;

mod converter;
mod date;
mod gapja;
mod validate;

pub use absolute::{SOLAR_LUNAR_DAY_DIFF, lunar_absolute_day, solar_absolute_day};
pub use config::RenderConfig;
pub use converter::KoreanLunarCalendar;
pub use date::{CalendarDate, CalendarKind, LunarDate, SolarDate};
pub use error::CalendarError;
pub use gapja::{Gapja, Script, StemBranch};
pub use validate::{LUNAR_MAX, LUNAR_MIN, SOLAR_MAX, SOLAR_MIN, check_valid_date};
