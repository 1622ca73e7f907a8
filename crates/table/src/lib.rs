//! # eumryeok-table
//!
//! The Korean lunar year table: one packed 32-bit word per year from
//! [`BASE_YEAR`] to [`LAST_YEAR`], plus typed accessors over it.
//!
//! ## Quick Start
//!
//! ```
//! use eumryeok_table::{intercalation_month, month_length, year_length};
//!
//! assert_eq!(intercalation_month(2017).unwrap(), Some(5));
//! assert_eq!(month_length(2017, 5, true).unwrap(), 29);
//! assert_eq!(year_length(2017).unwrap(), 384);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `record` | [`LunarYearRecord`] bit-layout accessors |
//! | `table` | Year-indexed lookups and range constants |
//! | `data` | The packed data asset |
//! | `error` | Error types |

mod data;
mod error;
mod record;
mod table;

pub use error::TableError;
pub use record::{BIG_MONTH_DAYS, LunarYearRecord, SMALL_MONTH_DAYS};
pub use table::{
    BASE_YEAR, LAST_YEAR, contains, intercalation_month, is_solar_leap_year, month_length, record,
    year_length,
};
