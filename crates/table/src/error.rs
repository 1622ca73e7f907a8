//! Error types for the eumryeok-table crate.

/// Error type for lookups into the lunar year table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Returned when a year falls outside the compiled table.
    #[error("year {year} is outside the lunar table ({min}..={max})")]
    YearOutOfRange {
        /// The requested year.
        year: i32,
        /// First year covered by the table.
        min: i32,
        /// Last year covered by the table.
        max: i32,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },
}
