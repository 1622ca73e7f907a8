use eumryeok_table::{
    BASE_YEAR, LAST_YEAR, TableError, intercalation_month, is_solar_leap_year, month_length,
    record, year_length,
};

#[test]
fn month_lengths_sum_to_year_length() {
    for year in BASE_YEAR..=LAST_YEAR {
        let mut total: u32 = (1..=12)
            .map(|m| month_length(year, m, false).unwrap())
            .sum();
        if let Some(leap) = intercalation_month(year).unwrap() {
            total += month_length(year, leap, true).unwrap();
        }
        assert_eq!(
            total,
            year_length(year).unwrap(),
            "month lengths do not add up for {year}"
        );
        assert_eq!(record(year).unwrap().summed_month_days(), total);
    }
}

#[test]
fn year_lengths_are_plausible() {
    for year in BASE_YEAR..=LAST_YEAR {
        let days = year_length(year).unwrap();
        let has_leap = intercalation_month(year).unwrap().is_some();
        let expected = if has_leap { 383..=385 } else { 353..=356 };
        assert!(
            expected.contains(&days),
            "{year}: {days} days (intercalation: {has_leap})"
        );
    }
}

#[test]
fn intercalation_months_in_range() {
    for year in BASE_YEAR..=LAST_YEAR {
        if let Some(m) = intercalation_month(year).unwrap() {
            assert!((1..=12).contains(&m), "{year}: intercalation month {m}");
        }
    }
}

#[test]
fn solar_leap_flag_follows_gregorian_rule() {
    for year in BASE_YEAR..=LAST_YEAR {
        let gregorian = year % 4 == 0 && year % 100 != 0 || year % 400 == 0;
        assert_eq!(is_solar_leap_year(year).unwrap(), gregorian, "{year}");
    }
}

#[test]
fn lookups_outside_table_fail() {
    for year in [BASE_YEAR - 1, LAST_YEAR + 1, 0, i32::MIN, i32::MAX] {
        assert_eq!(
            record(year).unwrap_err(),
            TableError::YearOutOfRange {
                year,
                min: BASE_YEAR,
                max: LAST_YEAR,
            }
        );
    }
}
