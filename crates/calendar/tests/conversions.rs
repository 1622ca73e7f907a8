use eumryeok_calendar::absolute::solar_month_length;
use eumryeok_calendar::{KoreanLunarCalendar, LunarDate, SolarDate};
use eumryeok_table::{intercalation_month, month_length};

fn next_solar(date: SolarDate) -> SolarDate {
    let SolarDate { year, month, day } = date;
    if day < solar_month_length(year, month).unwrap() {
        SolarDate { day: day + 1, ..date }
    } else if month < 12 {
        SolarDate {
            year,
            month: month + 1,
            day: 1,
        }
    } else {
        SolarDate {
            year: year + 1,
            month: 1,
            day: 1,
        }
    }
}

/// Every lunar day of `year` in calendar order, intercalation months included.
fn lunar_days(year: i32) -> Vec<LunarDate> {
    let leap = intercalation_month(year).unwrap();
    let mut out = Vec::with_capacity(385);
    for month in 1..=12 {
        for is_intercalation in [false, true] {
            if is_intercalation && leap != Some(month) {
                continue;
            }
            for day in 1..=month_length(year, month, is_intercalation).unwrap() {
                out.push(LunarDate {
                    year,
                    month,
                    day,
                    is_intercalation,
                });
            }
        }
    }
    out
}

fn assert_solar_round_trip(calendar: &mut KoreanLunarCalendar, date: SolarDate) {
    assert!(
        calendar.set_solar_date(date.year, date.month, date.day),
        "solar {date} rejected"
    );
    let lunar = calendar.lunar_date();
    assert!(
        calendar.set_lunar_date(lunar.year, lunar.month, lunar.day, lunar.is_intercalation),
        "lunar {lunar} (from solar {date}) rejected"
    );
    assert_eq!(calendar.solar_date(), date, "round trip via lunar {lunar}");
    assert_eq!(calendar.lunar_date(), lunar);
}

#[test]
fn concrete_scenario_2017_06_24() {
    let mut calendar = KoreanLunarCalendar::new();
    assert!(calendar.set_solar_date(2017, 6, 24));

    assert_eq!(calendar.lunar_year(), 2017);
    assert_eq!(calendar.lunar_month(), 5);
    assert_eq!(calendar.lunar_day(), 1);
    assert!(calendar.is_intercalation());
    assert_eq!(calendar.lunar_iso_format(), "2017-05-01 Intercalation");
    assert_eq!(calendar.solar_iso_format(), "2017-06-24");
    assert_eq!(calendar.gapja_string(), "정유년 병오월 임오일 (윤월)");
    assert_eq!(calendar.chinese_gapja_string(), "丁酉年 丙午月 壬午日 (閏月)");
}

#[test]
fn known_dates() {
    let cases = [
        ((2000, 1, 1), "1999-11-25", "기묘년 병자월 무오일"),
        ((2024, 2, 10), "2024-01-01", "갑진년 병인월 갑진일"),
        ((2020, 5, 23), "2020-04-01 Intercalation", "경자년 신사월 병인일 (윤월)"),
        ((2020, 6, 21), "2020-05-01", "경자년 임오월 을미일"),
        ((2033, 12, 22), "2033-11-01 Intercalation", "계축년 갑자월 정미일 (윤월)"),
        ((1900, 1, 31), "1900-01-01", "경자년 무인월 갑진일"),
        ((1582, 10, 10), "1582-09-14", "임오년 경술월 기사일"),
    ];
    let mut calendar = KoreanLunarCalendar::new();
    for ((y, m, d), lunar_iso, gapja) in cases {
        assert!(calendar.set_solar_date(y, m, d), "{y:04}-{m:02}-{d:02}");
        assert_eq!(calendar.lunar_iso_format(), lunar_iso, "{y:04}-{m:02}-{d:02}");
        assert_eq!(calendar.gapja_string(), gapja, "{y:04}-{m:02}-{d:02}");
    }
}

#[test]
fn range_endpoints_line_up() {
    let mut calendar = KoreanLunarCalendar::new();
    assert!(calendar.set_solar_date(1000, 2, 13));
    assert_eq!(calendar.lunar_iso_format(), "1000-01-01");
    assert!(calendar.set_solar_date(2050, 12, 31));
    assert_eq!(calendar.lunar_iso_format(), "2050-11-18");
    assert!(calendar.set_lunar_date(1000, 1, 1, false));
    assert_eq!(calendar.solar_iso_format(), "1000-02-13");
    assert!(calendar.set_lunar_date(2050, 11, 18, false));
    assert_eq!(calendar.solar_iso_format(), "2050-12-31");
}

#[test]
fn solar_round_trip_every_day_2016_to_2018() {
    let mut calendar = KoreanLunarCalendar::new();
    let mut date = SolarDate {
        year: 2016,
        month: 1,
        day: 1,
    };
    while date.year <= 2018 {
        assert_solar_round_trip(&mut calendar, date);
        date = next_solar(date);
    }
}

#[test]
fn solar_round_trip_sampled_over_full_range() {
    let mut calendar = KoreanLunarCalendar::new();
    let mut date = SolarDate {
        year: 1000,
        month: 2,
        day: 13,
    };
    let mut n = 0usize;
    while date.year <= 2050 {
        if n % 101 == 0 {
            assert_solar_round_trip(&mut calendar, date);
        }
        n += 1;
        date = next_solar(date);
    }
    assert_eq!(n, 383_827);
}

#[test]
fn lunar_round_trip_through_intercalation_years() {
    let mut calendar = KoreanLunarCalendar::new();
    for year in [1582, 2017, 2020, 2033, 2036] {
        for lunar in lunar_days(year) {
            assert!(calendar.set_lunar_date(
                lunar.year,
                lunar.month,
                lunar.day,
                lunar.is_intercalation
            ));
            assert_eq!(calendar.lunar_date(), lunar);
            let solar = calendar.solar_date();
            assert!(calendar.set_solar_date(solar.year, solar.month, solar.day));
            assert_eq!(calendar.lunar_date(), lunar, "via solar {solar}");
        }
    }
}

#[test]
fn consecutive_lunar_days_map_to_consecutive_solar_days() {
    let mut calendar = KoreanLunarCalendar::new();
    let days = lunar_days(2017);
    assert!(calendar.set_lunar_date(2017, 1, 1, false));
    let mut expected = calendar.solar_date();
    for lunar in days {
        assert!(calendar.set_lunar_date(
            lunar.year,
            lunar.month,
            lunar.day,
            lunar.is_intercalation
        ));
        assert_eq!(calendar.solar_date(), expected, "lunar {lunar}");
        expected = next_solar(expected);
    }
}
