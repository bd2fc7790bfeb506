use nengo_rs::{DateFacilities, ErrorKind, Instant, JapaneseEra, UtcOffset, Weekday};

const FULL_PATTERN: &str = "yyyy/MM/dd HH:mm:ss.SSS";

fn facilities() -> [DateFacilities; 3] {
    [
        DateFacilities::UTC,
        DateFacilities::new(UtcOffset::JST),
        DateFacilities::new(UtcOffset::from_hours_minutes(-3, -30).unwrap()),
    ]
}

#[test]
fn format_parse_round_trip() {
    for facilities in facilities() {
        for ms in [
            0,
            -1,
            1_709_214_330_123,
            -14_182_940_000_000,
            253_402_300_799_999,
        ] {
            let instant = Instant::from_epoch_milliseconds(ms);
            let text = facilities.format(instant, FULL_PATTERN);
            let parsed = facilities.parse(&text, FULL_PATTERN).unwrap();
            assert_eq!(parsed, Some(instant), "{text} in {}", facilities.offset());
        }
    }
}

#[test]
fn empty_in_empty_out() {
    let facilities = DateFacilities::default();
    assert_eq!(facilities.format(None, FULL_PATTERN), "");
    assert_eq!(facilities.parse("", FULL_PATTERN), Ok(None));
}

#[test]
fn parse_failure_names_pattern() {
    let err = DateFacilities::UTC
        .parse("29 February", FULL_PATTERN)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert_eq!(err.pattern(), Some(FULL_PATTERN));
}

#[test]
fn leap_years() {
    assert!(DateFacilities::is_leap_year(2000));
    assert!(!DateFacilities::is_leap_year(1900));
    assert!(DateFacilities::is_leap_year(2024));
    assert!(!DateFacilities::is_leap_year(2023));
}

#[test]
fn last_days_of_february() {
    let facilities = DateFacilities::UTC;
    assert_eq!(DateFacilities::last_day(2024, 2), 29);
    assert_eq!(DateFacilities::last_day(2023, 2), 28);
    let last_date = facilities.last_date(2024, 2).unwrap();
    assert_eq!(facilities.format(last_date, "yyyy/MM/dd"), "2024/02/29");
    assert_eq!(facilities.format(last_date, "HH:mm:ss.SSS"), "00:00:00.000");
}

#[test]
fn date_strings_must_not_roll_over() {
    let facilities = DateFacilities::UTC;
    assert!(!facilities.is_valid_date_string("2000/02/31", "yyyy/MM/dd"));
    assert!(facilities.is_valid_date_string("2000/02/29", "yyyy/MM/dd"));
    assert!(facilities.is_valid_date_string("", "yyyy/MM/dd"));
}

#[test]
fn overlap_is_inclusive() {
    let facilities = DateFacilities::UTC;
    let a = facilities.date(2024, 1, 1).unwrap();
    let b = facilities.date(2024, 1, 10).unwrap();
    let c = facilities.date(2024, 1, 20).unwrap();

    assert!(DateFacilities::is_overlap_period(a, b, b, c));
    assert!(!DateFacilities::is_overlap_period(
        a,
        facilities.add_millisecond(b, -1),
        b,
        c
    ));
    assert!(DateFacilities::is_overlap_period(None, None, a, a));
    assert!(DateFacilities::is_overlap_period(a, None, None, a));
}

#[test]
fn heisei_years() {
    let facilities = DateFacilities::new(UtcOffset::JST);
    let first_day = facilities.date(1989, 1, 8).unwrap();
    let last_day_of_showa = facilities.add_millisecond(first_day, -1);
    let end_of_first_year = facilities.max_of_date(facilities.date(1989, 12, 31).unwrap());
    let second_year = facilities.date(1990, 1, 1).unwrap();

    assert_eq!(facilities.japanese_era(first_day), Some(JapaneseEra::Heisei));
    assert_eq!(
        facilities.japanese_era(last_day_of_showa),
        Some(JapaneseEra::Showa)
    );
    assert_eq!(facilities.japanese_year(first_day), 1);
    assert_eq!(facilities.japanese_year(end_of_first_year), 1);
    assert_eq!(facilities.japanese_year(second_year), 2);
    assert_eq!(
        JapaneseEra::Heisei.start_instant(UtcOffset::JST),
        first_day
    );
}

#[test]
fn reiwa_follows_heisei() {
    let facilities = DateFacilities::new(UtcOffset::JST);
    let first_day = facilities.date(2019, 5, 1).unwrap();
    assert_eq!(facilities.japanese_era(first_day), Some(JapaneseEra::Reiwa));
    assert_eq!(
        facilities.japanese_era(facilities.yesterday(first_day)),
        Some(JapaneseEra::Heisei)
    );
    assert_eq!(
        facilities.japanese_year(facilities.yesterday(first_day)),
        31
    );
}

#[test]
fn weekday_rebase() {
    assert_eq!(Weekday::Monday.rebase(0), 1);
    assert_eq!(Weekday::Sunday.rebase(1), 1);
    let facilities = DateFacilities::UTC;
    let date = facilities.date(2024, 2, 29).unwrap();
    assert_eq!(facilities.day_of_week(date), Some(Weekday::Thursday));
}

#[test]
fn end_of_month_after_adding_months() {
    let facilities = DateFacilities::UTC;
    let mut date = facilities.date(2023, 1, 31).unwrap();
    for _ in 0..12 {
        assert!(facilities.is_end_of_month(date) || facilities.day(date) == 28);
        date = facilities.add_month(date, 1);
    }
    assert_eq!(facilities.format(date, "yyyy/MM/dd"), "2024/01/28");
}

#[cfg(feature = "sys")]
#[test]
fn now_is_high_precision() {
    let now = DateFacilities::now().unwrap();
    assert!(now.is_high_precision());
    assert!(now > Instant::EPOCH);
}
