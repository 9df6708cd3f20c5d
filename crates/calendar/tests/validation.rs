use maya_calendar::{CalendarError, ConvertConfig, GregorianDate, Validation, convert};

#[test]
fn year_window_bounds() {
    let cfg = ConvertConfig::default();
    assert!(convert(1, 1, -4800, &cfg).is_ok());
    assert!(convert(1, 1, 4000, &cfg).is_ok());
    assert_eq!(
        convert(1, 1, -4801, &cfg).unwrap_err(),
        CalendarError::YearOutOfRange { year: -4801 }
    );
    assert_eq!(
        convert(1, 1, 4001, &cfg).unwrap_err(),
        CalendarError::YearOutOfRange { year: 4001 }
    );
}

#[test]
fn year_window_applies_in_both_modes() {
    let strict = ConvertConfig::new().with_validation(Validation::Strict);
    for year in [-4801, 4001, i32::MIN, i32::MAX] {
        assert!(matches!(
            convert(1, 1, year, &strict),
            Err(CalendarError::YearOutOfRange { .. })
        ));
    }
}

#[test]
fn lenient_passes_unchecked_fields_without_panicking() {
    let cfg = ConvertConfig::default();
    for (d, m) in [(0, 0), (-5, 13), (i32::MAX, i32::MIN), (i32::MIN, i32::MAX)] {
        assert!(convert(d, m, 2000, &cfg).is_ok(), "{d}/{m}/2000 rejected");
    }
}

#[test]
fn strict_rejects_impossible_dates() {
    let strict = ConvertConfig::new().with_validation(Validation::Strict);
    assert_eq!(
        convert(30, 2, 2000, &strict).unwrap_err(),
        CalendarError::InvalidDay {
            day: 30,
            month: 2,
            year: 2000,
            max_day: 29,
        }
    );
    assert_eq!(
        convert(1, 13, 2000, &strict).unwrap_err(),
        CalendarError::InvalidMonth { month: 13 }
    );
    assert!(convert(31, 12, 2000, &strict).is_ok());
}

#[test]
fn missing_fields_rejected() {
    for (d, m, y) in [
        (None, Some("10"), Some("1991")),
        (Some("19"), None, Some("1991")),
        (Some("19"), Some("10"), None),
        (Some(""), Some("10"), Some("1991")),
        (Some("19"), Some("10"), Some("   ")),
    ] {
        let err = GregorianDate::parse_fields(d, m, y, Validation::Lenient).unwrap_err();
        assert!(
            matches!(err, CalendarError::MissingField { .. }),
            "expected MissingField for {d:?}/{m:?}/{y:?}, got {err:?}"
        );
    }
}

#[test]
fn non_numeric_fields_rejected() {
    for (d, m, y, field) in [
        ("nineteen", "10", "1991", "day"),
        ("19", "10.0", "1991", "month"),
        ("19", "10", "1991AD", "year"),
        ("19", "10", "99999999999", "year"),
    ] {
        let err = GregorianDate::parse_fields(Some(d), Some(m), Some(y), Validation::Lenient)
            .unwrap_err();
        assert!(
            matches!(err, CalendarError::Parse { field: f, .. } if f == field),
            "expected Parse on {field}, got {err:?}"
        );
    }
}

#[test]
fn parsed_fields_convert_like_integers() {
    let date =
        GregorianDate::parse_fields(Some("19"), Some("10"), Some("1991"), Validation::Strict)
            .unwrap();
    let maya = convert(date.day(), date.month(), date.year(), &ConvertConfig::default()).unwrap();
    assert_eq!(maya.long_count().to_string(), "12.18.18.9.6");
}
