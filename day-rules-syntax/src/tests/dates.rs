use super::date;
use crate::error::Error;
use crate::parse_date;

macro_rules! ex {
    ( $( $tt: expr ),* $( , )? ) => {
        (file!(), line!() $( , $tt )*)
    };
}

const VALID: &[(&str, u32, &str, &str)] = &[
    ex!("2020-05-20", "2020-05-20"),
    ex!("20200520", "2020-05-20"),
    ex!("2020-05", "2020-05-01"),
    ex!("2020", "2020-01-01"),
    ex!("2020-W21", "2020-05-18"),
    ex!("2020-W21-3", "2020-05-20"),
    ex!("2020W213", "2020-05-20"),
    ex!("2020-w01-1", "2019-12-30"),
    ex!("2020-141", "2020-05-20"),
    ex!("2021141", "2021-05-21"),
    ex!("2020-05-20T10", "2020-05-20"),
    ex!("2020-05-20T10:30", "2020-05-20"),
    ex!("2020-05-20T10:30:15.250Z", "2020-05-20"),
    ex!("2020-05-20t103015+0200", "2020-05-20"),
    ex!("2020-05-20T24:00", "2020-05-21"),
    ex!("2020-12-31T24:00:00Z", "2021-01-01"),
    ex!("2020/5/20", "2020-05-20"),
    ex!("2020/05/02", "2020-05-02"),
    ex!("5/20/2020", "2020-05-20"),
    ex!("05/02/2020", "2020-05-02"),
    ex!("2020-5-20", "2020-05-20"),
    ex!("2020-5-1", "2020-05-01"),
    ex!("2020-05-1", "2020-05-01"),
    ex!("202005", "2020-05-01"),
];

const INVALID: &[(&str, u32, &str)] = &[
    ex!(""),
    ex!("tomorrow"),
    ex!("20-05-2020"),
    ex!("2020-5-20T10:00"),
    ex!("5/20/20"),
    ex!("20-5-2020"),
    ex!("2020123456"),
    ex!("2020-05-20 "),
    ex!("2020-1231"),
    ex!("2020/5/20T10:00"),
];

const IMPOSSIBLE: &[(&str, u32, &str)] = &[
    ex!("2020-02-30"),
    ex!("2019-02-29"),
    ex!("2020-13-01"),
    ex!("2020-00"),
    ex!("2020-W54"),
    ex!("2019-366"),
    ex!("2020-000"),
    ex!("2020/2/31"),
    ex!("2020-05-20T25:00"),
    ex!("2020-05-20T10:60"),
    ex!("2020-05-20T24:01"),
    ex!("2020-05-20T24:00:00.5"),
    ex!("20/5/2020"),
    ex!("2020-2-30"),
    ex!("202013"),
    ex!("2020-05-20T10:00+25:00"),
];

#[test]
fn valid_dates() {
    for (file, line, raw, expected) in VALID {
        let parsed = parse_date(raw).unwrap_or_else(|err| {
            panic!("failed to parse `{raw}` ({file}:{line}): {err}");
        });

        assert_eq!(parsed, date!(expected), "unexpected date for `{raw}` ({file}:{line})");
    }
}

#[test]
fn invalid_syntax() {
    for (file, line, raw) in INVALID {
        assert!(
            matches!(parse_date(raw), Err(Error::Parser(_))),
            "`{raw}` should not be parsed ({file}:{line})",
        );
    }
}

#[test]
fn impossible_dates() {
    for (file, line, raw) in IMPOSSIBLE {
        match parse_date(raw) {
            Err(Error::InvalidDate(value)) => assert_eq!(value, *raw),
            other => panic!("`{raw}` should be rejected as impossible ({file}:{line}): {other:?}"),
        }
    }
}

#[test]
fn leap_day() {
    assert_eq!(parse_date("2020-02-29").unwrap(), date!("2020-02-29"));
    assert_eq!(parse_date("2020-366").unwrap(), date!("2020-12-31"));
}
