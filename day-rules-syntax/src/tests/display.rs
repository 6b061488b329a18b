use crate::rules::{Operation, Rule};
use crate::weekday_set::WeekdaySet;
use crate::{parse, parse_rule};

use super::date;

macro_rules! ex {
    ( $( $tt: expr ),* $( , )? ) => {
        (file!(), line!() $( , $tt )*)
    };
}

const EXAMPLES: &[(&str, u32, &str, &str)] = &[
    ex!(
        "Alice include 2020-05-01 2020-05-31",
        "Alice include 2020-05-01 2020-05-31"
    ),
    ex!(
        "Bob\texclude 20200501   2020-W22-7",
        "Bob exclude 2020-05-01 2020-05-31"
    ),
    ex!(
        "all include 2020-05 2020-141T12:00 0111110",
        "all include 2020-05-01 2020-05-20 o-----o"
    ),
    ex!(
        "Carol include 2020 2020/12/31 xOx",
        "Carol include 2020-01-01 2020-12-31 -o-----"
    ),
    ex!(
        "Dave exclude 2020-01-01 2020-01-01 ........o",
        "Dave exclude 2020-01-01 2020-01-01 --------o"
    ),
    ex!(
        "Erin include 2020-01-01 2020-01-31 .......",
        "Erin include 2020-01-01 2020-01-31"
    ),
];

#[test]
fn canonical_form() {
    for (file, line, raw, expected) in EXAMPLES {
        let rule = parse_rule(raw).unwrap_or_else(|err| panic!("{err} ({file}:{line})"));
        assert_eq!(rule.to_string(), *expected, "{file}:{line}");
    }
}

#[test]
fn canonical_form_parses_back() {
    for (file, line, raw, _) in EXAMPLES {
        let rule = parse_rule(raw).unwrap();
        let reparsed = parse_rule(&rule.to_string()).unwrap();
        assert_eq!(rule, reparsed, "{file}:{line}");
    }
}

#[test]
fn whole_input_parses_back() {
    let text = EXAMPLES.iter().map(|ex| ex.2).collect::<Vec<_>>().join("\n");
    let (rules, errors) = parse(&text);
    assert!(errors.is_empty());

    let printed = rules
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    assert_eq!(parse(&printed).0, rules);
}

#[test]
fn built_rule() {
    let rule = Rule::new(
        "Alice",
        Operation::Exclude,
        date!("2021-03-01"),
        date!("2021-03-07"),
        [1, 2, 3, 4, 5].into_iter().collect::<WeekdaySet>(),
    );

    assert_eq!(rule.to_string(), "Alice exclude 2021-03-01 2021-03-07 -ooooo-");
    assert_eq!(Operation::Include.to_string(), "include");
}
