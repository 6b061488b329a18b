use chrono::{Days, NaiveDate, Weekday};

use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, ErrorKind, ParseError, Result};
use crate::rules as rl;
use crate::weekday_set::WeekdaySet;

#[cfg(feature = "log")]
static WARN_LEGACY_FORMAT: std::sync::Once = std::sync::Once::new();

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct DateParser;

/// Parse a whole input, one rule per line.
///
/// Blank lines are skipped and a malformed line never prevents the following
/// ones from being parsed: both lists are returned in input order.
///
/// ```
/// use day_rules_syntax::parse;
///
/// let (rules, errors) = parse("Alice include 2020-05-01 2020-05-31\r\n\n  \nBob");
/// assert_eq!(rules.len(), 1);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].message(), "Too few tokens");
/// ```
pub fn parse(text: &str) -> (Vec<rl::Rule>, Vec<ParseError>) {
    let mut rules = Vec::new();
    let mut errors = Vec::new();

    let lines = text
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty());

    for line in lines {
        match parse_rule(line) {
            Ok(rule) => rules.push(rule),
            Err(err) => {
                #[cfg(feature = "log")]
                log::debug!(line = err.line.as_str(); "rejected rule: {}", err.kind);
                errors.push(err);
            }
        }
    }

    (rules, errors)
}

// ---
// --- Rule
// ---

/// Parse a single line of input into a rule.
///
/// ```
/// use day_rules_syntax::parse_rule;
/// use day_rules_syntax::rules::Operation;
///
/// let rule = parse_rule("Alice\texclude 2020-06-01  2020-06-30 o-----o").unwrap();
/// assert_eq!(rule.name, "Alice");
/// assert_eq!(rule.operation(), Operation::Exclude);
/// assert_eq!(rule.weekdays.as_slice(), &[0, 6]);
/// ```
pub fn parse_rule(line: &str) -> std::result::Result<rl::Rule, ParseError> {
    let line = line.trim();
    let fail = |kind: ErrorKind| ParseError::new(line, kind);

    let tokens: Vec<_> = line
        .split([' ', '\t'])
        .filter(|token| !token.is_empty())
        .collect();

    let [name, operation, start, end, tail @ ..] = tokens.as_slice() else {
        return Err(fail(ErrorKind::TooFewTokens));
    };

    let mask = match tail {
        [] => None,
        [mask] => Some(*mask),
        _ => return Err(fail(ErrorKind::TooManyTokens)),
    };

    let operation = rl::Operation::from_keyword(operation)
        .ok_or_else(|| fail(ErrorKind::InvalidOperation(operation.to_string())))?;

    let start = parse_date(start)
        .map_err(|_| fail(ErrorKind::InvalidStartDate(start.to_string())))?;

    let end =
        parse_date(end).map_err(|_| fail(ErrorKind::InvalidEndDate(end.to_string())))?;

    let weekdays = mask.map(WeekdaySet::from_mask).unwrap_or_default();
    Ok(rl::Rule::new(*name, operation, start, end, weekdays))
}

// ---
// --- Dates
// ---

/// Parse a date written in one of the supported formats. The time of day, if
/// any, is checked and then dropped, except for `24:00` which stands for the
/// start of the next day.
///
/// Besides ISO 8601, a few legacy forms are accepted with a warning:
/// `YYYY/M/D`, `M/D/YYYY`, `YYYY-M-D` and `YYYYMM`.
///
/// ```
/// use chrono::NaiveDate;
/// use day_rules_syntax::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2020, 5, 20).unwrap();
/// assert_eq!(parse_date("2020-05-20").unwrap(), expected);
/// assert_eq!(parse_date("2020-W21-3").unwrap(), expected);
/// assert_eq!(parse_date("2020-141T08:30+02:00").unwrap(), expected);
/// assert_eq!(parse_date("5/20/2020").unwrap(), expected);
/// assert_eq!(parse_date("2020-05-19T24:00").unwrap(), expected);
/// assert!(parse_date("2020-02-30").is_err());
/// assert!(parse_date("tomorrow").is_err());
/// ```
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let date_pair = DateParser::parse(Rule::input_date, raw)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no date found");

    build_date(date_pair).ok_or_else(|| Error::InvalidDate(raw.to_string()))
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

fn build_date(pair: Pair<Rule>) -> Option<NaiveDate> {
    assert_eq!(pair.as_rule(), Rule::date);
    let pair = pair.into_inner().next().expect("empty date");

    match pair.as_rule() {
        Rule::iso_date => build_iso_date(pair),
        Rule::legacy_date => build_legacy_date(pair),
        other => unexpected_token(other, Rule::date),
    }
}

fn build_iso_date(pair: Pair<Rule>) -> Option<NaiveDate> {
    assert_eq!(pair.as_rule(), Rule::iso_date);
    let mut pairs = pair.into_inner();
    let day_pair = pairs.next().expect("empty iso date");

    let offset = match pairs.next() {
        Some(time_pair) => build_day_offset(time_pair)?,
        None => Days::new(0),
    };

    let date = match day_pair.as_rule() {
        Rule::calendar_date => build_calendar_date(day_pair),
        Rule::week_date => build_week_date(day_pair),
        Rule::ordinal_date => build_ordinal_date(day_pair),
        Rule::year_month => build_year_month(day_pair),
        Rule::year_only => {
            let year = build_year(day_pair.into_inner().next().expect("missing year"));
            NaiveDate::from_ymd_opt(year, 1, 1)
        }
        other => unexpected_token(other, Rule::iso_date),
    }?;

    date.checked_add_days(offset)
}

fn build_calendar_date(pair: Pair<Rule>) -> Option<NaiveDate> {
    assert_eq!(pair.as_rule(), Rule::calendar_date);
    let mut pairs = pair.into_inner();
    let year = build_year(pairs.next().expect("missing year"));
    let month = build_number(pairs.next().expect("missing month"));
    let day = build_number(pairs.next().expect("missing day"));
    NaiveDate::from_ymd_opt(year, month, day)
}

fn build_week_date(pair: Pair<Rule>) -> Option<NaiveDate> {
    assert_eq!(pair.as_rule(), Rule::week_date);
    let mut pairs = pair.into_inner();
    let year = build_year(pairs.next().expect("missing year"));
    let week = build_number(pairs.next().expect("missing week"));

    let weekday = match pairs.next().map(build_number) {
        None | Some(1) => Weekday::Mon,
        Some(2) => Weekday::Tue,
        Some(3) => Weekday::Wed,
        Some(4) => Weekday::Thu,
        Some(5) => Weekday::Fri,
        Some(6) => Weekday::Sat,
        Some(7) => Weekday::Sun,
        Some(other) => unreachable!("Grammar error: found weekday number {other}"),
    };

    NaiveDate::from_isoywd_opt(year, week, weekday)
}

fn build_ordinal_date(pair: Pair<Rule>) -> Option<NaiveDate> {
    assert_eq!(pair.as_rule(), Rule::ordinal_date);
    let mut pairs = pair.into_inner();
    let year = build_year(pairs.next().expect("missing year"));
    let yearday = build_number(pairs.next().expect("missing day of year"));
    NaiveDate::from_yo_opt(year, yearday)
}

fn build_year_month(pair: Pair<Rule>) -> Option<NaiveDate> {
    assert_eq!(pair.as_rule(), Rule::year_month);
    let mut pairs = pair.into_inner();
    let year = build_year(pairs.next().expect("missing year"));
    let month = build_number(pairs.next().expect("missing month"));
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn build_legacy_date(pair: Pair<Rule>) -> Option<NaiveDate> {
    assert_eq!(pair.as_rule(), Rule::legacy_date);
    let pair = pair.into_inner().next().expect("empty legacy date");

    #[cfg(feature = "log")]
    WARN_LEGACY_FORMAT.call_once(|| {
        log::warn!(
            date = pair.as_str();
            "Found a date outside of ISO 8601, prefer the YYYY-MM-DD format"
        )
    });

    let rule = pair.as_rule();
    let mut pairs = pair.into_inner();

    let (year, month, day) = match rule {
        Rule::slashed_date | Rule::loose_date => {
            let year = build_year(pairs.next().expect("missing year"));
            let month = build_number(pairs.next().expect("missing month"));
            let day = build_number(pairs.next().expect("missing day"));
            (year, month, day)
        }
        Rule::us_date => {
            let month = build_number(pairs.next().expect("missing month"));
            let day = build_number(pairs.next().expect("missing day"));
            let year = build_year(pairs.next().expect("missing year"));
            (year, month, day)
        }
        Rule::compact_year_month => {
            let year = build_year(pairs.next().expect("missing year"));
            let month = build_number(pairs.next().expect("missing month"));
            (year, month, 1)
        }
        other => unexpected_token(other, Rule::legacy_date),
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

// ---
// --- Time of day
// ---

/// Number of days to add to the date, `24:00` is the start of the next day.
fn build_day_offset(pair: Pair<Rule>) -> Option<Days> {
    assert_eq!(pair.as_rule(), Rule::time_of_day);
    let mut hour = 0;
    let mut minute = 0;
    let mut second = 0;
    let mut has_fraction = false;

    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::hour => hour = build_number(pair),
            Rule::minute => minute = build_number(pair),
            Rule::second => second = build_number(pair),
            Rule::fraction => has_fraction = pair.as_str().bytes().any(|c| c != b'0'),
            Rule::zone => {
                if !is_valid_zone(pair) {
                    return None;
                }
            }
            other => unexpected_token(other, Rule::time_of_day),
        }
    }

    match (hour, minute, second) {
        (24, 0, 0) if !has_fraction => Some(Days::new(1)),
        _ if hour < 24 && minute < 60 && second < 60 => Some(Days::new(0)),
        _ => None,
    }
}

fn is_valid_zone(pair: Pair<Rule>) -> bool {
    assert_eq!(pair.as_rule(), Rule::zone);
    let mut pairs = pair.into_inner();
    let hour = pairs.next().map(build_number).unwrap_or(0);
    let minute = pairs.next().map(build_number).unwrap_or(0);
    hour < 24 && minute < 60
}

// ---
// --- Numbers
// ---

fn build_year(pair: Pair<Rule>) -> i32 {
    assert_eq!(pair.as_rule(), Rule::year);
    pair.as_str().parse().expect("invalid year format")
}

fn build_number(pair: Pair<Rule>) -> u32 {
    pair.as_str().parse().expect("invalid number format")
}
