//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.
use arbitrary::Arbitrary;
use chrono::Duration;

use day_rules::{Context, DateDb, RuleBook, Weekday};

/// Rules spanning more days than this are not evaluated.
const MAX_RANGE_DAYS: i64 = 366 * 10;

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub rules: String,
    pub person: String,
    pub week_start: u8,
    pub probe_days: i32,
}

impl Data {
    fn context(&self) -> Context {
        let week_start = match self.week_start % 7 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        };

        Context::default().with_week_start(week_start)
    }
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_rules(data: Data) -> bool {
    let Ok(book) = data.rules.parse::<RuleBook>() else {
        return false;
    };

    if book
        .rules()
        .iter()
        .any(|rule| (rule.end - rule.start).num_days() > MAX_RANGE_DAYS)
    {
        return false;
    }

    let reparsed: RuleBook = book.to_string().parse().unwrap_or_else(|err| {
        eprintln!("[ERR] Initial rules: {}", data.rules);
        eprintln!("[ERR] Invalid stringified rules: {book}");
        panic!("{err}")
    });

    assert_eq!(book, reparsed);

    let mut db = DateDb::new().with_context(data.context());
    let count = book.select(&mut db, &data.person);
    assert_eq!(count as usize, db.enabled_days().count());

    match db.date_range() {
        (Some(min), Some(max)) => {
            assert!(min <= max);
            assert!(db.enabled_days().all(|day| min <= day && day <= max));

            let probe = min
                .checked_add_signed(Duration::days(i64::from(data.probe_days % 4000)))
                .unwrap_or(min);

            if probe < min || probe > max {
                assert!(!db.is_enabled(probe));
            }
        }
        (None, None) => assert_eq!(count, 0),
        _ => panic!("half-open range"),
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_invalid_rules() {
        let data = Data {
            rules: "Alice include".to_string(),
            person: "Alice".to_string(),
            week_start: 0,
            probe_days: 0,
        };

        assert!(!run_fuzz_rules(data));
    }

    #[test]
    fn keep_valid_rules() {
        let data = Data {
            rules: "all include 2020-01-01 2020-03-01 o-o\nAlice exclude 2020-02 2020-02-03"
                .to_string(),
            person: "Alice".to_string(),
            week_start: 8,
            probe_days: -12,
        };

        assert!(run_fuzz_rules(data));
    }
}
