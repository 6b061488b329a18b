use std::fmt::Display;
use std::str::FromStr;

use day_rules_syntax::rules::Rule;

use crate::date_db::DateDb;
use crate::error::ParseErrors;

/// Rules with this name apply to everyone.
pub const EVERYONE: &str = "all";

/// A validated list of rules, in input order.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct RuleBook {
    rules: Vec<Rule>,
}

impl RuleBook {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parse a whole input. If any of the lines is invalid, none of the rules
    /// is kept and all errors are returned.
    ///
    /// ```
    /// use day_rules::RuleBook;
    ///
    /// assert!(RuleBook::parse("Alice include 2020-05-01 2020-05-31").is_ok());
    ///
    /// let errors = RuleBook::parse(
    ///     "Alice include 2020-05-01 2020-05-31\n\
    ///      Bob\n\
    ///      Carol include 2020-05-01 yesterday",
    /// )
    /// .unwrap_err();
    ///
    /// assert_eq!(errors.len(), 2);
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseErrors> {
        let (rules, errors) = day_rules_syntax::parse(text);

        if !errors.is_empty() {
            #[cfg(feature = "log")]
            log::debug!("Rejecting {} rules because of {} errors", rules.len(), errors.len());
            return Err(ParseErrors(errors));
        }

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Names found in the rules, in order of first appearance.
    ///
    /// ```
    /// use day_rules::RuleBook;
    ///
    /// let book = RuleBook::parse(
    ///     "Bob include 2020-05-01 2020-05-31\n\
    ///      all exclude 2020-05-01 2020-05-01\n\
    ///      Alice include 2020-05-01 2020-05-31\n\
    ///      Bob exclude 2020-05-20 2020-05-21",
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(book.people(), ["Bob", "all", "Alice"]);
    /// ```
    pub fn people(&self) -> Vec<&str> {
        let mut people: Vec<&str> = Vec::new();

        for rule in &self.rules {
            if !people.contains(&rule.name.as_str()) {
                people.push(&rule.name);
            }
        }

        people
    }

    /// Rules that apply to given person, including rules for [`EVERYONE`].
    pub fn rules_for<'a>(&'a self, person: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.name == EVERYONE || rule.name == person)
    }

    /// Reset the database and apply all the rules for given person. Return the
    /// number of enabled days.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use day_rules::{DateDb, RuleBook};
    ///
    /// let book = RuleBook::parse(
    ///     "all include 2020-05-01 2020-05-31\n\
    ///      Alice exclude 2020-05-10 2020-05-12\n\
    ///      Bob exclude 2020-05-01 2020-05-15",
    /// )
    /// .unwrap();
    ///
    /// let mut db = DateDb::new();
    /// assert_eq!(book.select(&mut db, "Alice"), 28);
    /// assert_eq!(book.select(&mut db, "Bob"), 16);
    /// assert_eq!(book.select(&mut db, "all"), 31);
    /// ```
    pub fn select(&self, db: &mut DateDb, person: &str) -> u32 {
        db.reset();

        for rule in self.rules_for(person) {
            db.apply_rule(rule);
        }

        let count = db.count_enabled();

        #[cfg(feature = "log")]
        log::debug!(person = person; "Selected {count} days");

        count
    }
}

impl From<Vec<Rule>> for RuleBook {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl FromStr for RuleBook {
    type Err = ParseErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for RuleBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(f, "{rule}")?;
        }

        Ok(())
    }
}
