use std::fmt::Display;

use chrono::NaiveDate;

use crate::weekday_set::WeekdaySet;

// Operation

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Operation {
    Include,
    Exclude,
}

impl Operation {
    /// Keyword used for this operation in the rule syntax.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Exclude => "exclude",
        }
    }

    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "include" => Some(Self::Include),
            "exclude" => Some(Self::Exclude),
            _ => None,
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Rule

/// A single line of input: include or exclude a range of days for someone.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub include: bool,
    /// First day of the range, included.
    pub start: NaiveDate,
    /// Last day of the range, included.
    pub end: NaiveDate,
    /// Positions of the days of the week this rule applies to, every day if
    /// empty.
    pub weekdays: WeekdaySet,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        operation: Operation,
        start: NaiveDate,
        end: NaiveDate,
        weekdays: WeekdaySet,
    ) -> Self {
        Self {
            name: name.into(),
            include: operation == Operation::Include,
            start,
            end,
            weekdays,
        }
    }

    pub fn operation(&self) -> Operation {
        if self.include {
            Operation::Include
        } else {
            Operation::Exclude
        }
    }

    /// The weekday filter to apply, if any.
    pub fn weekday_filter(&self) -> Option<&WeekdaySet> {
        (!self.weekdays.is_empty()).then_some(&self.weekdays)
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name,
            self.operation(),
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d"),
        )?;

        if !self.weekdays.is_empty() {
            write!(f, " {}", self.weekdays)?;
        }

        Ok(())
    }
}
