use std::collections::BTreeMap;

use chrono::NaiveDate;

use day_rules_syntax::rules::Rule;
use day_rules_syntax::weekday_set::WeekdaySet;

use crate::context::Context;
use crate::utils::dates::iter_days;

/// Enabled state of each day, built by applying rules in order.
///
/// Only days written by a rule are stored: other days are considered disabled.
/// The database also keeps track of the range of all days it has been asked to
/// write, including days that were filtered out by a weekday filter.
///
/// ```
/// use chrono::NaiveDate;
/// use day_rules::DateDb;
/// use day_rules_syntax::parse;
///
/// let (rules, _) = parse(
///     "Alice include 2020-05-01 2020-05-31\n\
///      Alice exclude 2020-05-10 2020-05-12",
/// );
///
/// let mut db = DateDb::new();
///
/// for rule in &rules {
///     db.apply_rule(rule);
/// }
///
/// assert!(db.is_enabled(NaiveDate::from_ymd_opt(2020, 5, 9).unwrap()));
/// assert!(!db.is_enabled(NaiveDate::from_ymd_opt(2020, 5, 10).unwrap()));
/// assert_eq!(db.count_enabled(), 28);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DateDb {
    /// State of each day that was explicitly set.
    days: BTreeMap<NaiveDate, bool>,
    /// Smallest and largest days ever passed to `set`.
    range: Option<(NaiveDate, NaiveDate)>,
    /// Evaluation context
    ctx: Context,
}

impl DateDb {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new evaluation context for this database.
    ///
    /// ```
    /// use day_rules::{Context, DateDb, Weekday};
    ///
    /// let db = DateDb::new().with_context(Context::default().with_week_start(Weekday::Mon));
    /// assert_eq!(db.context().week_start, Weekday::Mon);
    /// ```
    pub fn with_context(self, ctx: Context) -> Self {
        Self { ctx, ..self }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Forget about all days and about the range, the context is preserved.
    pub fn reset(&mut self) {
        self.days.clear();
        self.range = None;
    }

    /// Reset the database and enable every day of `start..=end`.
    pub fn init(&mut self, start: NaiveDate, end: NaiveDate) {
        self.reset();
        self.set_range(start, end, true, None);
    }

    /// Set the state of a single day.
    ///
    /// If `weekdays` is a non-empty set, the state is only written if the
    /// position of `date` in its week belongs to the set. The range of the
    /// database is extended to `date` in any case.
    pub fn set(&mut self, date: NaiveDate, enable: bool, weekdays: Option<&WeekdaySet>) {
        self.range = Some(match self.range {
            None => (date, date),
            Some((min, max)) => (min.min(date), max.max(date)),
        });

        let matches_filter = weekdays
            .map(|weekdays| {
                weekdays.is_empty() || weekdays.contains(self.ctx.weekday_index(date))
            })
            .unwrap_or(true);

        if matches_filter {
            self.days.insert(date, enable);
        }
    }

    /// Set the state of all days from `start` to `end`, both included. Nothing
    /// happens if `start` comes after `end`.
    pub fn set_range(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
        enable: bool,
        weekdays: Option<&WeekdaySet>,
    ) {
        if start > end {
            #[cfg(feature = "log")]
            log::debug!("Ignoring reversed range from {start} to {end}");
            return;
        }

        for date in iter_days(start, end) {
            self.set(date, enable, weekdays);
        }
    }

    /// Apply a parsed rule on top of current state.
    pub fn apply_rule(&mut self, rule: &Rule) {
        #[cfg(feature = "log")]
        log::debug!(name = rule.name.as_str(); "Applying rule: {rule}");

        self.set_range(rule.start, rule.end, rule.include, rule.weekday_filter());
    }

    /// Check if a day is enabled, days that were never written are disabled.
    pub fn is_enabled(&self, date: NaiveDate) -> bool {
        self.days.get(&date).copied().unwrap_or(false)
    }

    /// Get the stored state of a day, or `None` if no rule ever wrote it.
    pub fn state(&self, date: NaiveDate) -> Option<bool> {
        self.days.get(&date).copied()
    }

    /// Smallest and largest days this database was asked to write. Both are
    /// `None` until the first write.
    pub fn date_range(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        match self.range {
            None => (None, None),
            Some((min, max)) => (Some(min), Some(max)),
        }
    }

    /// Iterate over enabled days, in chronological order.
    pub fn enabled_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(date, _)| *date)
    }

    /// Count enabled days.
    pub fn count_enabled(&self) -> u32 {
        self.days.values().filter(|enabled| **enabled).count() as u32
    }
}
