use chrono::{Datelike, Locale, NaiveDate, Weekday};

/// Settings that alter how rules are evaluated and how the calendar is
/// displayed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Context {
    /// Day of the week at position 0 of weekday masks.
    pub week_start: Weekday,
    /// Language used to name months.
    pub locale: Locale,
}

impl Context {
    /// Attach a new first day of the week to this context.
    ///
    /// ```
    /// use day_rules::{Context, Weekday};
    ///
    /// let ctx = Context::default().with_week_start(Weekday::Mon);
    /// assert_eq!(ctx.week_start, Weekday::Mon);
    /// ```
    pub fn with_week_start(self, week_start: Weekday) -> Self {
        Self { week_start, ..self }
    }

    /// Attach a new locale to this context.
    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    /// Position of the given date in its week, `0` being `week_start`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use day_rules::{Context, Weekday};
    ///
    /// let monday = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
    /// assert_eq!(Context::default().weekday_index(monday), 1);
    ///
    /// let ctx = Context::default().with_week_start(Weekday::Mon);
    /// assert_eq!(ctx.weekday_index(monday), 0);
    /// ```
    pub fn weekday_index(&self, date: NaiveDate) -> usize {
        let day = date.weekday().num_days_from_sunday();
        let start = self.week_start.num_days_from_sunday();
        ((7 + day - start) % 7) as usize
    }

    /// The days of the week, in display order.
    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> {
        std::iter::successors(Some(self.week_start), |wday| Some(wday.succ())).take(7)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self { week_start: Weekday::Sun, locale: Locale::en_US }
    }
}
