//! Helpers to lay out a range of days month by month.

use std::fmt::Display;

use chrono::{Datelike, Locale, Months, NaiveDate, NaiveTime, Weekday};

use crate::context::Context;
use crate::utils::dates::{count_days_in_month, iter_days};

/// Canonical key of a day, formatted as `YYYYMMDD`.
///
/// ```
/// use chrono::NaiveDate;
/// use day_rules::calendar::date_key;
///
/// let date = NaiveDate::from_ymd_opt(2020, 5, 3).unwrap();
/// assert_eq!(date_key(date), "20200503");
/// ```
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// A month of a given year.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Build a month from its year and its number, between 1 and 12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    /// The month containing given date.
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// Month number, from 1 to 12.
    pub fn month(self) -> u32 {
        self.month
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("first of the month should always exist")
    }

    pub fn last_day(self) -> NaiveDate {
        let count = u32::from(self.count_days());

        self.first_day()
            .with_day(count)
            .expect("last day of the month should always exist")
    }

    pub fn count_days(self) -> u8 {
        count_days_in_month(self.first_day())
    }

    /// Iterate over the days of this month.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        iter_days(self.first_day(), self.last_day())
    }

    /// The month after this one, if it is still in the supported range of
    /// dates.
    pub fn succ(self) -> Option<Self> {
        self.first_day()
            .checked_add_months(Months::new(1))
            .map(Self::of)
    }

    /// Full name of the month in given language.
    ///
    /// ```
    /// use day_rules::calendar::Month;
    /// use day_rules::Locale;
    ///
    /// let month = Month::new(2020, 5).unwrap();
    /// assert_eq!(month.name(Locale::en_US), "May");
    /// assert_eq!(month.name(Locale::fr_FR), "mai");
    /// ```
    pub fn name(self, locale: Locale) -> String {
        self.first_day()
            .and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized("%B", locale)
            .to_string()
    }

    /// Split the month into weeks starting on `week_start`. Cells before the
    /// first day and after the last day of the month are left empty.
    ///
    /// ```
    /// use day_rules::calendar::Month;
    /// use day_rules::Weekday;
    ///
    /// // June 2020 starts on a Monday
    /// let weeks = Month::new(2020, 6).unwrap().weeks(Weekday::Sun);
    /// assert_eq!(weeks.len(), 5);
    /// assert_eq!(weeks[0][0], None);
    /// assert_eq!(weeks[0][1], Some(1));
    /// assert_eq!(weeks[4][2], Some(30));
    /// assert_eq!(weeks[4][3], None);
    /// ```
    pub fn weeks(self, week_start: Weekday) -> Vec<[Option<u32>; 7]> {
        let ctx = Context::default().with_week_start(week_start);
        let gaps = ctx.weekday_index(self.first_day());

        let cells: Vec<_> = std::iter::repeat(None)
            .take(gaps)
            .chain((1..=u32::from(self.count_days())).map(Some))
            .collect();

        cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect()
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// All months overlapping the range of days between `min` and `max`, which
/// is empty if any of the bounds is missing.
///
/// ```
/// use chrono::NaiveDate;
/// use day_rules::calendar::{months_between, Month};
///
/// let min = NaiveDate::from_ymd_opt(2020, 11, 20);
/// let max = NaiveDate::from_ymd_opt(2021, 1, 3);
///
/// assert_eq!(
///     months_between(min, max),
///     [
///         Month::new(2020, 11).unwrap(),
///         Month::new(2020, 12).unwrap(),
///         Month::new(2021, 1).unwrap(),
///     ],
/// );
///
/// assert!(months_between(None, max).is_empty());
/// ```
pub fn months_between(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Vec<Month> {
    let (Some(min), Some(max)) = (min, max) else {
        return Vec::new();
    };

    let last = Month::of(max);

    std::iter::successors(Some(Month::of(min)), |month| month.succ())
        .take_while(|month| *month <= last)
        .collect()
}
