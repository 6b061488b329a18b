use std::fmt;
use std::ops::Deref;

/// Number of days in a week, positions at or after this index never match a
/// date.
pub const DAYS_PER_WEEK: usize = 7;

/// A set of weekday positions, counted from the first day of the week.
///
/// The inner [`Vec`] is always sorted and each position appears at most once.
/// An empty set is read as "no filter" by rules.
///
/// ```
/// use day_rules_syntax::weekday_set::WeekdaySet;
///
/// let set: WeekdaySet = vec![5, 1, 3, 1].into();
/// assert_eq!(set.as_slice(), &[1, 3, 5]);
/// assert!(set.contains(3));
/// assert!(!set.contains(0));
/// ```
#[repr(transparent)]
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct WeekdaySet(Vec<usize>);

impl WeekdaySet {
    /// Create a new empty set.
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Read a weekday mask: the position of each `o`, `O` or `0` character is
    /// included, any other character is ignored.
    ///
    /// ```
    /// use day_rules_syntax::weekday_set::WeekdaySet;
    ///
    /// assert_eq!(WeekdaySet::from_mask("oO0.x-o").as_slice(), &[0, 1, 2, 6]);
    /// assert!(WeekdaySet::from_mask("1111111").is_empty());
    /// ```
    pub fn from_mask(mask: &str) -> Self {
        Self(
            mask.chars()
                .enumerate()
                .filter(|(_, c)| matches!(c, 'o' | 'O' | '0'))
                .map(|(i, _)| i)
                .collect(),
        )
    }

    /// Add a position while preserving the invariants.
    ///
    /// ```
    /// use day_rules_syntax::weekday_set::WeekdaySet;
    ///
    /// let mut set = WeekdaySet::new();
    /// set.insert(4);
    /// set.insert(2);
    /// set.insert(4);
    /// assert_eq!(set.as_slice(), &[2, 4]);
    /// ```
    #[inline]
    pub fn insert(&mut self, weekday: usize) {
        if let Err(insert_at) = self.0.binary_search(&weekday) {
            self.0.insert(insert_at, weekday);
        }
    }

    /// Check if the set includes given position.
    #[inline]
    pub fn contains(&self, weekday: usize) -> bool {
        self.0.binary_search(&weekday).is_ok()
    }

    /// Return `true` if no position in the set can match a date, which is
    /// different from being empty.
    ///
    /// ```
    /// use day_rules_syntax::weekday_set::WeekdaySet;
    ///
    /// assert!(!WeekdaySet::new().selects_nothing());
    /// assert!(WeekdaySet::from_mask("-------o").selects_nothing());
    /// assert!(!WeekdaySet::from_mask("------o").selects_nothing());
    /// ```
    pub fn selects_nothing(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&i| i >= DAYS_PER_WEEK)
    }

    /// Get a view of the sorted positions.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl From<Vec<usize>> for WeekdaySet {
    #[inline]
    fn from(mut vec: Vec<usize>) -> Self {
        vec.sort_unstable();
        vec.dedup();
        Self(vec)
    }
}

impl FromIterator<usize> for WeekdaySet {
    #[inline]
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl Deref for WeekdaySet {
    type Target = [usize];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

/// Write the set as a mask that [`WeekdaySet::from_mask`] reads back. The
/// output covers at least a whole week.
///
/// ```
/// use day_rules_syntax::weekday_set::WeekdaySet;
///
/// let set: WeekdaySet = vec![1, 5].into();
/// assert_eq!(set.to_string(), "-o---o-");
/// assert_eq!(WeekdaySet::from_mask("-------o").to_string(), "-------o");
/// ```
impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self
            .0
            .last()
            .map(|last| (last + 1).max(DAYS_PER_WEEK))
            .unwrap_or(DAYS_PER_WEEK);

        for i in 0..len {
            write!(f, "{}", if self.contains(i) { 'o' } else { '-' })?;
        }

        Ok(())
    }
}
