#![doc = include_str!("../../README.md")]

pub mod calendar;
pub mod context;
pub mod date_db;
pub mod error;
pub mod rule_book;

mod utils;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::context::Context;
pub use crate::date_db::DateDb;
pub use crate::error::ParseErrors;
pub use crate::rule_book::{RuleBook, EVERYONE};
pub use chrono::{Locale, Weekday};
pub use day_rules_syntax::rules::{Operation, Rule};
pub use day_rules_syntax::weekday_set::WeekdaySet;
