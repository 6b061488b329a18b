#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod rules;
pub mod weekday_set;

mod parser;

#[cfg(test)]
mod tests;

pub use error::{Error, ErrorKind, ParseError, Result};
pub use parser::{parse, parse_date, parse_rule};
