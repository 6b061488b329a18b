use std::fmt::Display;
use std::ops::Deref;

pub use day_rules_syntax::error::{ErrorKind, ParseError};

/// All the errors found while reading a batch of rules. A single error is
/// enough to reject the whole batch.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl Deref for ParseErrors {
    type Target = [ParseError];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(f, "{}\n  {}", err.line, err.message())?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
