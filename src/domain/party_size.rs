use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of guests to seat. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartySize(u32);

impl PartySize {
    pub fn new(size: u32) -> Option<Self> {
        if size == 0 { None } else { Some(PartySize(size)) }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PartySize {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        parse_party_size(input)
    }
}

/// Validates raw user input as a party size.
///
/// Surrounding whitespace is ignored. Non-numeric input and sizes <= 0 yield
/// `Error::ValidationError`.
pub fn parse_party_size(input: &str) -> Result<PartySize> {
    let invalid = |reason: &str| Error::ValidationError { input: input.to_string(), reason: reason.to_string() };

    let value: i64 = input.trim().parse().map_err(|_| invalid("not a whole number"))?;

    if value <= 0 {
        return Err(invalid("party size must be positive"));
    }

    let value = u32::try_from(value).map_err(|_| invalid("party size is too large"))?;
    PartySize::new(value).ok_or_else(|| invalid("party size must be positive"))
}
