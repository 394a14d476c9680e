//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a stored beer.
///
/// Assigned by the record store on first save; ids start at 1 and are never
/// reused by the stores in this workspace. `0` parses but never names a record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeerId(u64);

impl BeerId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for BeerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for BeerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<BeerId> for u64 {
    fn from(value: BeerId) -> Self {
        value.0
    }
}

impl FromStr for BeerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = u64::from_str(s.trim())
            .map_err(|e| DomainError::invalid_id(format!("BeerId: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_ids() {
        assert_eq!("42".parse::<BeerId>().unwrap(), BeerId::new(42));
        assert_eq!(" 7 ".parse::<BeerId>().unwrap().value(), 7);
    }

    #[test]
    fn zero_parses_as_an_unassigned_id() {
        assert_eq!("0".parse::<BeerId>().unwrap(), BeerId::new(0));
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!(matches!("-3".parse::<BeerId>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("Brahma".parse::<BeerId>(), Err(DomainError::InvalidId(_))));
    }
}
