use thiserror::Error;

use beerstock_core::{BeerId, DomainError};

use crate::store::StoreError;

/// Key a failed lookup was made with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeerLookup {
    Id(BeerId),
    Name(String),
}

impl core::fmt::Display for BeerLookup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BeerLookup::Id(id) => write!(f, "id {id}"),
            BeerLookup::Name(name) => write!(f, "name {name}"),
        }
    }
}

/// Direction of a quantity change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StockDirection {
    Increment,
    Decrement,
}

impl core::fmt::Display for StockDirection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockDirection::Increment => f.write_str("increment"),
            StockDirection::Decrement => f.write_str("decrement"),
        }
    }
}

/// Failures returned by [`crate::BeerService`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    #[error("beer already registered with name {name}")]
    AlreadyRegistered { name: String },

    #[error("beer not found with {0}")]
    NotFound(BeerLookup),

    /// Both overflow past `max` and underflow below zero.
    #[error("cannot {direction} beer {id} by {delta}: quantity {quantity} must stay within 0..={max}")]
    StockExceeded {
        id: BeerId,
        quantity: u32,
        max: u32,
        delta: u32,
        direction: StockDirection,
    },

    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type StockResult<T> = Result<T, StockError>;
