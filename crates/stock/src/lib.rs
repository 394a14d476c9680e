//! Beer stock domain module.
//!
//! Holds the stock record model, the record store contract and the service
//! that enforces name uniqueness and the `0..=max` quantity bound.

pub mod beer;
pub mod error;
pub mod service;
pub mod store;

pub use beer::{Beer, BeerDto, BeerType, QuantityDto};
pub use error::{BeerLookup, StockDirection, StockError, StockResult};
pub use service::BeerService;
pub use store::{BeerStore, StoreError};
