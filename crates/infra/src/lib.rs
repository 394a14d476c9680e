//! Infrastructure layer: record stores backing the stock service.

pub mod store;

pub use store::InMemoryBeerStore;
