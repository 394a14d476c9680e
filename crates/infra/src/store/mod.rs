//! Record store implementations for the stock service.

pub mod in_memory;

pub use in_memory::InMemoryBeerStore;
