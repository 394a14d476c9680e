//! Record store contract consumed by the stock service.

use std::sync::Arc;

use beerstock_core::BeerId;

use crate::beer::Beer;

/// Persistence for [`Beer`] records, keyed by id with name as an alternate key.
pub trait BeerStore: Send + Sync {
    fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>, StoreError>;

    fn find_by_name(&self, name: &str) -> Result<Option<Beer>, StoreError>;

    /// All records, in the store's iteration order.
    fn find_all(&self) -> Result<Vec<Beer>, StoreError>;

    /// Insert when `beer.id()` is `None` (assigning an id), update otherwise.
    fn save(&self, beer: Beer) -> Result<Beer, StoreError>;

    fn delete_by_id(&self, id: BeerId) -> Result<(), StoreError>;
}

/// Infrastructure failure; opaque to the service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl<S> BeerStore for Arc<S>
where
    S: BeerStore + ?Sized,
{
    fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>, StoreError> {
        (**self).find_by_id(id)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Beer>, StoreError> {
        (**self).find_by_name(name)
    }

    fn find_all(&self) -> Result<Vec<Beer>, StoreError> {
        (**self).find_all()
    }

    fn save(&self, beer: Beer) -> Result<Beer, StoreError> {
        (**self).save(beer)
    }

    fn delete_by_id(&self, id: BeerId) -> Result<(), StoreError> {
        (**self).delete_by_id(id)
    }
}
