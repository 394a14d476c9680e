//! Stock service: the only place stock records are created, adjusted or removed.

use std::sync::{Mutex, MutexGuard};

use tracing::{info, warn};

use beerstock_core::BeerId;

use crate::beer::{Beer, BeerDto};
use crate::error::{BeerLookup, StockDirection, StockError, StockResult};
use crate::store::BeerStore;

/// Validates and orchestrates every stock operation over an injected [`BeerStore`].
///
/// Mutations run under `writes` so a uniqueness or bound check and the store
/// write that follows it cannot interleave with another mutation.
#[derive(Debug)]
pub struct BeerService<S> {
    store: S,
    writes: Mutex<()>,
}

impl<S> BeerService<S>
where
    S: BeerStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            writes: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a new beer. Fails with `AlreadyRegistered` if the name is taken.
    pub fn create_beer(&self, dto: BeerDto) -> StockResult<BeerDto> {
        dto.validate()?;

        let _gate = self.write_gate();
        if self.store.find_by_name(&dto.name)?.is_some() {
            warn!(name = %dto.name, "beer already registered");
            return Err(StockError::AlreadyRegistered { name: dto.name });
        }

        let mut beer = Beer::from_dto(dto);
        beer.clear_id();
        let saved = self.store.save(beer)?;

        info!(id = ?saved.id(), name = saved.name(), "beer created");
        Ok(saved.into())
    }

    pub fn find_by_name(&self, name: &str) -> StockResult<BeerDto> {
        self.store
            .find_by_name(name)?
            .map(BeerDto::from)
            .ok_or_else(|| StockError::NotFound(BeerLookup::Name(name.to_string())))
    }

    pub fn list_all(&self) -> StockResult<Vec<BeerDto>> {
        Ok(self.store.find_all()?.into_iter().map(BeerDto::from).collect())
    }

    pub fn delete_by_id(&self, id: BeerId) -> StockResult<()> {
        let _gate = self.write_gate();
        self.verify_exists(id)?;
        self.store.delete_by_id(id)?;

        info!(%id, "beer deleted");
        Ok(())
    }

    pub fn increment(&self, id: BeerId, delta: u32) -> StockResult<BeerDto> {
        self.change_quantity(id, delta, StockDirection::Increment)
    }

    pub fn decrement(&self, id: BeerId, delta: u32) -> StockResult<BeerDto> {
        self.change_quantity(id, delta, StockDirection::Decrement)
    }

    /// Move the quantity of `id` by `delta` in `direction`.
    ///
    /// The result must stay within `0..=max`; anything else is rejected with
    /// `StockExceeded` and the stored record is left untouched.
    pub fn change_quantity(
        &self,
        id: BeerId,
        delta: u32,
        direction: StockDirection,
    ) -> StockResult<BeerDto> {
        let _gate = self.write_gate();
        let mut beer = self.verify_exists(id)?;

        let current = i64::from(beer.quantity());
        let requested = match direction {
            StockDirection::Increment => current + i64::from(delta),
            StockDirection::Decrement => current - i64::from(delta),
        };
        let out_of_bounds = match direction {
            StockDirection::Increment => requested > i64::from(beer.max()),
            StockDirection::Decrement => requested < 0,
        };

        let new_quantity = match u32::try_from(requested) {
            Ok(q) if !out_of_bounds => q,
            _ => {
                warn!(%id, %direction, delta, quantity = beer.quantity(), max = beer.max(), "stock bound exceeded");
                return Err(StockError::StockExceeded {
                    id,
                    quantity: beer.quantity(),
                    max: beer.max(),
                    delta,
                    direction,
                });
            }
        };

        beer.set_quantity(new_quantity);
        let saved = self.store.save(beer)?;

        info!(%id, %direction, delta, quantity = saved.quantity(), "beer stock changed");
        Ok(saved.into())
    }

    fn verify_exists(&self, id: BeerId) -> StockResult<Beer> {
        self.store
            .find_by_id(id)?
            .ok_or(StockError::NotFound(BeerLookup::Id(id)))
    }

    fn write_gate(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`, so a poisoned gate carries no broken state.
        self.writes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
