use std::sync::Arc;

use beerstock_infra::InMemoryBeerStore;
use beerstock_stock::BeerService;

pub type StockService = BeerService<Arc<InMemoryBeerStore>>;

/// Services shared by every handler.
#[derive(Debug)]
pub struct AppServices {
    beers: StockService,
}

impl AppServices {
    pub fn new(beers: StockService) -> Self {
        Self { beers }
    }

    pub fn beers(&self) -> &StockService {
        &self.beers
    }
}

/// Wire the stock service over a fresh in-memory store.
pub fn build_services() -> AppServices {
    tracing::info!("using in-memory beer store");
    AppServices::new(BeerService::new(InMemoryBeerStore::arc()))
}
