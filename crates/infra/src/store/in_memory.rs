use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use beerstock_core::BeerId;
use beerstock_stock::{Beer, BeerStore, StoreError};

/// In-memory beer store for tests/dev.
///
/// Records are kept ordered by id, so `find_all` returns them in insertion
/// order. Ids are handed out from a counter starting at 1 and never reused.
#[derive(Debug)]
pub struct InMemoryBeerStore {
    beers: RwLock<BTreeMap<BeerId, Beer>>,
    next_id: AtomicU64,
}

impl InMemoryBeerStore {
    pub fn new() -> Self {
        Self {
            beers: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<BeerId, Beer>>, StoreError> {
        self.beers
            .read()
            .map_err(|_| StoreError::Storage("beer map lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<BeerId, Beer>>, StoreError> {
        self.beers
            .write()
            .map_err(|_| StoreError::Storage("beer map lock poisoned".to_string()))
    }
}

impl Default for InMemoryBeerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BeerStore for InMemoryBeerStore {
    fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>, StoreError> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Beer>, StoreError> {
        Ok(self.read()?.values().find(|b| b.name() == name).cloned())
    }

    fn find_all(&self) -> Result<Vec<Beer>, StoreError> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn save(&self, beer: Beer) -> Result<Beer, StoreError> {
        let explicit = match beer.id() {
            Some(id) => {
                let next = id.value().checked_add(1).ok_or_else(|| {
                    StoreError::Storage(format!("id {id} leaves no room for further ids"))
                })?;
                Some((id, next))
            }
            None => None,
        };

        let mut beers = self.write()?;
        let (id, beer) = match explicit {
            Some((id, next)) => {
                // Keep the counter ahead of explicitly supplied ids.
                self.next_id.fetch_max(next, Ordering::SeqCst);
                (id, beer)
            }
            None => {
                let id = BeerId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
                (id, beer.with_id(id))
            }
        };

        debug!(%id, name = beer.name(), "saving beer record");
        beers.insert(id, beer.clone());
        Ok(beer)
    }

    fn delete_by_id(&self, id: BeerId) -> Result<(), StoreError> {
        self.write()?.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beerstock_stock::{BeerDto, BeerType};

    fn beer(name: &str) -> Beer {
        Beer::from_dto(BeerDto {
            id: None,
            name: name.to_string(),
            brand: "Ambev".to_string(),
            max: 50,
            quantity: 10,
            beer_type: BeerType::Lager,
        })
    }

    #[test]
    fn save_assigns_sequential_ids() {
        let store = InMemoryBeerStore::new();

        let first = store.save(beer("Brahma")).unwrap();
        let second = store.save(beer("Skol")).unwrap();

        assert_eq!(first.id(), Some(BeerId::new(1)));
        assert_eq!(second.id(), Some(BeerId::new(2)));
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn save_with_id_updates_in_place() {
        let store = InMemoryBeerStore::new();
        let saved = store.save(beer("Brahma")).unwrap();
        let id = saved.id().unwrap();

        let renamed = Beer::from_dto(BeerDto {
            name: "Brahma Duplo Malte".to_string(),
            ..BeerDto::from(saved)
        });
        store.save(renamed).unwrap();

        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.find_by_id(id).unwrap().unwrap().name(), "Brahma Duplo Malte");
    }

    #[test]
    fn explicit_ids_are_never_handed_out_again() {
        let store = InMemoryBeerStore::new();
        store.save(beer("Brahma").with_id(BeerId::new(7))).unwrap();

        let next = store.save(beer("Skol")).unwrap();

        assert_eq!(next.id(), Some(BeerId::new(8)));
    }

    #[test]
    fn saving_the_largest_id_is_rejected_without_poisoning() {
        let store = InMemoryBeerStore::new();

        let err = store
            .save(beer("Brahma").with_id(BeerId::new(u64::MAX)))
            .unwrap_err();

        assert!(matches!(err, StoreError::Storage(_)));
        assert_eq!(store.len().unwrap(), 0);
        let next = store.save(beer("Skol")).unwrap();
        assert_eq!(next.id(), Some(BeerId::new(1)));
        assert_eq!(store.find_by_name("Skol").unwrap(), Some(next));
    }

    #[test]
    fn lookups_by_id_and_name() {
        let store = InMemoryBeerStore::new();
        let saved = store.save(beer("Brahma")).unwrap();

        assert_eq!(store.find_by_id(saved.id().unwrap()).unwrap(), Some(saved.clone()));
        assert_eq!(store.find_by_name("Brahma").unwrap(), Some(saved));
        assert_eq!(store.find_by_name("brahma").unwrap(), None);
        assert_eq!(store.find_by_id(BeerId::new(99)).unwrap(), None);
    }

    #[test]
    fn find_all_is_ordered_by_id() {
        let store = InMemoryBeerStore::new();
        for name in ["Brahma", "Skol", "Antarctica"] {
            store.save(beer(name)).unwrap();
        }

        let names: Vec<_> = store
            .find_all()
            .unwrap()
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        assert_eq!(names, vec!["Brahma", "Skol", "Antarctica"]);
    }

    #[test]
    fn delete_removes_only_that_record() {
        let store = InMemoryBeerStore::new();
        let brahma = store.save(beer("Brahma")).unwrap();
        let skol = store.save(beer("Skol")).unwrap();

        store.delete_by_id(brahma.id().unwrap()).unwrap();

        assert_eq!(store.find_by_id(brahma.id().unwrap()).unwrap(), None);
        assert_eq!(store.find_all().unwrap(), vec![skol]);
    }
}
