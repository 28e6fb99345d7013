//! Repository for the car inventory.

use chrono::Utc;

use veloce_core::{Car, CarId, CreateCar, UpdateCar};

use super::{CARS, RepositoryError, generate_id};
use crate::fixtures;
use crate::store::{DocumentSet, Filter, Store};

/// Repository for car inventory operations.
pub struct CarRepository<'a> {
    docs: DocumentSet<'a, Car>,
}

impl<'a> CarRepository<'a> {
    /// Create a new car repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            docs: DocumentSet::new(store, CARS, fixtures::seed_cars),
        }
    }

    fn id_filter(id: &CarId) -> Filter {
        Filter::new().eq("id", id.as_str())
    }

    /// All cars, newest first. Ties keep stored order.
    #[must_use]
    pub fn list(&self) -> Vec<Car> {
        let mut cars = self.docs.all();
        cars.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        cars
    }

    /// A single car by ID.
    #[must_use]
    pub fn get(&self, id: &CarId) -> Option<Car> {
        self.docs.find_one(&Self::id_filter(id))
    }

    /// Create a car from a (possibly loose) payload.
    ///
    /// Numeric junk in the payload is coerced to zero, missing display
    /// fields become empty strings, and a missing ID is generated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the ID is already taken, or
    /// `RepositoryError::Storage` if the collection cannot be persisted.
    pub fn create(&self, payload: CreateCar) -> Result<Car, RepositoryError> {
        let price_value = payload.coerced_price_value();
        let horsepower_value = payload.coerced_horsepower_value();
        let id = payload
            .id
            .clone()
            .unwrap_or_else(|| CarId::new(generate_id("car")));

        let now = Utc::now();
        let car = Car {
            id: id.clone(),
            name: payload.name,
            brand: payload.brand,
            tagline: payload.tagline,
            price: payload.price,
            price_value,
            image: payload.image,
            acceleration: payload.acceleration,
            horsepower: payload.horsepower,
            horsepower_value,
            top_speed: payload.top_speed,
            description: payload.description,
            featured: payload.featured,
            car_type: payload.car_type,
            specs: payload.specs,
            created_at: now,
            updated_at: now,
        };

        self.docs
            .insert_unique(car, &Self::id_filter(&id))?
            .ok_or_else(|| RepositoryError::Conflict(format!("car id {id} already exists")))
    }

    /// Merge an update into a car and stamp `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no car has this ID, or
    /// `RepositoryError::Storage` if the collection cannot be persisted.
    pub fn update(&self, id: &CarId, payload: UpdateCar) -> Result<Car, RepositoryError> {
        self.docs
            .update_first(&Self::id_filter(id), |car| {
                payload.apply(car);
                car.updated_at = Utc::now();
            })?
            .ok_or(RepositoryError::NotFound)
    }

    /// Remove a car and return it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no car has this ID, or
    /// `RepositoryError::Storage` if the collection cannot be persisted.
    pub fn delete(&self, id: &CarId) -> Result<Car, RepositoryError> {
        self.docs
            .delete_first(&Self::id_filter(id))?
            .ok_or(RepositoryError::NotFound)
    }

    /// Number of cars in the inventory.
    #[must_use]
    pub fn count(&self) -> usize {
        self.docs.count(&Filter::new())
    }

    /// Sum of all price values, in whole dollars.
    #[must_use]
    pub fn portfolio_value(&self) -> u64 {
        self.docs.all().iter().map(|car| car.price_value).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};
    use serde_json::json;

    use crate::store::MemoryStorage;

    use super::*;

    fn store() -> Store {
        Store::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_first_list_seeds_fixtures() {
        let store = store();
        let repo = CarRepository::new(&store);

        let cars = repo.list();
        assert_eq!(cars.len(), 6);
        assert!(repo.get(&CarId::new("phantom-gt")).is_some());
    }

    #[test]
    fn test_list_sorts_newest_first() {
        let store = store();
        let now = Utc::now();
        let mut cars = fixtures::seed_cars();
        // Age the fixtures, then make one record clearly newest.
        for (i, car) in cars.iter_mut().enumerate() {
            car.created_at = now - Duration::hours(i64::try_from(i).unwrap() + 1);
        }
        cars.reverse();
        store.write(CARS, &cars).unwrap();

        let repo = CarRepository::new(&store);
        let listed = repo.list();
        let timestamps: Vec<_> = listed.iter().map(|c| c.created_at).collect();
        let mut sorted = timestamps.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(timestamps, sorted);
    }

    #[test]
    fn test_create_coerces_loose_payload() {
        let store = store();
        let repo = CarRepository::new(&store);

        let payload: CreateCar = serde_json::from_value(json!({
            "name": "Loose One",
            "priceValue": "not a number",
        }))
        .unwrap();

        let car = repo.create(payload).unwrap();
        assert_eq!(car.price_value, 0);
        assert_eq!(car.horsepower_value, 0);
        assert_eq!(car.brand, "");
        assert!(car.id.as_str().starts_with("car-"));
        assert_eq!(repo.count(), 7);
    }

    #[test]
    fn test_create_duplicate_id_conflicts_without_inserting() {
        let store = store();
        let repo = CarRepository::new(&store);
        repo.list(); // seed

        let payload: CreateCar = serde_json::from_value(json!({
            "id": "phantom-gt",
            "name": "Imposter",
        }))
        .unwrap();

        let err = repo.create(payload).unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert_eq!(repo.count(), 6);
    }

    #[test]
    fn test_update_merges_and_stamps() {
        let store = store();
        let repo = CarRepository::new(&store);
        let id = CarId::new("phantom-gt");
        let before = repo.get(&id).unwrap();

        let payload: UpdateCar =
            serde_json::from_value(json!({"priceValue": 150_000, "featured": false})).unwrap();
        let updated = repo.update(&id, payload).unwrap();

        assert_eq!(updated.price_value, 150_000);
        assert!(!updated.featured);
        assert_eq!(updated.name, before.name);
        assert!(updated.updated_at >= before.updated_at);
        assert_eq!(updated.created_at, before.created_at);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let store = store();
        let repo = CarRepository::new(&store);

        let err = repo
            .update(&CarId::new("missing"), UpdateCar::default())
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = store();
        let repo = CarRepository::new(&store);
        repo.list(); // seed

        let gone = repo.delete(&CarId::new("nebula-x")).unwrap();
        assert_eq!(gone.id.as_str(), "nebula-x");
        assert_eq!(repo.count(), 5);

        let err = repo.delete(&CarId::new("nebula-x")).unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
        assert_eq!(repo.count(), 5);
    }

    #[test]
    fn test_portfolio_value_sums_fixtures() {
        let store = store();
        let repo = CarRepository::new(&store);
        // 145k + 189k + 2.5M + 320k + 410k + 165k
        assert_eq!(repo.portfolio_value(), 3_729_000);
    }
}
