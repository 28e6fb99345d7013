//! Typed document operations over [`Store`] collections.
//!
//! [`DocumentSet`] treats a collection as a list of records and offers the
//! handful of operations the API actually performs: filtered finds, insert
//! (optionally guarded by a uniqueness filter), first-match update and
//! delete, and bulk delete. [`SingletonDocument`] covers the one collection
//! that holds a single document rather than a list.
//!
//! Filters are a closed set: equality and inequality on top-level fields,
//! combined with AND. Matching happens against the serialized form of a
//! record, so field names are the wire names (`priceValue`, not
//! `price_value`), and a missing field compares as JSON `null`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{StorageError, Store};

#[derive(Debug, Clone, PartialEq)]
enum Predicate {
    Eq(Value),
    Ne(Value),
}

/// Conjunction of field predicates.
///
/// ```
/// use veloce_server::store::Filter;
///
/// let filter = Filter::new().eq("featured", true).ne("type", "SUV");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Filter {
    conditions: Vec<(String, Predicate)>,
}

impl Filter {
    /// An empty filter. Matches every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value`.
    #[must_use]
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), Predicate::Eq(value.into())));
        self
    }

    /// Require `field` to differ from `value`.
    #[must_use]
    pub fn ne(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), Predicate::Ne(value.into())));
        self
    }

    /// Whether a serialized record satisfies every condition.
    #[must_use]
    pub fn matches(&self, record: &Value) -> bool {
        self.conditions.iter().all(|(field, predicate)| {
            let actual = record.get(field).unwrap_or(&Value::Null);
            match predicate {
                Predicate::Eq(expected) => actual == expected,
                Predicate::Ne(expected) => actual != expected,
            }
        })
    }
}

/// Serialize a record and run the filter over it.
///
/// A record that cannot be serialized never matches; our record types
/// always serialize, so this is theoretical.
fn matches<T: Serialize>(filter: &Filter, item: &T) -> bool {
    serde_json::to_value(item).is_ok_and(|value| filter.matches(&value))
}

/// A list-of-records collection.
///
/// Construction is free; the collection itself is loaded (and seeded if
/// absent) per operation. Write operations take the store's writer lock
/// for their whole read-modify-write cycle.
pub struct DocumentSet<'a, T> {
    store: &'a Store,
    key: &'a str,
    seed: fn() -> Vec<T>,
}

impl<'a, T> DocumentSet<'a, T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Bind a collection key to its record type and seed fixture.
    #[must_use]
    pub const fn new(store: &'a Store, key: &'a str, seed: fn() -> Vec<T>) -> Self {
        Self { store, key, seed }
    }

    /// All records, in stored order.
    #[must_use]
    pub fn all(&self) -> Vec<T> {
        self.store.read_or_seed(self.key, self.seed)
    }

    /// Records matching the filter, in stored order.
    #[must_use]
    pub fn find(&self, filter: &Filter) -> Vec<T> {
        let mut items = self.all();
        items.retain(|item| matches(filter, item));
        items
    }

    /// First record matching the filter.
    #[must_use]
    pub fn find_one(&self, filter: &Filter) -> Option<T> {
        self.all().into_iter().find(|item| matches(filter, item))
    }

    /// Number of records matching the filter.
    #[must_use]
    pub fn count(&self, filter: &Filter) -> usize {
        self.all().iter().filter(|item| matches(filter, *item)).count()
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be persisted.
    pub fn insert(&self, item: T) -> Result<T, StorageError> {
        self.store.mutate(self.key, self.seed, |items| {
            items.push(item.clone());
            item
        })
    }

    /// Append a record unless another record matches `taken`.
    ///
    /// Returns `None` without modifying the collection when the uniqueness
    /// filter already matches. The check and the append happen under one
    /// writer lock, so two racing inserts cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be persisted.
    pub fn insert_unique(&self, item: T, taken: &Filter) -> Result<Option<T>, StorageError> {
        self.store.mutate(self.key, self.seed, |items| {
            if items.iter().any(|existing| matches(taken, existing)) {
                return None;
            }
            items.push(item.clone());
            Some(item)
        })
    }

    /// Mutate the first record matching the filter.
    ///
    /// Returns the updated record, or `None` if nothing matched (the
    /// collection is left as-is).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be persisted.
    pub fn update_first(
        &self,
        filter: &Filter,
        f: impl FnOnce(&mut T),
    ) -> Result<Option<T>, StorageError> {
        self.store.mutate(self.key, self.seed, |items| {
            let item = items.iter_mut().find(|item| matches(filter, *item))?;
            f(item);
            Some(item.clone())
        })
    }

    /// Remove the first record matching the filter.
    ///
    /// Returns the removed record, or `None` if nothing matched.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be persisted.
    pub fn delete_first(&self, filter: &Filter) -> Result<Option<T>, StorageError> {
        self.store.mutate(self.key, self.seed, |items| {
            let index = items.iter().position(|item| matches(filter, item))?;
            Some(items.remove(index))
        })
    }

    /// Remove every record matching the filter, returning how many went.
    ///
    /// An empty filter clears the collection.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be persisted.
    pub fn delete_many(&self, filter: &Filter) -> Result<usize, StorageError> {
        self.store.mutate(self.key, self.seed, |items| {
            let before = items.len();
            items.retain(|item| !matches(filter, item));
            before - items.len()
        })
    }
}

/// A collection holding exactly one document.
pub struct SingletonDocument<'a, T> {
    store: &'a Store,
    key: &'a str,
    seed: fn() -> T,
}

impl<'a, T> SingletonDocument<'a, T>
where
    T: Serialize + DeserializeOwned,
{
    /// Bind a collection key to its document type and seed fixture.
    #[must_use]
    pub const fn new(store: &'a Store, key: &'a str, seed: fn() -> T) -> Self {
        Self { store, key, seed }
    }

    /// The document, seeded on first access.
    #[must_use]
    pub fn read_or_seed(&self) -> T {
        self.store.read_or_seed(self.key, self.seed)
    }

    /// Replace the document wholesale and hand it back.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the document cannot be persisted.
    pub fn replace(&self, value: T) -> Result<T, StorageError> {
        self.store.write(self.key, &value)?;
        Ok(value)
    }

    /// Drop the document and return the freshly re-seeded default.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    pub fn reset(&self) -> Result<T, StorageError> {
        self.store.remove(self.key)?;
        Ok(self.read_or_seed())
    }
}
