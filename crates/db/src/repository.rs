use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;

use async_trait::async_trait;
use time::PrimitiveDateTime;

use crate::error::RepositoryError;
use crate::page::{Page, PageRequest};

/// Persistence metadata assigned by the store on every save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp<Id> {
    pub id: Id,
    pub version: i64,
    pub created_date: PrimitiveDateTime,
    pub last_modified_date: PrimitiveDateTime,
}

/// A record the store can identify, version and order.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + Hash + Display + Send + Sync + 'static;

    /// Properties accepted by [`Entity::compare_by`].
    const SORT_PROPERTIES: &'static [&'static str] = &[];

    /// Generate a fresh identifier for a first save.
    fn generate_id() -> Self::Id;

    fn id(&self) -> Option<Self::Id>;

    fn version(&self) -> Option<i64>;

    fn created_date(&self) -> Option<PrimitiveDateTime>;

    /// Overwrite the store-owned fields.
    fn stamp(&mut self, stamp: Stamp<Self::Id>);

    /// Compare two entities on one of [`Entity::SORT_PROPERTIES`].
    fn compare_by(&self, _other: &Self, _property: &str) -> Ordering {
        Ordering::Equal
    }
}

/// Create/read/update/delete over entities keyed by their identifier.
#[async_trait]
pub trait CrudRepository<T: Entity>: Send + Sync {
    /// Returns `Ok(None)` when no record has the identifier.
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, RepositoryError>;

    /// Insert or update, returning the entity with its store-assigned fields.
    ///
    /// An entity without an identifier gets a new one and version 0. An entity
    /// whose identifier is already stored must carry the stored version (or
    /// none); the version is then incremented and the creation date kept.
    async fn save(&self, entity: T) -> Result<T, RepositoryError>;

    async fn exists_by_id(&self, id: T::Id) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Returns whether a record was removed.
    async fn delete_by_id(&self, id: T::Id) -> Result<bool, RepositoryError>;
}

/// Paged, optionally sorted listing on top of [`CrudRepository`].
#[async_trait]
pub trait PagingAndSortingRepository<T: Entity>: CrudRepository<T> {
    async fn find_all(&self, request: PageRequest) -> Result<Page<T>, RepositoryError>;
}
