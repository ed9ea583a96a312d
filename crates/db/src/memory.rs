//! In-memory repository.
//!
//! Records live in a `HashMap` behind `Arc<RwLock<..>>`, so clones of the
//! repository share one store. `save` holds the write lock across the
//! version check and the write.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use time::{OffsetDateTime, PrimitiveDateTime};
use tokio::sync::RwLock;

use crate::error::RepositoryError;
use crate::page::{Direction, Page, PageRequest};
use crate::repository::{CrudRepository, Entity, PagingAndSortingRepository, Stamp};

pub struct InMemoryRepository<T: Entity> {
    records: Arc<RwLock<HashMap<T::Id, T>>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

fn now_utc() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

#[async_trait]
impl<T: Entity> CrudRepository<T> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, RepositoryError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn save(&self, mut entity: T) -> Result<T, RepositoryError> {
        let now = now_utc();
        let mut records = self.records.write().await;

        let stamp = match entity.id() {
            None => Stamp {
                id: T::generate_id(),
                version: 0,
                created_date: now,
                last_modified_date: now,
            },
            Some(id) => match records.get(&id) {
                Some(stored) => {
                    let expected = stored.version().unwrap_or_default();
                    if let Some(found) = entity.version() {
                        if found != expected {
                            tracing::warn!(%id, expected, found, "rejecting stale write");
                            return Err(RepositoryError::VersionConflict {
                                id: id.to_string(),
                                expected,
                                found,
                            });
                        }
                    }
                    Stamp {
                        id,
                        version: expected + 1,
                        created_date: stored.created_date().unwrap_or(now),
                        last_modified_date: now,
                    }
                }
                None => Stamp {
                    id,
                    version: 0,
                    created_date: now,
                    last_modified_date: now,
                },
            },
        };

        entity.stamp(stamp);
        records.insert(stamp.id, entity.clone());
        tracing::debug!(id = %stamp.id, version = stamp.version, "record saved");

        Ok(entity)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let records = self.records.read().await;
        Ok(records.len() as u64)
    }

    async fn delete_by_id(&self, id: T::Id) -> Result<bool, RepositoryError> {
        let mut records = self.records.write().await;
        Ok(records.remove(&id).is_some())
    }
}

#[async_trait]
impl<T: Entity> PagingAndSortingRepository<T> for InMemoryRepository<T> {
    async fn find_all(&self, request: PageRequest) -> Result<Page<T>, RepositoryError> {
        request.validate()?;
        if let Some(sort) = &request.sort {
            if !T::SORT_PROPERTIES.contains(&sort.property.as_str()) {
                return Err(RepositoryError::InvalidSort(sort.property.clone()));
            }
        }

        let mut items: Vec<T> = {
            let records = self.records.read().await;
            records.values().cloned().collect()
        };

        // Creation order is the default; the id breaks ties.
        items.sort_by_cached_key(|item| (item.created_date(), item.id().map(|id| id.to_string())));
        if let Some(sort) = &request.sort {
            items.sort_by(|a, b| {
                let ordering = a.compare_by(b, &sort.property);
                match sort.direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            });
        }

        let total = items.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let items = items
            .into_iter()
            .skip(offset)
            .take(request.size as usize)
            .collect();

        Ok(Page {
            items,
            total,
            page: request.page,
            size: request.size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Sort;
    use std::cmp::Ordering;
    use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

    static NEXT_ID: AtomicU64 = AtomicU64::new(1);

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Keg {
        id: Option<u64>,
        version: Option<i64>,
        created_date: Option<PrimitiveDateTime>,
        last_modified_date: Option<PrimitiveDateTime>,
        label: String,
        litres: u32,
    }

    impl Keg {
        fn new(label: &str, litres: u32) -> Self {
            Self {
                label: label.to_string(),
                litres,
                ..Self::default()
            }
        }
    }

    impl Entity for Keg {
        type Id = u64;

        const SORT_PROPERTIES: &'static [&'static str] = &["label", "litres"];

        fn generate_id() -> u64 {
            NEXT_ID.fetch_add(1, AtomicOrdering::Relaxed)
        }

        fn id(&self) -> Option<u64> {
            self.id
        }

        fn version(&self) -> Option<i64> {
            self.version
        }

        fn created_date(&self) -> Option<PrimitiveDateTime> {
            self.created_date
        }

        fn stamp(&mut self, stamp: Stamp<u64>) {
            self.id = Some(stamp.id);
            self.version = Some(stamp.version);
            self.created_date = Some(stamp.created_date);
            self.last_modified_date = Some(stamp.last_modified_date);
        }

        fn compare_by(&self, other: &Self, property: &str) -> Ordering {
            match property {
                "label" => self.label.cmp(&other.label),
                "litres" => self.litres.cmp(&other.litres),
                _ => Ordering::Equal,
            }
        }
    }

    #[tokio::test]
    async fn first_save_assigns_identity_and_version_zero() {
        let repository: InMemoryRepository<Keg> = InMemoryRepository::new();

        let saved = repository.save(Keg::new("stout", 50)).await.unwrap();

        assert!(saved.id.is_some());
        assert_eq!(saved.version, Some(0));
        assert!(saved.created_date.is_some());
        assert_eq!(saved.created_date, saved.last_modified_date);
        assert_eq!(repository.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn update_increments_version_and_keeps_creation_date() {
        let repository: InMemoryRepository<Keg> = InMemoryRepository::new();
        let saved = repository.save(Keg::new("stout", 50)).await.unwrap();

        let mut changed = saved.clone();
        changed.litres = 30;
        let updated = repository.save(changed).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.version, Some(1));
        assert_eq!(updated.created_date, saved.created_date);
        assert!(updated.last_modified_date >= saved.last_modified_date);

        let stored = repository.find_by_id(saved.id.unwrap()).await.unwrap();
        assert_eq!(stored.unwrap().litres, 30);
    }

    #[tokio::test]
    async fn stale_version_is_a_conflict() {
        let repository: InMemoryRepository<Keg> = InMemoryRepository::new();
        let saved = repository.save(Keg::new("stout", 50)).await.unwrap();
        repository.save(saved.clone()).await.unwrap();

        let err = repository.save(saved.clone()).await.unwrap_err();

        assert_eq!(
            err,
            RepositoryError::VersionConflict {
                id: saved.id.unwrap().to_string(),
                expected: 1,
                found: 0,
            }
        );
    }

    #[tokio::test]
    async fn unknown_identifier_is_inserted_with_that_identifier() {
        let repository: InMemoryRepository<Keg> = InMemoryRepository::new();
        let keg = Keg {
            id: Some(9_999),
            version: Some(7),
            ..Keg::new("porter", 20)
        };

        let saved = repository.save(keg).await.unwrap();

        assert_eq!(saved.id, Some(9_999));
        assert_eq!(saved.version, Some(0));
    }

    #[tokio::test]
    async fn missing_record_is_none_not_error() {
        let repository: InMemoryRepository<Keg> = InMemoryRepository::new();
        assert_eq!(repository.find_by_id(42_424_242).await.unwrap(), None);
        assert!(!repository.exists_by_id(42_424_242).await.unwrap());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_record_was_removed() {
        let repository: InMemoryRepository<Keg> = InMemoryRepository::new();
        let saved = repository.save(Keg::new("gose", 10)).await.unwrap();
        let id = saved.id.unwrap();

        assert!(repository.delete_by_id(id).await.unwrap());
        assert!(!repository.delete_by_id(id).await.unwrap());
        assert_eq!(repository.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn clones_share_the_same_store() {
        let repository: InMemoryRepository<Keg> = InMemoryRepository::new();
        let handle = repository.clone();
        let saved = handle.save(Keg::new("lager", 40)).await.unwrap();

        assert!(repository.exists_by_id(saved.id.unwrap()).await.unwrap());
    }

    #[tokio::test]
    async fn find_all_pages_and_sorts() {
        let repository: InMemoryRepository<Keg> = InMemoryRepository::new();
        for (label, litres) in [("saison", 20), ("ale", 50), ("wheat", 30), ("ipa", 10)] {
            repository.save(Keg::new(label, litres)).await.unwrap();
        }

        let first = repository
            .find_all(PageRequest::of(0, 3).sorted(Sort::asc("label")))
            .await
            .unwrap();
        let labels: Vec<_> = first.items.iter().map(|keg| keg.label.as_str()).collect();
        assert_eq!(labels, ["ale", "ipa", "saison"]);
        assert_eq!(first.total, 4);
        assert!(first.has_next());

        let second = repository
            .find_all(PageRequest::of(1, 3).sorted(Sort::asc("label")))
            .await
            .unwrap();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].label, "wheat");

        let by_volume = repository
            .find_all(PageRequest::of(0, 2).sorted(Sort::desc("litres")))
            .await
            .unwrap();
        let litres: Vec<_> = by_volume.items.iter().map(|keg| keg.litres).collect();
        assert_eq!(litres, [50, 30]);
    }

    #[tokio::test]
    async fn find_all_rejects_unknown_sort_and_empty_pages() {
        let repository: InMemoryRepository<Keg> = InMemoryRepository::new();

        let err = repository
            .find_all(PageRequest::default().sorted(Sort::asc("colour")))
            .await
            .unwrap_err();
        assert_eq!(err, RepositoryError::InvalidSort("colour".to_string()));

        let err = repository.find_all(PageRequest::of(0, 0)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidPage(_)));
    }
}
