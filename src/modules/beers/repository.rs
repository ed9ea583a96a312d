use std::sync::Arc;

use taproom_db::{InMemoryRepository, PagingAndSortingRepository};

use super::models::Beer;

/// Storage seam for beers; handlers only see this trait object.
pub type BeerRepository = dyn PagingAndSortingRepository<Beer>;

pub fn in_memory() -> Arc<BeerRepository> {
    Arc::new(InMemoryRepository::<Beer>::new())
}
