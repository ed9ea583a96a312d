//! Repository contracts and the in-memory record store.
//!
//! Entities describe how the store assigns identity and version metadata
//! through [`Entity`]; storage backends implement [`CrudRepository`] and
//! [`PagingAndSortingRepository`].

pub mod error;
pub mod memory;
pub mod page;
pub mod repository;

pub use error::RepositoryError;
pub use memory::InMemoryRepository;
pub use page::{Direction, Page, PageRequest, Sort};
pub use repository::{CrudRepository, Entity, PagingAndSortingRepository, Stamp};
