//! In-memory, list-backed repositories.
//!
//! Every entity kind is stored in a [`ListRepository`], which implements the
//! [`Repository`] contract with a linear scan over an ordered collection.
//! Entity-specific operations live in the per-kind submodules.

mod appointments;
mod diagnoses;
mod doctors;
mod exams;
mod patients;
mod sequence;
mod snapshot;

pub use appointments::*;
pub use diagnoses::*;
pub use doctors::*;
pub use exams::*;
pub use patients::*;
pub use sequence::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::error::{COLLECTION_UNINITIALIZED_CODE, ENTITY_ALREADY_EXISTS_CODE};
use crate::models::Identified;

/// Repository errors.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("{kind} with id {id} already exists")]
    EntityAlreadyExists { kind: &'static str, id: i32 },

    #[error("{kind} collection is not initialized")]
    CollectionUninitialized { kind: &'static str },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot mismatch: {0}")]
    SnapshotMismatch(String),

    #[error("repository sequence exhausted after id {last}")]
    SequenceExhausted { last: u32 },
}

impl RepoError {
    /// Diagnostic code of the domain error kinds; `None` for generic failures.
    pub fn code(&self) -> Option<u16> {
        match self {
            RepoError::EntityAlreadyExists { .. } => Some(ENTITY_ALREADY_EXISTS_CODE),
            RepoError::CollectionUninitialized { .. } => Some(COLLECTION_UNINITIALIZED_CODE),
            _ => None,
        }
    }
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Basic add/remove/exists/get contract shared by all repositories.
pub trait Repository<T> {
    /// Append an item. No duplicate check is made.
    fn add(&mut self, item: T) -> RepoResult<bool>;

    /// Remove the first item with this id. `Ok(false)` when nothing matched.
    fn remove(&mut self, id: i32) -> RepoResult<bool>;

    fn exists(&self, id: i32) -> RepoResult<bool>;

    fn get_by_id(&self, id: i32) -> RepoResult<Option<&T>>;
}

/// An entity that can live in a [`ListRepository`] and be exchanged through
/// its transfer record.
pub trait StoredEntity: Identified + Serialize + DeserializeOwned {
    type Record: Identified;

    /// Human-readable kind, used in errors, logs and snapshots.
    const KIND: &'static str;

    fn from_record(record: &Self::Record) -> Self;

    fn to_record(&self) -> Self::Record;
}

/// Ordered, list-backed store for one entity kind.
///
/// The backing collection is optional: a repository without one is a setup
/// error reported as [`RepoError::CollectionUninitialized`], which is not the
/// same thing as an empty repository.
#[derive(Debug, Clone)]
pub struct ListRepository<T> {
    repository_id: u32,
    items: Option<Vec<T>>,
}

impl<T: StoredEntity> ListRepository<T> {
    /// Create an empty repository numbered by the given sequence.
    pub fn new(sequence: &mut RepositorySequence) -> RepoResult<Self> {
        Ok(Self::with_id(sequence.next_id()?))
    }

    /// Create an empty repository with a caller-supplied serial id.
    pub fn with_id(repository_id: u32) -> Self {
        Self {
            repository_id,
            items: Some(Vec::new()),
        }
    }

    /// Create a repository with no backing collection.
    pub fn uninitialized(repository_id: u32) -> Self {
        Self {
            repository_id,
            items: None,
        }
    }

    /// Serial id assigned at construction (not an entity id).
    pub fn repository_id(&self) -> u32 {
        self.repository_id
    }

    pub fn is_initialized(&self) -> bool {
        self.items.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate stored entities in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().flatten()
    }

    /// Add an entity built from its transfer record, rejecting duplicate ids.
    pub fn add_record(&mut self, record: &T::Record) -> RepoResult<bool> {
        let id = record.id();
        if self.exists(id)? {
            return Err(RepoError::EntityAlreadyExists { kind: T::KIND, id });
        }
        if !self.add(T::from_record(record))? {
            return Err(RepoError::InvalidOperation(format!(
                "failed to add {} {}",
                T::KIND,
                id
            )));
        }
        Ok(true)
    }

    /// Get the transfer record for an entity.
    pub fn get_record(&self, id: i32) -> RepoResult<Option<T::Record>> {
        Ok(self.get_by_id(id)?.map(T::to_record))
    }

    pub(crate) fn get_mut(&mut self, id: i32) -> RepoResult<Option<&mut T>> {
        Ok(self.items_mut()?.iter_mut().find(|item| item.id() == id))
    }

    pub(crate) fn items(&self) -> RepoResult<&Vec<T>> {
        self.items
            .as_ref()
            .ok_or(RepoError::CollectionUninitialized { kind: T::KIND })
    }

    pub(crate) fn items_mut(&mut self) -> RepoResult<&mut Vec<T>> {
        self.items
            .as_mut()
            .ok_or(RepoError::CollectionUninitialized { kind: T::KIND })
    }
}

impl<T: StoredEntity> Repository<T> for ListRepository<T> {
    fn add(&mut self, item: T) -> RepoResult<bool> {
        debug!(kind = T::KIND, id = item.id(), "adding entity");
        self.items_mut()?.push(item);
        Ok(true)
    }

    fn remove(&mut self, id: i32) -> RepoResult<bool> {
        let items = self.items_mut()?;
        match items.iter().position(|item| item.id() == id) {
            Some(index) => {
                items.remove(index);
                debug!(kind = T::KIND, id, "removed entity");
                Ok(true)
            }
            None => {
                debug!(kind = T::KIND, id, "nothing to remove");
                Ok(false)
            }
        }
    }

    fn exists(&self, id: i32) -> RepoResult<bool> {
        Ok(self.get_by_id(id)?.is_some())
    }

    fn get_by_id(&self, id: i32) -> RepoResult<Option<&T>> {
        Ok(self.items()?.iter().find(|item| item.id() == id))
    }
}
