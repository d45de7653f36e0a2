//! Query service contract and its mock/remote implementations.
//!
//! # Responsibility
//! - Expose one storage-agnostic CRUD + list contract per entity kind.
//! - Convert every backend failure into a `ServiceError` with a
//!   human-readable message; no transport error escapes raw.
//!
//! # Invariants
//! - A missing key is `Ok(None)` / `Ok(false)`, never an error.
//! - Mock and remote implementations return identical shapes, so callers
//!   switch between them without code changes.

pub mod mock_service;
pub mod remote_service;

use crate::model::query::{Page, SearchParams};
use crate::model::record::Entity;
use crate::model::validation::ValidationError;
use crate::repo::record_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub use mock_service::MockService;
pub use remote_service::RemoteService;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-layer error shared by every backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// DTO rejected before any storage access.
    Validation(ValidationError),
    /// Create collided with an existing key.
    Conflict(String),
    /// Network/HTTP failure or non-success envelope.
    Transport(String),
    /// Response could not be decoded into the expected shape.
    Decode(String),
    /// Local storage failure.
    Storage(String),
}

impl ServiceError {
    /// Message suitable for an inline error banner.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Conflict(message) => write!(f, "conflict: {message}"),
            Self::Transport(message) => write!(f, "request failed: {message}"),
            Self::Decode(message) => write!(f, "unexpected response: {message}"),
            Self::Storage(message) => write!(f, "storage error: {message}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateKey { .. } => Self::Conflict(value.to_string()),
            RepoError::Poisoned(_) => Self::Storage(value.to_string()),
        }
    }
}

/// Data-access contract for one entity kind.
pub trait RecordService<E: Entity>: Send + Sync {
    /// Returns one page for the given filter/sort/page parameters.
    fn list(&self, params: &SearchParams) -> ServiceResult<Page<E>>;
    fn get_by_key(&self, key: &str) -> ServiceResult<Option<E>>;
    fn create(&self, dto: E::Create) -> ServiceResult<E>;
    /// Returns `None` when no record has `key`.
    fn update(&self, key: &str, dto: E::Update) -> ServiceResult<Option<E>>;
    /// Returns whether a record was removed.
    fn delete(&self, key: &str) -> ServiceResult<bool>;
    /// Returns `true` only when every distinct key was removed.
    fn bulk_delete(&self, keys: &[String]) -> ServiceResult<bool>;
}

impl<E: Entity, S: RecordService<E> + ?Sized> RecordService<E> for Arc<S> {
    fn list(&self, params: &SearchParams) -> ServiceResult<Page<E>> {
        (**self).list(params)
    }

    fn get_by_key(&self, key: &str) -> ServiceResult<Option<E>> {
        (**self).get_by_key(key)
    }

    fn create(&self, dto: E::Create) -> ServiceResult<E> {
        (**self).create(dto)
    }

    fn update(&self, key: &str, dto: E::Update) -> ServiceResult<Option<E>> {
        (**self).update(key, dto)
    }

    fn delete(&self, key: &str) -> ServiceResult<bool> {
        (**self).delete(key)
    }

    fn bulk_delete(&self, keys: &[String]) -> ServiceResult<bool> {
        (**self).bulk_delete(keys)
    }
}

/// Shared, type-erased service handle handed out by the composition root.
pub type SharedService<E> = Arc<dyn RecordService<E>>;
