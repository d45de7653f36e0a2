//! Domain model for organizational records and list queries.
//!
//! # Responsibility
//! - Define the five managed entity kinds and their create/update DTOs.
//! - Define the shared query shapes (`SearchParams`, `SearchPatch`, `Page`).
//!
//! # Invariants
//! - Every record is addressed by a stable string key (`Entity::key`).
//! - Audit columns are assigned by the backend, never by DTOs.

pub mod competency;
pub mod course;
pub mod course_event;
pub mod department;
pub mod employee;
pub mod field;
pub mod query;
pub mod record;
pub mod validation;
