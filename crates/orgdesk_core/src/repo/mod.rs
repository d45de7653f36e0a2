//! Repository abstraction over record storage.
//!
//! # Responsibility
//! - Define the explicit list/get/create/update/delete contract services
//!   depend on, instead of process-wide mock arrays.
//! - Provide the in-memory implementation owned by the composition root.
//!
//! # Invariants
//! - Repositories return semantic errors (`DuplicateKey`) in addition to
//!   storage failures; a missing key is `None`/`false`, not an error.

pub mod record_repo;
