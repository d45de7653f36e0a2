//! Headless view models for list, form and detail screens.
//!
//! # Responsibility
//! - Describe form fields, labels and edit-mode locking per entity kind.
//! - Run list actions (confirmed delete, bulk delete, status toggle) against
//!   the service and patch the store afterwards.
//! - Render records as label/value rows, resolving foreign keys to labels.
//!
//! # Invariants
//! - Validation failures are returned to the form and never reach a service.
//! - List actions never return errors; failures land in `StoreState::error`.

pub mod detail;
pub mod form;
pub mod list;
pub mod schemas;

pub use detail::{detail_rows, DetailRow, Lookups, ReferenceLookup};
pub use form::{submit_create, submit_update, FormField, FormMode, FormSchema, HasForm};
pub use list::{
    bulk_delete_with_confirmation, delete_with_confirmation, next_sort, sort_by_header,
    toggle_status, ActionOutcome, Confirm,
};
