//! In-process list query pipeline used by mock backends.
//!
//! # Responsibility
//! - Apply keyword, equality and range predicates to a record set.
//! - Sort with a stable comparator and slice one page.
//!
//! # Invariants
//! - `Page::total_records` is the filtered count, before slicing.
//! - Records without a comparable sort value keep their relative order.

pub mod filter;
pub mod pipeline;

pub use filter::matches;
pub use pipeline::{paginate, run_query, sort_records};
