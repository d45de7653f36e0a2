//! UI-facing list state and the actions that change it.
//!
//! # Responsibility
//! - Hold the cached page, loading/error flags, counters and remembered
//!   search parameters for one list.
//! - Apply every change through `dispatch(action)` and notify subscribers.
//!
//! # Invariants
//! - Only the most recently started load may complete; completions carrying
//!   an older ticket are discarded.
//! - Failures become `StoreState::error`; previously loaded records stay.
//! - Local patches (`add/update/remove_record`) never re-fetch, so `total`
//!   may drift from the backend until the next load.

pub mod list_store;
pub mod reducer;
pub mod state;

pub use list_store::{LoadRequest, LoadTicket, Store, SubscriptionId};
pub use reducer::{reduce, StoreAction};
pub use state::StoreState;
