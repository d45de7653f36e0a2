//! List store: remembered query state over one `RecordService`.
//!
//! # Responsibility
//! - Merge partial parameter changes and fetch through the service.
//! - Keep the cached page in sync after CRUD calls without re-fetching.
//! - Notify subscribers after every effective state change.
//!
//! # Invariants
//! - Tickets increase monotonically per store; only the pending ticket may
//!   complete a load.
//! - `state.params` changes only when a load succeeds; a failed load keeps
//!   the parameters of the last page actually shown.
//! - Mutators never return errors; failures are written to `state.error`.

use crate::model::query::{Page, SearchParams, SearchPatch, SortDirection};
use crate::model::record::Entity;
use crate::service::{RecordService, ServiceResult};
use crate::store::reducer::{reduce, StoreAction};
use crate::store::state::StoreState;
use log::{debug, warn};

/// Sequence number identifying one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A started load: the caller fetches `params` and reports back with
/// `Store::finish_load(ticket, result)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub params: SearchParams,
}

type Listener<E> = Box<dyn FnMut(&StoreState<E>) + Send>;

pub struct Store<E: Entity, S: RecordService<E>> {
    service: S,
    defaults: SearchParams,
    state: StoreState<E>,
    next_ticket: u64,
    listeners: Vec<(SubscriptionId, Listener<E>)>,
    next_subscription: u64,
}

impl<E: Entity, S: RecordService<E>> Store<E, S> {
    /// Creates an empty store; `defaults` seed the remembered parameters and
    /// are restored by `reset`.
    pub fn new(service: S, defaults: SearchParams) -> Self {
        Self {
            service,
            state: StoreState::new(defaults.clone()),
            defaults,
            next_ticket: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &StoreState<E> {
        &self.state
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Applies one action and notifies subscribers if the state changed.
    pub fn dispatch(&mut self, action: StoreAction<E>) -> &StoreState<E> {
        if reduce(&mut self.state, action) {
            for (_, listener) in self.listeners.iter_mut() {
                listener(&self.state);
            }
        }
        &self.state
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&StoreState<E>) + Send + 'static) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether `id` was subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Merges `patch`, marks the store loading and issues a new ticket.
    ///
    /// The patch merges over the in-flight parameters when a load is
    /// pending, otherwise over those of the last successful load. Any load
    /// still pending becomes stale.
    pub fn begin_load(&mut self, patch: &SearchPatch) -> LoadRequest {
        self.next_ticket += 1;
        let ticket = LoadTicket::new(self.next_ticket);
        let params = self
            .state
            .pending_params()
            .unwrap_or(&self.state.params)
            .merged(patch);
        if let Some(previous) = self.state.pending_ticket() {
            debug!(
                "event=store_load module=store status=superseded resource={} ticket={} by={}",
                E::RESOURCE,
                previous.value(),
                ticket.value()
            );
        }
        self.dispatch(StoreAction::LoadStarted {
            ticket,
            params: params.clone(),
        });
        LoadRequest { ticket, params }
    }

    /// Completes a load. Returns `false` when `ticket` is stale and the
    /// result was discarded.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: ServiceResult<Page<E>>) -> bool {
        if !self.state.is_pending(ticket) {
            debug!(
                "event=store_load module=store status=discarded resource={} ticket={}",
                E::RESOURCE,
                ticket.value()
            );
            return false;
        }

        match result {
            Ok(page) => {
                debug!(
                    "event=store_load module=store status=ok resource={} ticket={} total={}",
                    E::RESOURCE,
                    ticket.value(),
                    page.total_records
                );
                self.dispatch(StoreAction::LoadSucceeded { ticket, page });
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=error resource={} ticket={} error={}",
                    E::RESOURCE,
                    ticket.value(),
                    err
                );
                self.dispatch(StoreAction::LoadFailed {
                    ticket,
                    message: err.message(),
                });
            }
        }
        true
    }

    /// Merges `patch` over the remembered parameters and fetches.
    pub fn load(&mut self, patch: &SearchPatch) -> &StoreState<E> {
        let request = self.begin_load(patch);
        let result = self.service.list(&request.params);
        self.finish_load(request.ticket, result);
        &self.state
    }

    /// Re-fetches with the remembered parameters unchanged.
    pub fn reload(&mut self) -> &StoreState<E> {
        self.load(&SearchPatch::new())
    }

    pub fn search(&mut self, keyword: &str) -> &StoreState<E> {
        self.load(&SearchPatch::new().keyword(keyword).first_page())
    }

    /// `None` removes the status filter.
    pub fn filter_by_status(&mut self, flag: Option<bool>) -> &StoreState<E> {
        self.load(&SearchPatch::new().is_active(flag).first_page())
    }

    /// Sorts server-side, keeping the current page.
    pub fn sort(&mut self, column: &str, direction: SortDirection) -> &StoreState<E> {
        self.load(&SearchPatch::new().sort(column, direction))
    }

    /// No-op unless `page` lies within `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: u32) -> &StoreState<E> {
        if page < 1 || page > self.state.total_pages() {
            debug!(
                "event=store_page module=store status=ignored resource={} page={} total_pages={}",
                E::RESOURCE,
                page,
                self.state.total_pages()
            );
            return &self.state;
        }
        self.load(&SearchPatch::new().page(page))
    }

    pub fn set_page_size(&mut self, page_size: u32) -> &StoreState<E> {
        self.load(&SearchPatch::new().page_size(page_size).first_page())
    }

    pub fn add_record(&mut self, record: E) -> &StoreState<E> {
        self.dispatch(StoreAction::RecordAdded(record))
    }

    pub fn update_record(&mut self, record: E) -> &StoreState<E> {
        self.dispatch(StoreAction::RecordUpdated(record))
    }

    pub fn remove_record(&mut self, key: &str) -> &StoreState<E> {
        self.dispatch(StoreAction::RecordRemoved(key.to_string()))
    }

    pub fn raise_error(&mut self, message: impl Into<String>) -> &StoreState<E> {
        self.dispatch(StoreAction::ErrorRaised(message.into()))
    }

    pub fn clear_error(&mut self) -> &StoreState<E> {
        self.dispatch(StoreAction::ErrorCleared)
    }

    /// Drops cached records and parameters; pending loads become stale.
    pub fn reset(&mut self) -> &StoreState<E> {
        let defaults = self.defaults.clone();
        self.dispatch(StoreAction::Reset(defaults))
    }
}
