//! Pure state transitions for `StoreState`.

use crate::model::query::{Page, SearchParams};
use crate::model::record::Entity;
use crate::store::state::StoreState;
use crate::store::list_store::{LoadRequest, LoadTicket};

/// Every change a store can undergo.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction<E> {
    /// A fetch with `params` was issued under `ticket`.
    LoadStarted {
        ticket: LoadTicket,
        params: SearchParams,
    },
    LoadSucceeded {
        ticket: LoadTicket,
        page: Page<E>,
    },
    LoadFailed {
        ticket: LoadTicket,
        message: String,
    },
    /// Local prepend after a successful create.
    RecordAdded(E),
    /// Local in-place replace after a successful update.
    RecordUpdated(E),
    /// Local removal by key after a successful delete.
    RecordRemoved(String),
    /// A list action failed outside a load.
    ErrorRaised(String),
    ErrorCleared,
    /// Back to the initial state built from these parameters.
    Reset(SearchParams),
}

/// Applies `action` to `state`. Returns whether anything changed.
pub fn reduce<E: Entity>(state: &mut StoreState<E>, action: StoreAction<E>) -> bool {
    match action {
        StoreAction::LoadStarted { ticket, params } => {
            state.loading = true;
            state.pending = Some(LoadRequest { ticket, params });
            true
        }
        StoreAction::LoadSucceeded { ticket, page } => {
            if !state.is_pending(ticket) {
                return false;
            }
            let Some(request) = state.pending.take() else {
                return false;
            };
            state.records = page.items;
            state.total = page.total_records;
            state.current_page = request.params.page;
            state.page_size = request.params.page_size;
            state.params = request.params;
            state.loading = false;
            state.error = None;
            true
        }
        StoreAction::LoadFailed { ticket, message } => {
            if !state.is_pending(ticket) {
                return false;
            }
            // The remembered parameters stay those of the last good load.
            state.error = Some(message);
            state.loading = false;
            state.pending = None;
            true
        }
        StoreAction::RecordAdded(record) => {
            state.records.insert(0, record);
            state.total += 1;
            true
        }
        StoreAction::RecordUpdated(record) => {
            match state
                .records
                .iter_mut()
                .find(|existing| existing.key() == record.key())
            {
                Some(slot) => {
                    *slot = record;
                    true
                }
                None => false,
            }
        }
        StoreAction::RecordRemoved(key) => {
            state.records.retain(|record| record.key() != key);
            // Decrements even when `key` was not on the cached page.
            state.total = state.total.saturating_sub(1);
            true
        }
        StoreAction::ErrorRaised(message) => {
            state.error = Some(message);
            true
        }
        StoreAction::ErrorCleared => state.error.take().is_some(),
        StoreAction::Reset(params) => {
            *state = StoreState::new(params);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{reduce, StoreAction};
    use crate::model::department::Department;
    use crate::model::query::{Page, SearchParams};
    use crate::model::record::AuditInfo;
    use crate::store::list_store::LoadTicket;
    use crate::store::state::StoreState;
    use chrono::Utc;

    fn department(code: &str) -> Department {
        Department {
            department_code: code.to_string(),
            department_name: format!("Dept {code}"),
            description: String::new(),
            parent_code: None,
            is_active: true,
            audit: AuditInfo::created("seed", Utc::now()),
        }
    }

    fn page_of(codes: &[&str], total: usize) -> Page<Department> {
        let mut page = Page::empty();
        page.items = codes.iter().map(|code| department(code)).collect();
        page.total_records = total;
        page.end_index = codes.len();
        page
    }

    fn started(state: &mut StoreState<Department>, ticket: u64) -> LoadTicket {
        let ticket = LoadTicket::new(ticket);
        reduce(
            state,
            StoreAction::LoadStarted {
                ticket,
                params: SearchParams::default(),
            },
        );
        ticket
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = StoreState::new(SearchParams::default());
        let first = started(&mut state, 1);
        let second = started(&mut state, 2);

        let applied = reduce(
            &mut state,
            StoreAction::LoadSucceeded {
                ticket: second,
                page: page_of(&["NEW"], 1),
            },
        );
        assert!(applied);

        let applied = reduce(
            &mut state,
            StoreAction::LoadSucceeded {
                ticket: first,
                page: page_of(&["OLD"], 1),
            },
        );
        assert!(!applied);
        assert_eq!(state.records[0].department_code, "NEW");
        assert!(!state.loading);
    }

    #[test]
    fn failure_keeps_previous_records_visible() {
        let mut state = StoreState::new(SearchParams::default());
        let ticket = started(&mut state, 1);
        reduce(
            &mut state,
            StoreAction::LoadSucceeded {
                ticket,
                page: page_of(&["A", "B"], 2),
            },
        );

        let ticket = started(&mut state, 2);
        reduce(
            &mut state,
            StoreAction::LoadFailed {
                ticket,
                message: "backend down".to_string(),
            },
        );
        assert_eq!(state.records.len(), 2);
        assert_eq!(state.error.as_deref(), Some("backend down"));
        assert!(!state.loading);
    }

    #[test]
    fn only_successful_loads_commit_params() {
        let mut state = StoreState::new(SearchParams::default());
        let mut next = SearchParams::default();
        next.page = 2;

        let ticket = LoadTicket::new(1);
        reduce(
            &mut state,
            StoreAction::LoadStarted {
                ticket,
                params: next.clone(),
            },
        );
        assert_eq!(state.params.page, 1);
        assert_eq!(state.pending_params(), Some(&next));

        reduce(
            &mut state,
            StoreAction::LoadFailed {
                ticket,
                message: "timeout".to_string(),
            },
        );
        assert_eq!(state.params, SearchParams::default());
        assert_eq!(state.current_page, 1);
        assert!(state.pending_params().is_none());

        let ticket = LoadTicket::new(2);
        reduce(
            &mut state,
            StoreAction::LoadStarted {
                ticket,
                params: next.clone(),
            },
        );
        reduce(
            &mut state,
            StoreAction::LoadSucceeded {
                ticket,
                page: page_of(&["B"], 11),
            },
        );
        assert_eq!(state.params, next);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn update_of_uncached_record_changes_nothing() {
        let mut state = StoreState::new(SearchParams::default());
        state.records.push(department("A"));
        assert!(!reduce(&mut state, StoreAction::RecordUpdated(department("Z"))));
    }

    #[test]
    fn reset_drops_pending_ticket() {
        let mut state = StoreState::new(SearchParams::default());
        let ticket = started(&mut state, 1);
        reduce(&mut state, StoreAction::Reset(SearchParams::default()));
        assert!(state.pending_ticket().is_none());
        assert!(!reduce(
            &mut state,
            StoreAction::LoadSucceeded {
                ticket,
                page: page_of(&["LATE"], 1),
            },
        ));
        assert!(state.records.is_empty());
    }
}
