//! Store state snapshot and derived pagination flags.

use crate::model::query::{total_pages, SearchParams};
use crate::store::list_store::{LoadRequest, LoadTicket};

#[derive(Debug, Clone, PartialEq)]
pub struct StoreState<E> {
    /// Current page, in the order the service returned it.
    pub records: Vec<E>,
    pub loading: bool,
    pub error: Option<String>,
    pub total: usize,
    /// 1-based.
    pub current_page: u32,
    pub page_size: u32,
    /// Parameters of the last successful load.
    pub params: SearchParams,
    /// Load whose completion is still awaited; its parameters are committed
    /// to `params` only on success.
    pub(crate) pending: Option<LoadRequest>,
}

impl<E> StoreState<E> {
    pub fn new(params: SearchParams) -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            error: None,
            total: 0,
            current_page: params.page,
            page_size: params.page_size,
            params,
            pending: None,
        }
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.page_size)
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn pending_ticket(&self) -> Option<LoadTicket> {
        self.pending.as_ref().map(|request| request.ticket)
    }

    /// Parameters of the in-flight load, if any.
    pub fn pending_params(&self) -> Option<&SearchParams> {
        self.pending.as_ref().map(|request| &request.params)
    }

    pub(crate) fn is_pending(&self, ticket: LoadTicket) -> bool {
        self.pending_ticket() == Some(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::StoreState;
    use crate::model::query::SearchParams;

    #[test]
    fn pagination_flags_follow_counters() {
        let mut state = StoreState::<u32>::new(SearchParams::with_page_size(10));
        state.total = 25;
        assert_eq!(state.total_pages(), 3);
        assert!(state.has_next_page());
        assert!(!state.has_previous_page());

        state.current_page = 3;
        assert!(!state.has_next_page());
        assert!(state.has_previous_page());
    }

    #[test]
    fn empty_state_has_no_pages() {
        let state = StoreState::<u32>::new(SearchParams::default());
        assert_eq!(state.total_pages(), 0);
        assert!(!state.has_next_page());
        assert!(!state.has_previous_page());
    }
}
