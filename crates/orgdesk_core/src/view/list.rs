//! List-screen actions: confirmed deletes, status toggles, header sorting.

use crate::model::query::SortDirection;
use crate::model::record::{Entity, StatusUpdate};
use crate::service::RecordService;
use crate::store::{Store, StoreState};
use log::{info, warn};
use std::collections::BTreeSet;

/// Blocking yes/no prompt shown before destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// The user declined the confirmation prompt.
    Cancelled,
    NotFound,
    /// The service failed; the message is in `StoreState::error`.
    Failed,
}

/// Asks for confirmation, deletes through the service, then drops the
/// record from the cached page.
pub fn delete_with_confirmation<E, S>(
    store: &mut Store<E, S>,
    confirm: &dyn Confirm,
    key: &str,
) -> ActionOutcome
where
    E: Entity,
    S: RecordService<E>,
{
    if !confirm.confirm(&format!("Delete {} `{key}`?", E::RESOURCE)) {
        return ActionOutcome::Cancelled;
    }

    match store.service().delete(key) {
        Ok(true) => {
            store.remove_record(key);
            info!(
                "event=list_delete module=view status=ok resource={} key={}",
                E::RESOURCE,
                key
            );
            ActionOutcome::Completed
        }
        Ok(false) => ActionOutcome::NotFound,
        Err(err) => {
            warn!(
                "event=list_delete module=view status=error resource={} key={} error={}",
                E::RESOURCE,
                key,
                err
            );
            store.raise_error(err.message());
            ActionOutcome::Failed
        }
    }
}

/// Deletes every key after one confirmation.
///
/// Repeated keys count once. When the backend reports a partial failure
/// the page is reloaded, since the local patch cannot know which keys
/// survived.
pub fn bulk_delete_with_confirmation<E, S>(
    store: &mut Store<E, S>,
    confirm: &dyn Confirm,
    keys: &[String],
) -> ActionOutcome
where
    E: Entity,
    S: RecordService<E>,
{
    let distinct = keys.iter().collect::<BTreeSet<_>>();
    if distinct.is_empty() {
        return ActionOutcome::Cancelled;
    }
    if !confirm.confirm(&format!(
        "Delete {} {} records?",
        distinct.len(),
        E::RESOURCE
    )) {
        return ActionOutcome::Cancelled;
    }

    match store.service().bulk_delete(keys) {
        Ok(true) => {
            for key in &distinct {
                store.remove_record(key);
            }
            info!(
                "event=list_bulk_delete module=view status=ok resource={} count={}",
                E::RESOURCE,
                distinct.len()
            );
            ActionOutcome::Completed
        }
        Ok(false) => {
            store.reload();
            ActionOutcome::NotFound
        }
        Err(err) => {
            store.raise_error(err.message());
            ActionOutcome::Failed
        }
    }
}

/// Flips `is_active` through the service and patches the cached record.
pub fn toggle_status<E, S>(store: &mut Store<E, S>, key: &str) -> ActionOutcome
where
    E: Entity,
    S: RecordService<E>,
{
    let cached = store
        .state()
        .records
        .iter()
        .find(|record| record.key() == key)
        .cloned();
    let current = match cached {
        Some(record) => record,
        None => match store.service().get_by_key(key) {
            Ok(Some(record)) => record,
            Ok(None) => return ActionOutcome::NotFound,
            Err(err) => {
                store.raise_error(err.message());
                return ActionOutcome::Failed;
            }
        },
    };

    let mut dto = current.to_update();
    dto.set_active(!current.is_active());
    match store.service().update(key, dto) {
        Ok(Some(updated)) => {
            store.update_record(updated);
            ActionOutcome::Completed
        }
        Ok(None) => ActionOutcome::NotFound,
        Err(err) => {
            store.raise_error(err.message());
            ActionOutcome::Failed
        }
    }
}

/// Direction after clicking `clicked`: the same column flips, any other
/// column starts ascending.
pub fn next_sort(
    current_column: Option<&str>,
    current_direction: SortDirection,
    clicked: &str,
) -> SortDirection {
    if current_column == Some(clicked) {
        current_direction.reversed()
    } else {
        SortDirection::Asc
    }
}

/// Column header click handler.
pub fn sort_by_header<'a, E, S>(store: &'a mut Store<E, S>, column: &str) -> &'a StoreState<E>
where
    E: Entity,
    S: RecordService<E>,
{
    let params = &store.state().params;
    let direction = next_sort(params.sort_column.as_deref(), params.sort_direction, column);
    store.sort(column, direction)
}

#[cfg(test)]
mod tests {
    use super::next_sort;
    use crate::model::query::SortDirection;

    #[test]
    fn same_column_flips_and_new_column_starts_ascending() {
        assert_eq!(
            next_sort(Some("level"), SortDirection::Asc, "level"),
            SortDirection::Desc
        );
        assert_eq!(
            next_sort(Some("level"), SortDirection::Desc, "level"),
            SortDirection::Asc
        );
        assert_eq!(
            next_sort(Some("level"), SortDirection::Desc, "job_role_name"),
            SortDirection::Asc
        );
        assert_eq!(next_sort(None, SortDirection::Desc, "level"), SortDirection::Asc);
    }
}
