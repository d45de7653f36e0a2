//! Sort and slice stages of the mock query pipeline.

use crate::model::query::{Page, SearchParams, SortDirection, FIRST_PAGE};
use crate::model::record::Entity;
use crate::query::filter::matches;
use std::cmp::Ordering;

/// Filters, sorts and slices `records` for `params`.
pub fn run_query<E: Entity>(records: &[E], params: &SearchParams) -> Page<E> {
    let mut matched = records
        .iter()
        .filter(|record| matches(*record, params))
        .cloned()
        .collect::<Vec<_>>();

    if let Some(column) = params.sort_column.as_deref() {
        sort_records(&mut matched, column, params.sort_direction);
    }

    let mut page = paginate(matched, params.page, params.page_size);
    page.sort_column = params.sort_column.clone();
    page.sort_direction = params.sort_direction;
    page
}

/// Stable sort by one field. Pairs with a missing or incomparable value
/// compare equal, so their relative order is preserved.
pub fn sort_records<E: Entity>(records: &mut [E], column: &str, direction: SortDirection) {
    records.sort_by(|left, right| {
        let ordering = match (left.field(column), right.field(column)) {
            (Some(a), Some(b)) => a.compare(&b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Slices `[ (page-1)*page_size, page*page_size )` out of the filtered set.
pub fn paginate<E>(records: Vec<E>, page: u32, page_size: u32) -> Page<E> {
    let total_records = records.len();
    let page = page.max(FIRST_PAGE) as usize;
    let page_size = page_size.max(1) as usize;

    let start_index = (page - 1).saturating_mul(page_size).min(total_records);
    let end_index = start_index.saturating_add(page_size).min(total_records);
    let items = records
        .into_iter()
        .skip(start_index)
        .take(end_index - start_index)
        .collect();

    Page {
        items,
        total_records,
        start_index,
        end_index,
        sort_column: None,
        sort_direction: SortDirection::Asc,
    }
}

#[cfg(test)]
mod tests {
    use super::paginate;

    #[test]
    fn slice_length_follows_remaining_records() {
        let records = (0..23).collect::<Vec<u32>>();
        for page_size in [1u32, 5, 10, 23, 30] {
            for page in 1u32..=6 {
                let result = paginate(records.clone(), page, page_size);
                let skipped = ((page - 1) * page_size) as usize;
                let expected = (page_size as usize).min(23usize.saturating_sub(skipped));
                assert_eq!(result.items.len(), expected, "page={page} size={page_size}");
                assert_eq!(result.total_records, 23);
            }
        }
    }

    #[test]
    fn page_bounds_report_offsets() {
        let page = paginate((0..12).collect::<Vec<u32>>(), 2, 5);
        assert_eq!(page.items, vec![5, 6, 7, 8, 9]);
        assert_eq!(page.start_index, 5);
        assert_eq!(page.end_index, 10);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = paginate((0..3).collect::<Vec<u32>>(), 4, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.start_index, 3);
        assert_eq!(page.end_index, 3);
    }
}
