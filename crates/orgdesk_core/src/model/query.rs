//! Search parameters, partial parameter patches and result pages.
//!
//! # Responsibility
//! - Hold the remembered filter/sort/paging state of one list.
//! - Merge partial changes so later filters compose with earlier ones.
//!
//! # Invariants
//! - `page` is 1-based in-process; wire conversion happens in `remote`.
//! - `page_size` is never zero after a merge.

use crate::model::field::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const FIRST_PAGE: u32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Inclusive bounds; either side may be open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeFilter {
    pub min: Option<FieldValue>,
    pub max: Option<FieldValue>,
}

impl RangeFilter {
    pub fn between(min: impl Into<FieldValue>, max: impl Into<FieldValue>) -> Self {
        Self {
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }

    pub fn at_least(min: impl Into<FieldValue>) -> Self {
        Self {
            min: Some(min.into()),
            max: None,
        }
    }

    pub fn at_most(max: impl Into<FieldValue>) -> Self {
        Self {
            min: None,
            max: Some(max.into()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Remembered list query for one entity kind.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// Case-insensitive substring across the entity's search fields.
    pub keyword: Option<String>,
    pub is_active: Option<bool>,
    /// Field name -> raw value, matched with strict equality.
    pub equals: BTreeMap<String, String>,
    pub ranges: BTreeMap<String, RangeFilter>,
    pub page: u32,
    pub page_size: u32,
    pub sort_column: Option<String>,
    pub sort_direction: SortDirection,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl SearchParams {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            keyword: None,
            is_active: None,
            equals: BTreeMap::new(),
            ranges: BTreeMap::new(),
            page: FIRST_PAGE,
            page_size: page_size.max(1),
            sort_column: None,
            sort_direction: SortDirection::Asc,
        }
    }

    /// Returns a copy with `patch` applied over the current values.
    pub fn merged(&self, patch: &SearchPatch) -> Self {
        let mut next = self.clone();
        next.merge(patch);
        next
    }

    pub fn merge(&mut self, patch: &SearchPatch) {
        if let Some(keyword) = &patch.keyword {
            self.keyword = keyword
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        for (field, value) in &patch.equals {
            match value {
                Some(value) => {
                    self.equals.insert(field.clone(), value.clone());
                }
                None => {
                    self.equals.remove(field);
                }
            }
        }
        for (field, range) in &patch.ranges {
            match range {
                Some(range) if !range.is_open() => {
                    self.ranges.insert(field.clone(), range.clone());
                }
                _ => {
                    self.ranges.remove(field);
                }
            }
        }
        if let Some(page) = patch.page {
            self.page = page.max(FIRST_PAGE);
        }
        if let Some(page_size) = patch.page_size {
            self.page_size = page_size.max(1);
        }
        if let Some(sort_column) = &patch.sort_column {
            self.sort_column = sort_column.clone();
        }
        if let Some(sort_direction) = patch.sort_direction {
            self.sort_direction = sort_direction;
        }
    }
}

/// Partial change to `SearchParams`.
///
/// Outer `None` keeps the remembered value; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPatch {
    pub keyword: Option<Option<String>>,
    pub is_active: Option<Option<bool>>,
    pub equals: Vec<(String, Option<String>)>,
    pub ranges: Vec<(String, Option<RangeFilter>)>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_column: Option<Option<String>>,
    pub sort_direction: Option<SortDirection>,
}

impl SearchPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(Some(keyword.into()));
        self
    }

    pub fn clear_keyword(mut self) -> Self {
        self.keyword = Some(None);
        self
    }

    pub fn is_active(mut self, flag: Option<bool>) -> Self {
        self.is_active = Some(flag);
        self
    }

    pub fn equals(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.equals.push((field.into(), Some(value.into())));
        self
    }

    pub fn clear_equals(mut self, field: impl Into<String>) -> Self {
        self.equals.push((field.into(), None));
        self
    }

    pub fn range(mut self, field: impl Into<String>, range: RangeFilter) -> Self {
        self.ranges.push((field.into(), Some(range)));
        self
    }

    pub fn clear_range(mut self, field: impl Into<String>) -> Self {
        self.ranges.push((field.into(), None));
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn first_page(self) -> Self {
        self.page(FIRST_PAGE)
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn sort(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_column = Some(Some(column.into()));
        self.sort_direction = Some(direction);
        self
    }

    pub fn clear_sort(mut self) -> Self {
        self.sort_column = Some(None);
        self
    }
}

/// One page of records plus the filtered (not sliced) total.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<E> {
    pub items: Vec<E>,
    pub total_records: usize,
    /// Zero-based offset of the first item within the filtered set.
    pub start_index: usize,
    /// Exclusive end offset within the filtered set.
    pub end_index: usize,
    pub sort_column: Option<String>,
    pub sort_direction: SortDirection,
}

impl<E> Page<E> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_records: 0,
            start_index: 0,
            end_index: 0,
            sort_column: None,
            sort_direction: SortDirection::Asc,
        }
    }
}

/// `ceil(total / page_size)`; zero when there is nothing to show.
pub fn total_pages(total: usize, page_size: u32) -> u32 {
    let page_size = page_size.max(1) as usize;
    let pages = total.div_ceil(page_size);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{total_pages, RangeFilter, SearchParams, SearchPatch, SortDirection};

    #[test]
    fn partial_patches_compose_with_remembered_filters() {
        let base = SearchParams::default().merged(&SearchPatch::new().keyword("dev"));
        let next = base.merged(&SearchPatch::new().is_active(Some(true)).first_page());
        assert_eq!(next.keyword.as_deref(), Some("dev"));
        assert_eq!(next.is_active, Some(true));
        assert_eq!(next.page, 1);
    }

    #[test]
    fn clearing_values_removes_them() {
        let base = SearchParams::default().merged(
            &SearchPatch::new()
                .is_active(Some(false))
                .equals("department_code", "ENG")
                .range("level", RangeFilter::at_least(2u32)),
        );
        let cleared = base.merged(
            &SearchPatch::new()
                .is_active(None)
                .clear_equals("department_code")
                .clear_range("level"),
        );
        assert_eq!(cleared.is_active, None);
        assert!(cleared.equals.is_empty());
        assert!(cleared.ranges.is_empty());
    }

    #[test]
    fn blank_keyword_is_treated_as_absent() {
        let params = SearchParams::default().merged(&SearchPatch::new().keyword("   "));
        assert_eq!(params.keyword, None);
    }

    #[test]
    fn zero_page_and_size_are_clamped() {
        let params = SearchParams::default().merged(&SearchPatch::new().page(0).page_size(0));
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn sort_direction_parses_and_reverses() {
        assert_eq!(SortDirection::parse("DESC"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::Asc.reversed(), SortDirection::Desc);
    }
}
