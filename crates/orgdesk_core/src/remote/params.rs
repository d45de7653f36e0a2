//! Query-string encoding of `SearchParams`.

use crate::model::query::SearchParams;
use serde::{Deserialize, Serialize};

/// Page index origin used by a backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageBase {
    #[default]
    Zero,
    One,
}

impl PageBase {
    /// Converts a 1-based in-process page to the wire index.
    pub fn to_wire(self, page: u32) -> u32 {
        match self {
            Self::Zero => page.saturating_sub(1),
            Self::One => page.max(1),
        }
    }

    /// Converts a wire page index back to the 1-based in-process page.
    pub fn from_wire(self, page: u32) -> u32 {
        match self {
            Self::Zero => page.saturating_add(1),
            Self::One => page.max(1),
        }
    }
}

/// Encodes populated parameters as ordered query pairs.
///
/// Range bounds become `{field}From` / `{field}To` in camel case; equality
/// filters keep the record field name.
pub fn encode_search_params(params: &SearchParams, base: PageBase) -> Vec<(String, String)> {
    let mut query = Vec::new();

    if let Some(keyword) = params.keyword.as_deref() {
        query.push(("keyword".to_string(), keyword.to_string()));
    }
    if let Some(flag) = params.is_active {
        query.push(("isActive".to_string(), flag.to_string()));
    }
    for (field, value) in &params.equals {
        query.push((field.clone(), value.clone()));
    }
    for (field, range) in &params.ranges {
        let name = camel_case(field);
        if let Some(min) = &range.min {
            query.push((format!("{name}From"), min.to_wire_string()));
        }
        if let Some(max) = &range.max {
            query.push((format!("{name}To"), max.to_wire_string()));
        }
    }

    query.push(("page".to_string(), base.to_wire(params.page).to_string()));
    query.push(("pageSize".to_string(), params.page_size.to_string()));
    if let Some(column) = params.sort_column.as_deref() {
        query.push(("sortColumn".to_string(), column.to_string()));
        query.push((
            "sortDirection".to_string(),
            params.sort_direction.as_str().to_string(),
        ));
    }

    query
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{camel_case, encode_search_params, PageBase};
    use crate::model::query::{RangeFilter, SearchParams, SearchPatch, SortDirection};
    use chrono::NaiveDate;

    fn value_of<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn page_base_converts_both_ways() {
        assert_eq!(PageBase::Zero.to_wire(1), 0);
        assert_eq!(PageBase::Zero.from_wire(0), 1);
        assert_eq!(PageBase::One.to_wire(3), 3);
        assert_eq!(PageBase::One.from_wire(3), 3);
    }

    #[test]
    fn encodes_filters_paging_and_sort() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        let params = SearchParams::default().merged(
            &SearchPatch::new()
                .keyword("java")
                .is_active(Some(true))
                .equals("course_code", "JAVA101")
                .range("start_date", RangeFilter::at_least(start))
                .page(2)
                .page_size(25)
                .sort("start_date", SortDirection::Desc),
        );

        let query = encode_search_params(&params, PageBase::Zero);
        assert_eq!(value_of(&query, "keyword"), Some("java"));
        assert_eq!(value_of(&query, "isActive"), Some("true"));
        assert_eq!(value_of(&query, "course_code"), Some("JAVA101"));
        assert_eq!(value_of(&query, "startDateFrom"), Some("2024-03-01"));
        assert_eq!(value_of(&query, "startDateTo"), None);
        assert_eq!(value_of(&query, "page"), Some("1"));
        assert_eq!(value_of(&query, "pageSize"), Some("25"));
        assert_eq!(value_of(&query, "sortDirection"), Some("desc"));
    }

    #[test]
    fn unset_filters_are_omitted() {
        let query = encode_search_params(&SearchParams::default(), PageBase::One);
        let names = query.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["page", "pageSize"]);
        assert_eq!(value_of(&query, "page"), Some("1"));
    }

    #[test]
    fn camel_case_joins_snake_segments() {
        assert_eq!(camel_case("hire_date"), "hireDate");
        assert_eq!(camel_case("level"), "level");
    }
}
