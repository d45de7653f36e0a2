//! Record predicates built from `SearchParams`.

use crate::model::field::FieldValue;
use crate::model::query::{RangeFilter, SearchParams};
use crate::model::record::Entity;
use std::cmp::Ordering;

/// Returns whether `record` satisfies every populated predicate.
pub fn matches<E: Entity>(record: &E, params: &SearchParams) -> bool {
    if let Some(keyword) = params.keyword.as_deref() {
        if !matches_keyword(record, keyword) {
            return false;
        }
    }

    if let Some(flag) = params.is_active {
        if record.is_active() != flag {
            return false;
        }
    }

    let equals_ok = params.equals.iter().all(|(field, raw)| {
        record
            .field(field)
            .map(|value| value.matches_raw(raw))
            .unwrap_or(false)
    });
    if !equals_ok {
        return false;
    }

    params
        .ranges
        .iter()
        .all(|(field, range)| matches_range(record.field(field).as_ref(), range))
}

/// Case-insensitive substring test across `E::SEARCH_FIELDS`.
pub fn matches_keyword<E: Entity>(record: &E, keyword: &str) -> bool {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    E::SEARCH_FIELDS.iter().any(|name| {
        record
            .field(name)
            .as_ref()
            .and_then(FieldValue::as_text)
            .map(|text| text.to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}

fn matches_range(value: Option<&FieldValue>, range: &RangeFilter) -> bool {
    if range.is_open() {
        return true;
    }
    let Some(value) = value else {
        return false;
    };

    let above_min = match &range.min {
        Some(min) => matches!(
            value.compare(min),
            Some(Ordering::Greater) | Some(Ordering::Equal)
        ),
        None => true,
    };
    let below_max = match &range.max {
        Some(max) => matches!(
            value.compare(max),
            Some(Ordering::Less) | Some(Ordering::Equal)
        ),
        None => true,
    };
    above_min && below_max
}

#[cfg(test)]
mod tests {
    use super::{matches, matches_keyword};
    use crate::model::department::Department;
    use crate::model::query::{RangeFilter, SearchParams, SearchPatch};
    use crate::model::record::AuditInfo;
    use chrono::{TimeZone, Utc};

    fn department(code: &str, name: &str, parent: Option<&str>, active: bool) -> Department {
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).single().expect("valid timestamp");
        Department {
            department_code: code.to_string(),
            department_name: name.to_string(),
            description: format!("{name} department"),
            parent_code: parent.map(str::to_string),
            is_active: active,
            audit: AuditInfo::created("seed", created),
        }
    }

    #[test]
    fn keyword_matches_any_search_field_ignoring_case() {
        let record = department("ENG", "Engineering", None, true);
        assert!(matches_keyword(&record, "eng"));
        assert!(matches_keyword(&record, "NEERING"));
        assert!(matches_keyword(&record, "department"));
        assert!(!matches_keyword(&record, "finance"));
    }

    #[test]
    fn equality_normalizes_stringified_booleans() {
        let record = department("ENG", "Engineering", None, false);
        let params = SearchParams::default().merged(&SearchPatch::new().equals("is_active", "false"));
        assert!(matches(&record, &params));
        let params = SearchParams::default().merged(&SearchPatch::new().equals("is_active", "true"));
        assert!(!matches(&record, &params));
    }

    #[test]
    fn equality_on_absent_field_never_matches() {
        let record = department("ENG", "Engineering", None, true);
        let params = SearchParams::default().merged(&SearchPatch::new().equals("parent_code", "HQ"));
        assert!(!matches(&record, &params));
    }

    #[test]
    fn range_bounds_are_inclusive_and_optional() {
        let record = department("ENG", "Engineering", Some("HQ"), true);
        let created = record.audit.create_time;

        let exact = SearchParams::default().merged(
            &SearchPatch::new().range("create_time", RangeFilter::between(created, created)),
        );
        assert!(matches(&record, &exact));

        let open_max = SearchParams::default().merged(
            &SearchPatch::new().range("create_time", RangeFilter::at_least(created)),
        );
        assert!(matches(&record, &open_max));

        let wrong_kind = SearchParams::default().merged(
            &SearchPatch::new().range("create_time", RangeFilter::at_least("2024-01-01")),
        );
        assert!(!matches(&record, &wrong_kind));
    }
}
