//! Read-only label/value rendering of one record.

use crate::model::query::{SearchParams, SearchPatch};
use crate::model::record::Entity;
use crate::service::{RecordService, ServiceResult};
use crate::view::form::HasForm;
use log::debug;
use std::collections::{BTreeMap, HashMap};

const EMPTY_VALUE: &str = "-";
const REFERENCE_PAGE_SIZE: u32 = 1000;

/// Key -> display label cache built from a reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceLookup {
    labels: HashMap<String, String>,
}

impl ReferenceLookup {
    pub fn from_records<E: Entity>(records: &[E]) -> Self {
        Self {
            labels: records
                .iter()
                .map(|record| (record.key().to_string(), record.label()))
                .collect(),
        }
    }

    /// Loads every active reference record through `service`, page by page
    /// until `total_records` are collected.
    pub fn load<E, S>(service: &S) -> ServiceResult<Self>
    where
        E: Entity,
        S: RecordService<E> + ?Sized,
    {
        Self::load_in_pages(service, REFERENCE_PAGE_SIZE)
    }

    fn load_in_pages<E, S>(service: &S, page_size: u32) -> ServiceResult<Self>
    where
        E: Entity,
        S: RecordService<E> + ?Sized,
    {
        let mut lookup = Self::default();
        let mut fetched = 0usize;
        let mut page_number = 1;
        loop {
            let params = SearchParams::with_page_size(page_size).merged(
                &SearchPatch::new()
                    .is_active(Some(true))
                    .page(page_number),
            );
            let page = service.list(&params)?;
            // An empty page ends the walk even if the backend overstates the total.
            if page.items.is_empty() {
                break;
            }
            fetched += page.items.len();
            lookup.labels.extend(
                page.items
                    .iter()
                    .map(|record| (record.key().to_string(), record.label())),
            );
            if fetched >= page.total_records {
                break;
            }
            page_number += 1;
        }
        debug!(
            "event=reference_load module=view status=ok resource={} count={} pages={}",
            E::RESOURCE,
            lookup.len(),
            page_number
        );
        Ok(lookup)
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Label for `key`, falling back to the key itself.
    pub fn resolve(&self, key: &str) -> String {
        self.label(key)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Reference lookups keyed by resource name (`departments`, `courses`, ...).
pub type Lookups = BTreeMap<&'static str, ReferenceLookup>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

/// Form fields in schema order followed by the audit columns.
pub fn detail_rows<E: HasForm>(record: &E, lookups: &Lookups) -> Vec<DetailRow> {
    let schema = E::form_schema();
    let mut rows = schema
        .fields()
        .iter()
        .map(|field| {
            let raw = record.field(field.name);
            let value = match (raw, field.reference) {
                (None, _) => EMPTY_VALUE.to_string(),
                (Some(value), Some(resource)) => {
                    let key = value.to_string();
                    match lookups.get(resource) {
                        Some(lookup) => lookup.resolve(&key),
                        None => key,
                    }
                }
                (Some(value), None) => value.to_string(),
            };
            DetailRow {
                label: field.label.to_string(),
                value,
            }
        })
        .collect::<Vec<_>>();

    for (name, label) in [
        ("create_time", "Created At"),
        ("create_user", "Created By"),
        ("update_time", "Updated At"),
        ("update_user", "Updated By"),
    ] {
        rows.push(DetailRow {
            label: label.to_string(),
            value: record
                .field(name)
                .map(|value| value.to_string())
                .unwrap_or_else(|| EMPTY_VALUE.to_string()),
        });
    }
    rows
}
