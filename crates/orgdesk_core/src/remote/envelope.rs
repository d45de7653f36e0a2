//! Wire envelope `{code, message, data}` and list payload shapes.

use crate::model::query::{Page, SortDirection};
use serde::{Deserialize, Serialize};

pub const CODE_OK: u16 = 200;
pub const CODE_NOT_FOUND: u16 = 404;

/// Response envelope wrapping every backend payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: CODE_OK,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn failure(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == CODE_OK
    }
}

/// List payload inside `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData<T> {
    pub items: Vec<T>,
    pub total_records: usize,
    #[serde(default)]
    pub start_index: Option<usize>,
    #[serde(default)]
    pub end_index: Option<usize>,
    #[serde(default)]
    pub sort_column: Option<String>,
    #[serde(default)]
    pub sort_direction: Option<SortDirection>,
}

impl<T> PageData<T> {
    /// Converts to an in-process page; missing bounds are derived from the
    /// item count.
    pub fn into_page(self) -> Page<T> {
        let start_index = self.start_index.unwrap_or(0);
        let end_index = self
            .end_index
            .unwrap_or(start_index + self.items.len());
        Page {
            items: self.items,
            total_records: self.total_records,
            start_index,
            end_index,
            sort_column: self.sort_column,
            sort_direction: self.sort_direction.unwrap_or_default(),
        }
    }
}

impl<T: Clone> From<&Page<T>> for PageData<T> {
    fn from(page: &Page<T>) -> Self {
        Self {
            items: page.items.clone(),
            total_records: page.total_records,
            start_index: Some(page.start_index),
            end_index: Some(page.end_index),
            sort_column: page.sort_column.clone(),
            sort_direction: Some(page.sort_direction),
        }
    }
}
