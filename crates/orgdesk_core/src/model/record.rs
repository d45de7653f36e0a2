//! Generic record contract shared by every entity kind.
//!
//! # Responsibility
//! - Describe what the query pipeline, services and stores need from a
//!   record: a stable key, named typed fields and a DTO lifecycle.
//! - Own audit stamping so every backend assigns it the same way.
//!
//! # Invariants
//! - `key()` is unique within one entity kind and never changes on update.
//! - On create `create_time == update_time` and both audit users are set.

use crate::model::field::FieldValue;
use crate::model::validation::ValidationError;
use chrono::{DateTime, SubsecRound, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Audit columns carried by every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    pub create_user: String,
    pub update_user: String,
}

impl AuditInfo {
    /// Stamps a freshly created record.
    pub fn created(actor: &str, now: DateTime<Utc>) -> Self {
        let now = now.trunc_subsecs(3);
        Self {
            create_time: now,
            update_time: now,
            create_user: actor.to_string(),
            update_user: actor.to_string(),
        }
    }

    /// Refreshes the update columns after a successful edit.
    pub fn touch(&mut self, actor: &str, now: DateTime<Utc>) {
        self.update_time = now.trunc_subsecs(3);
        self.update_user = actor.to_string();
    }
}

/// DTOs that can flip the active flag for inline status toggles.
pub trait StatusUpdate {
    fn set_active(&mut self, active: bool);
}

/// A domain record addressable by key and inspectable by field name.
pub trait Entity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Payload accepted on create; carries identity fields.
    type Create: Clone + Debug + Serialize + Send + Sync;
    /// Payload accepted on update; identity fields are excluded.
    type Update: Clone + Debug + Serialize + StatusUpdate + Send + Sync;

    /// Collection path segment on the HTTP boundary, e.g. `competencies`.
    const RESOURCE: &'static str;
    /// Name of the key field as exposed through `field`.
    const KEY_FIELD: &'static str;
    /// Text fields tested by the keyword predicate.
    const SEARCH_FIELDS: &'static [&'static str];

    fn key(&self) -> &str;

    /// Reads one named field. Unknown or unset fields return `None`.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Human-readable label used by reference lookups.
    fn label(&self) -> String;

    fn is_active(&self) -> bool;

    fn audit(&self) -> &AuditInfo;

    fn audit_mut(&mut self) -> &mut AuditInfo;

    fn validate_create(dto: &Self::Create) -> Result<(), ValidationError>;

    fn validate_update(dto: &Self::Update) -> Result<(), ValidationError>;

    /// Builds a record from a create payload and pre-computed audit columns.
    fn from_create(dto: Self::Create, audit: AuditInfo) -> Self;

    /// Applies an update payload; audit columns are handled by the caller.
    fn apply_update(&mut self, dto: Self::Update);

    /// Projects the current record into an update payload.
    fn to_update(&self) -> Self::Update;
}

/// Reads the audit columns through the shared field names.
pub(crate) fn audit_field(audit: &AuditInfo, name: &str) -> Option<FieldValue> {
    match name {
        "create_time" => Some(FieldValue::Timestamp(audit.create_time)),
        "update_time" => Some(FieldValue::Timestamp(audit.update_time)),
        "create_user" => Some(FieldValue::text(audit.create_user.as_str())),
        "update_user" => Some(FieldValue::text(audit.update_user.as_str())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::AuditInfo;
    use chrono::{Duration, Utc};

    #[test]
    fn created_audit_has_identical_timestamps_and_users() {
        let audit = AuditInfo::created("admin", Utc::now());
        assert_eq!(audit.create_time, audit.update_time);
        assert_eq!(audit.create_user, "admin");
        assert_eq!(audit.update_user, "admin");
    }

    #[test]
    fn touch_only_moves_update_columns() {
        let created_at = Utc::now();
        let mut audit = AuditInfo::created("admin", created_at);
        audit.touch("editor", created_at + Duration::minutes(5));
        assert_eq!(audit.create_user, "admin");
        assert_eq!(audit.update_user, "editor");
        assert!(audit.update_time > audit.create_time);
    }
}
