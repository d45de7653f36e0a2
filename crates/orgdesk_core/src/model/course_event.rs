//! Scheduled course event records.
//!
//! # Invariants
//! - `event_id` is a generated UUID string assigned on create.
//! - `end_date` is never earlier than `start_date`.

use crate::model::field::FieldValue;
use crate::model::record::{audit_field, AuditInfo, Entity, StatusUpdate};
use crate::model::validation::{ValidationError, Validator};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEvent {
    pub event_id: String,
    /// Course this event schedules.
    pub course_code: String,
    pub event_name: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: u32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCourseEvent {
    pub course_code: String,
    pub event_name: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: u32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCourseEvent {
    pub course_code: String,
    pub event_name: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: u32,
    pub is_active: bool,
}

impl StatusUpdate for UpdateCourseEvent {
    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Entity for CourseEvent {
    type Create = CreateCourseEvent;
    type Update = UpdateCourseEvent;

    const RESOURCE: &'static str = "course-events";
    const KEY_FIELD: &'static str = "event_id";
    const SEARCH_FIELDS: &'static [&'static str] = &["course_code", "event_name", "location"];

    fn key(&self) -> &str {
        &self.event_id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "event_id" => Some(self.event_id.as_str().into()),
            "course_code" => Some(self.course_code.as_str().into()),
            "event_name" => Some(self.event_name.as_str().into()),
            "location" => Some(self.location.as_str().into()),
            "start_date" => Some(self.start_date.into()),
            "end_date" => Some(self.end_date.into()),
            "capacity" => Some(self.capacity.into()),
            "is_active" => Some(self.is_active.into()),
            other => audit_field(&self.audit, other),
        }
    }

    fn label(&self) -> String {
        format!("{} ({})", self.event_name, self.start_date)
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn audit(&self) -> &AuditInfo {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit
    }

    fn validate_create(dto: &CreateCourseEvent) -> Result<(), ValidationError> {
        Validator::new()
            .code("course_code", &dto.course_code)
            .name("event_name", &dto.event_name)
            .required("location", &dto.location)
            .date_order("end_date", dto.start_date, dto.end_date)
            .positive("capacity", dto.capacity)
            .finish()
    }

    fn validate_update(dto: &UpdateCourseEvent) -> Result<(), ValidationError> {
        Validator::new()
            .code("course_code", &dto.course_code)
            .name("event_name", &dto.event_name)
            .required("location", &dto.location)
            .date_order("end_date", dto.start_date, dto.end_date)
            .positive("capacity", dto.capacity)
            .finish()
    }

    fn from_create(dto: CreateCourseEvent, audit: AuditInfo) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            course_code: dto.course_code,
            event_name: dto.event_name,
            location: dto.location,
            start_date: dto.start_date,
            end_date: dto.end_date,
            capacity: dto.capacity,
            is_active: dto.is_active,
            audit,
        }
    }

    fn apply_update(&mut self, dto: UpdateCourseEvent) {
        self.course_code = dto.course_code;
        self.event_name = dto.event_name;
        self.location = dto.location;
        self.start_date = dto.start_date;
        self.end_date = dto.end_date;
        self.capacity = dto.capacity;
        self.is_active = dto.is_active;
    }

    fn to_update(&self) -> UpdateCourseEvent {
        UpdateCourseEvent {
            course_code: self.course_code.clone(),
            event_name: self.event_name.clone(),
            location: self.location.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            capacity: self.capacity,
            is_active: self.is_active,
        }
    }
}
