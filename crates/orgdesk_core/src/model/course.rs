//! Course catalogue records.

use crate::model::field::FieldValue;
use crate::model::record::{audit_field, AuditInfo, Entity, StatusUpdate};
use crate::model::validation::{ValidationError, Validator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_code: String,
    pub course_name: String,
    pub description: String,
    pub category: String,
    pub duration_hours: u32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCourse {
    pub course_code: String,
    pub course_name: String,
    pub description: String,
    pub category: String,
    pub duration_hours: u32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCourse {
    pub course_name: String,
    pub description: String,
    pub category: String,
    pub duration_hours: u32,
    pub is_active: bool,
}

impl StatusUpdate for UpdateCourse {
    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Entity for Course {
    type Create = CreateCourse;
    type Update = UpdateCourse;

    const RESOURCE: &'static str = "courses";
    const KEY_FIELD: &'static str = "course_code";
    const SEARCH_FIELDS: &'static [&'static str] = &["course_code", "course_name", "description"];

    fn key(&self) -> &str {
        &self.course_code
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "course_code" => Some(self.course_code.as_str().into()),
            "course_name" => Some(self.course_name.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "duration_hours" => Some(self.duration_hours.into()),
            "is_active" => Some(self.is_active.into()),
            other => audit_field(&self.audit, other),
        }
    }

    fn label(&self) -> String {
        self.course_name.clone()
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

    fn validate_create(dto: &CreateCourse) -> Result<(), ValidationError> {
        Validator::new()
            .code("course_code", &dto.course_code)
            .name("course_name", &dto.course_name)
            .description("description", &dto.description)
            .required("category", &dto.category)
            .positive("duration_hours", dto.duration_hours)
            .finish()
    }

    fn validate_update(dto: &UpdateCourse) -> Result<(), ValidationError> {
        Validator::new()
            .name("course_name", &dto.course_name)
            .description("description", &dto.description)
            .required("category", &dto.category)
            .positive("duration_hours", dto.duration_hours)
            .finish()
    }

    fn from_create(dto: CreateCourse, audit: AuditInfo) -> Self {
        Self {
            course_code: dto.course_code,
            course_name: dto.course_name,
            description: dto.description,
            category: dto.category,
            duration_hours: dto.duration_hours,
            is_active: dto.is_active,
            audit,
        }
    }

    fn apply_update(&mut self, dto: UpdateCourse) {
        self.course_name = dto.course_name;
        self.description = dto.description;
        self.category = dto.category;
        self.duration_hours = dto.duration_hours;
        self.is_active = dto.is_active;
    }

    fn to_update(&self) -> UpdateCourse {
        UpdateCourse {
            course_name: self.course_name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            duration_hours: self.duration_hours,
            is_active: self.is_active,
        }
    }
}
