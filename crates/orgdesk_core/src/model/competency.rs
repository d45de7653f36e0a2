//! Competency (job role) records.

use crate::model::field::FieldValue;
use crate::model::record::{audit_field, AuditInfo, Entity, StatusUpdate};
use crate::model::validation::{ValidationError, Validator};
use serde::{Deserialize, Serialize};

const MIN_LEVEL: u32 = 1;
const MAX_LEVEL: u32 = 5;

/// A job role and the competency level it requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competency {
    pub job_role_code: String,
    pub job_role_name: String,
    pub description: String,
    /// Owning department code.
    pub department_code: Option<String>,
    /// Required proficiency, 1 (entry) to 5 (expert).
    pub level: u32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCompetency {
    pub job_role_code: String,
    pub job_role_name: String,
    pub description: String,
    pub department_code: Option<String>,
    pub level: u32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCompetency {
    pub job_role_name: String,
    pub description: String,
    pub department_code: Option<String>,
    pub level: u32,
    pub is_active: bool,
}

impl StatusUpdate for UpdateCompetency {
    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Entity for Competency {
    type Create = CreateCompetency;
    type Update = UpdateCompetency;

    const RESOURCE: &'static str = "competencies";
    const KEY_FIELD: &'static str = "job_role_code";
    const SEARCH_FIELDS: &'static [&'static str] =
        &["job_role_code", "job_role_name", "description"];

    fn key(&self) -> &str {
        &self.job_role_code
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "job_role_code" => Some(self.job_role_code.as_str().into()),
            "job_role_name" => Some(self.job_role_name.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "department_code" => self.department_code.as_deref().map(FieldValue::from),
            "level" => Some(self.level.into()),
            "is_active" => Some(self.is_active.into()),
            other => audit_field(&self.audit, other),
        }
    }

    fn label(&self) -> String {
        format!("{} - {}", self.job_role_code, self.job_role_name)
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

    fn validate_create(dto: &CreateCompetency) -> Result<(), ValidationError> {
        Validator::new()
            .code("job_role_code", &dto.job_role_code)
            .name("job_role_name", &dto.job_role_name)
            .description("description", &dto.description)
            .optional_code("department_code", dto.department_code.as_deref())
            .between("level", dto.level, MIN_LEVEL, MAX_LEVEL)
            .finish()
    }

    fn validate_update(dto: &UpdateCompetency) -> Result<(), ValidationError> {
        Validator::new()
            .name("job_role_name", &dto.job_role_name)
            .description("description", &dto.description)
            .optional_code("department_code", dto.department_code.as_deref())
            .between("level", dto.level, MIN_LEVEL, MAX_LEVEL)
            .finish()
    }

    fn from_create(dto: CreateCompetency, audit: AuditInfo) -> Self {
        Self {
            job_role_code: dto.job_role_code,
            job_role_name: dto.job_role_name,
            description: dto.description,
            department_code: dto.department_code,
            level: dto.level,
            is_active: dto.is_active,
            audit,
        }
    }

    fn apply_update(&mut self, dto: UpdateCompetency) {
        self.job_role_name = dto.job_role_name;
        self.description = dto.description;
        self.department_code = dto.department_code;
        self.level = dto.level;
        self.is_active = dto.is_active;
    }

    fn to_update(&self) -> UpdateCompetency {
        UpdateCompetency {
            job_role_name: self.job_role_name.clone(),
            description: self.description.clone(),
            department_code: self.department_code.clone(),
            level: self.level,
            is_active: self.is_active,
        }
    }
}
