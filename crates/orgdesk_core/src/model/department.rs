//! Department records, optionally nested under a parent department.

use crate::model::field::FieldValue;
use crate::model::record::{audit_field, AuditInfo, Entity, StatusUpdate};
use crate::model::validation::{ValidationError, Validator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub department_code: String,
    pub department_name: String,
    pub description: String,
    pub parent_code: Option<String>,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDepartment {
    pub department_code: String,
    pub department_name: String,
    pub description: String,
    pub parent_code: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDepartment {
    pub department_name: String,
    pub description: String,
    pub parent_code: Option<String>,
    pub is_active: bool,
}

impl StatusUpdate for UpdateDepartment {
    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Entity for Department {
    type Create = CreateDepartment;
    type Update = UpdateDepartment;

    const RESOURCE: &'static str = "departments";
    const KEY_FIELD: &'static str = "department_code";
    const SEARCH_FIELDS: &'static [&'static str] =
        &["department_code", "department_name", "description"];

    fn key(&self) -> &str {
        &self.department_code
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "department_code" => Some(self.department_code.as_str().into()),
            "department_name" => Some(self.department_name.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "parent_code" => self.parent_code.as_deref().map(FieldValue::from),
            "is_active" => Some(self.is_active.into()),
            other => audit_field(&self.audit, other),
        }
    }

    fn label(&self) -> String {
        self.department_name.clone()
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

    fn validate_create(dto: &CreateDepartment) -> Result<(), ValidationError> {
        let mut validator = Validator::new();
        validator
            .code("department_code", &dto.department_code)
            .name("department_name", &dto.department_name)
            .description("description", &dto.description)
            .optional_code("parent_code", dto.parent_code.as_deref());
        if dto.parent_code.as_deref() == Some(dto.department_code.as_str()) {
            return Err(ValidationError::single(
                "parent_code",
                "a department cannot be its own parent",
            ));
        }
        validator.finish()
    }

    fn validate_update(dto: &UpdateDepartment) -> Result<(), ValidationError> {
        Validator::new()
            .name("department_name", &dto.department_name)
            .description("description", &dto.description)
            .optional_code("parent_code", dto.parent_code.as_deref())
            .finish()
    }

    fn from_create(dto: CreateDepartment, audit: AuditInfo) -> Self {
        Self {
            department_code: dto.department_code,
            department_name: dto.department_name,
            description: dto.description,
            parent_code: dto.parent_code,
            is_active: dto.is_active,
            audit,
        }
    }

    fn apply_update(&mut self, dto: UpdateDepartment) {
        self.department_name = dto.department_name;
        self.description = dto.description;
        self.parent_code = dto.parent_code;
        self.is_active = dto.is_active;
    }

    fn to_update(&self) -> UpdateDepartment {
        UpdateDepartment {
            department_name: self.department_name.clone(),
            description: self.description.clone(),
            parent_code: self.parent_code.clone(),
            is_active: self.is_active,
        }
    }
}
