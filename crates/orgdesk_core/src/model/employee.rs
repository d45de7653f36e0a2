//! Employee records linked to a department and a job role.

use crate::model::field::FieldValue;
use crate::model::record::{audit_field, AuditInfo, Entity, StatusUpdate};
use crate::model::validation::{ValidationError, Validator};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_code: String,
    pub full_name: String,
    pub email: String,
    pub department_code: String,
    pub job_role_code: String,
    pub hire_date: NaiveDate,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub employee_code: String,
    pub full_name: String,
    pub email: String,
    pub department_code: String,
    pub job_role_code: String,
    pub hire_date: NaiveDate,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateEmployee {
    pub full_name: String,
    pub email: String,
    pub department_code: String,
    pub job_role_code: String,
    pub hire_date: NaiveDate,
    pub is_active: bool,
}

impl StatusUpdate for UpdateEmployee {
    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Entity for Employee {
    type Create = CreateEmployee;
    type Update = UpdateEmployee;

    const RESOURCE: &'static str = "employees";
    const KEY_FIELD: &'static str = "employee_code";
    const SEARCH_FIELDS: &'static [&'static str] = &["employee_code", "full_name", "email"];

    fn key(&self) -> &str {
        &self.employee_code
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "employee_code" => Some(self.employee_code.as_str().into()),
            "full_name" => Some(self.full_name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "department_code" => Some(self.department_code.as_str().into()),
            "job_role_code" => Some(self.job_role_code.as_str().into()),
            "hire_date" => Some(self.hire_date.into()),
            "is_active" => Some(self.is_active.into()),
            other => audit_field(&self.audit, other),
        }
    }

    fn label(&self) -> String {
        self.full_name.clone()
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

    fn validate_create(dto: &CreateEmployee) -> Result<(), ValidationError> {
        Validator::new()
            .code("employee_code", &dto.employee_code)
            .name("full_name", &dto.full_name)
            .email("email", &dto.email)
            .code("department_code", &dto.department_code)
            .code("job_role_code", &dto.job_role_code)
            .finish()
    }

    fn validate_update(dto: &UpdateEmployee) -> Result<(), ValidationError> {
        Validator::new()
            .name("full_name", &dto.full_name)
            .email("email", &dto.email)
            .code("department_code", &dto.department_code)
            .code("job_role_code", &dto.job_role_code)
            .finish()
    }

    fn from_create(dto: CreateEmployee, audit: AuditInfo) -> Self {
        Self {
            employee_code: dto.employee_code,
            full_name: dto.full_name,
            email: dto.email,
            department_code: dto.department_code,
            job_role_code: dto.job_role_code,
            hire_date: dto.hire_date,
            is_active: dto.is_active,
            audit,
        }
    }

    fn apply_update(&mut self, dto: UpdateEmployee) {
        self.full_name = dto.full_name;
        self.email = dto.email;
        self.department_code = dto.department_code;
        self.job_role_code = dto.job_role_code;
        self.hire_date = dto.hire_date;
        self.is_active = dto.is_active;
    }

    fn to_update(&self) -> UpdateEmployee {
        UpdateEmployee {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            department_code: self.department_code.clone(),
            job_role_code: self.job_role_code.clone(),
            hire_date: self.hire_date,
            is_active: self.is_active,
        }
    }
}
