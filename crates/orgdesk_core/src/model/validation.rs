//! Field-level validation for create/update DTOs.
//!
//! # Responsibility
//! - Collect every field problem of one DTO in a single pass.
//! - Keep code/email patterns in one place for forms and the mock backend.
//!
//! # Invariants
//! - Validation never performs I/O and never reaches a service.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9][A-Z0-9_-]{1,31}$").expect("valid code regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

const MAX_NAME_CHARS: usize = 120;
const MAX_DESCRIPTION_CHARS: usize = 1000;

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validation failure carrying every rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field,
                message: message.into(),
            }],
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the message for one field, if it was rejected.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts = self
            .errors
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect::<Vec<_>>();
        write!(f, "validation failed ({})", parts.join("; "))
    }
}

impl Error for ValidationError {}

/// Accumulates field errors; `finish` turns them into a result.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn required(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.reject(field, "is required");
        }
        self
    }

    /// Business codes: upper-case letters, digits, `_` and `-`, 2..=32 chars.
    pub fn code(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.reject(field, "is required");
        } else if !CODE_RE.is_match(value) {
            self.reject(field, format!("`{value}` is not a valid code"));
        }
        self
    }

    pub fn optional_code(&mut self, field: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            if !CODE_RE.is_match(value) {
                self.reject(field, format!("`{value}` is not a valid code"));
            }
        }
        self
    }

    pub fn name(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.reject(field, "is required");
        } else if value.chars().count() > MAX_NAME_CHARS {
            self.reject(field, format!("must be at most {MAX_NAME_CHARS} characters"));
        }
        self
    }

    pub fn description(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.chars().count() > MAX_DESCRIPTION_CHARS {
            self.reject(
                field,
                format!("must be at most {MAX_DESCRIPTION_CHARS} characters"),
            );
        }
        self
    }

    pub fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if !EMAIL_RE.is_match(value.trim()) {
            self.reject(field, format!("`{value}` is not a valid email address"));
        }
        self
    }

    pub fn positive(&mut self, field: &'static str, value: u32) -> &mut Self {
        if value == 0 {
            self.reject(field, "must be greater than zero");
        }
        self
    }

    pub fn between(&mut self, field: &'static str, value: u32, min: u32, max: u32) -> &mut Self {
        if value < min || value > max {
            self.reject(field, format!("must be between {min} and {max}"));
        }
        self
    }

    pub fn date_order(
        &mut self,
        field: &'static str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> &mut Self {
        if end < start {
            self.reject(field, "must not be earlier than the start date");
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        Err(ValidationError {
            errors: std::mem::take(&mut self.errors),
        })
    }
}

/// Returns whether `value` is a well-formed business code.
pub fn is_valid_code(value: &str) -> bool {
    CODE_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_code, Validator};
    use chrono::NaiveDate;

    #[test]
    fn collects_every_field_error() {
        let err = Validator::new()
            .code("job_role_code", "bad code")
            .name("job_role_name", "")
            .email("email", "nobody")
            .finish()
            .unwrap_err();
        assert_eq!(err.errors().len(), 3);
        assert_eq!(err.message_for("job_role_name"), Some("is required"));
    }

    #[test]
    fn codes_are_upper_case_alphanumeric() {
        assert!(is_valid_code("DEV001"));
        assert!(is_valid_code("HR-OPS_2"));
        assert!(!is_valid_code("dev001"));
        assert!(!is_valid_code("D"));
    }

    #[test]
    fn end_date_before_start_is_rejected() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 2).expect("valid date");
        let end = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
        assert!(Validator::new()
            .date_order("end_date", start, end)
            .finish()
            .is_err());
        assert!(Validator::new()
            .date_order("end_date", start, start)
            .finish()
            .is_ok());
    }
}
