//! Form schemas and submission flow.

use crate::model::record::Entity;
use crate::service::{RecordService, ServiceError, ServiceResult};
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// One input on an entity form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    /// Identity fields are locked once the record exists.
    pub identity: bool,
    /// Resource whose records label this foreign key in detail views.
    pub reference: Option<&'static str>,
}

impl FormField {
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            required: false,
            identity: false,
            reference: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn identity(mut self) -> Self {
        self.identity = true;
        self.required = true;
        self
    }

    pub fn references(mut self, resource: &'static str) -> Self {
        self.reference = Some(resource);
        self
    }
}

/// Ordered field list with labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<FormField>,
}

impl FormSchema {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn label(&self, name: &str) -> Option<&'static str> {
        self.field(name).map(|field| field.label)
    }

    /// Field name -> label pairs in display order.
    pub fn field_labels(&self) -> Vec<(&'static str, &'static str)> {
        self.fields
            .iter()
            .map(|field| (field.name, field.label))
            .collect()
    }

    pub fn is_disabled(&self, name: &str, mode: FormMode) -> bool {
        mode == FormMode::Edit && self.field(name).is_some_and(|field| field.identity)
    }

    /// Fields the user may change in `mode`.
    pub fn editable_fields(&self, mode: FormMode) -> Vec<&FormField> {
        self.fields
            .iter()
            .filter(|field| !self.is_disabled(field.name, mode))
            .collect()
    }
}

/// Entity kinds that have a form.
pub trait HasForm: Entity {
    fn form_schema() -> FormSchema;
}

/// Validates and creates a record; the caller patches its store with the
/// returned record.
pub fn submit_create<E, S>(service: &S, dto: E::Create) -> ServiceResult<E>
where
    E: Entity,
    S: RecordService<E> + ?Sized,
{
    if let Err(err) = E::validate_create(&dto) {
        warn!(
            "event=form_submit module=view status=rejected mode=create resource={} fields={}",
            E::RESOURCE,
            err.errors().len()
        );
        return Err(ServiceError::Validation(err));
    }
    let record = service.create(dto)?;
    info!(
        "event=form_submit module=view status=ok mode=create resource={} key={}",
        E::RESOURCE,
        record.key()
    );
    Ok(record)
}

/// Validates and updates a record. `Ok(None)` means the key no longer exists.
pub fn submit_update<E, S>(service: &S, key: &str, dto: E::Update) -> ServiceResult<Option<E>>
where
    E: Entity,
    S: RecordService<E> + ?Sized,
{
    if let Err(err) = E::validate_update(&dto) {
        warn!(
            "event=form_submit module=view status=rejected mode=edit resource={} fields={}",
            E::RESOURCE,
            err.errors().len()
        );
        return Err(ServiceError::Validation(err));
    }
    service.update(key, dto)
}
