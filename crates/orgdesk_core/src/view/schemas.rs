//! Field/label mappings for each entity form.

use crate::model::competency::Competency;
use crate::model::course::Course;
use crate::model::course_event::CourseEvent;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::view::form::{FormField, FormSchema, HasForm};

impl HasForm for Competency {
    fn form_schema() -> FormSchema {
        FormSchema::new(vec![
            FormField::new("job_role_code", "Job Role Code").identity(),
            FormField::new("job_role_name", "Job Role Name").required(),
            FormField::new("description", "Description"),
            FormField::new("department_code", "Department").references("departments"),
            FormField::new("level", "Level").required(),
            FormField::new("is_active", "Active"),
        ])
    }
}

impl HasForm for Course {
    fn form_schema() -> FormSchema {
        FormSchema::new(vec![
            FormField::new("course_code", "Course Code").identity(),
            FormField::new("course_name", "Course Name").required(),
            FormField::new("description", "Description"),
            FormField::new("category", "Category").required(),
            FormField::new("duration_hours", "Duration (hours)").required(),
            FormField::new("is_active", "Active"),
        ])
    }
}

impl HasForm for CourseEvent {
    fn form_schema() -> FormSchema {
        FormSchema::new(vec![
            FormField::new("course_code", "Course")
                .required()
                .references("courses"),
            FormField::new("event_name", "Event Name").required(),
            FormField::new("location", "Location").required(),
            FormField::new("start_date", "Start Date").required(),
            FormField::new("end_date", "End Date").required(),
            FormField::new("capacity", "Capacity").required(),
            FormField::new("is_active", "Active"),
        ])
    }
}

impl HasForm for Department {
    fn form_schema() -> FormSchema {
        FormSchema::new(vec![
            FormField::new("department_code", "Department Code").identity(),
            FormField::new("department_name", "Department Name").required(),
            FormField::new("description", "Description"),
            FormField::new("parent_code", "Parent Department").references("departments"),
            FormField::new("is_active", "Active"),
        ])
    }
}

impl HasForm for Employee {
    fn form_schema() -> FormSchema {
        FormSchema::new(vec![
            FormField::new("employee_code", "Employee Code").identity(),
            FormField::new("full_name", "Full Name").required(),
            FormField::new("email", "Email").required(),
            FormField::new("department_code", "Department")
                .required()
                .references("departments"),
            FormField::new("job_role_code", "Job Role")
                .required()
                .references("competencies"),
            FormField::new("hire_date", "Hire Date").required(),
            FormField::new("is_active", "Active"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use crate::model::competency::Competency;
    use crate::model::course_event::CourseEvent;
    use crate::view::form::{FormMode, HasForm};

    #[test]
    fn identity_fields_are_locked_only_in_edit_mode() {
        let schema = Competency::form_schema();
        assert!(!schema.is_disabled("job_role_code", FormMode::Create));
        assert!(schema.is_disabled("job_role_code", FormMode::Edit));
        assert!(!schema.is_disabled("job_role_name", FormMode::Edit));
        assert_eq!(
            schema.editable_fields(FormMode::Edit).len(),
            schema.fields().len() - 1
        );
    }

    #[test]
    fn generated_keys_are_not_form_fields() {
        let schema = CourseEvent::form_schema();
        assert!(schema.field("event_id").is_none());
        assert_eq!(schema.label("course_code"), Some("Course"));
    }
}
