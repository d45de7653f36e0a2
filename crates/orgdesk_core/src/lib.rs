//! Core of the organizational admin console.
//! Records, list queries, services and list stores for competencies,
//! courses, course events, departments and employees.

pub mod config;
pub mod console;
pub mod logging;
pub mod model;
pub mod query;
pub mod remote;
pub mod repo;
pub mod seed;
pub mod service;
pub mod store;
pub mod view;

pub use config::{ConfigError, ConsoleConfig, DataMode};
pub use console::{Console, ConsoleError, SharedStore};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LoggingError};
pub use model::competency::{Competency, CreateCompetency, UpdateCompetency};
pub use model::course::{Course, CreateCourse, UpdateCourse};
pub use model::course_event::{CourseEvent, CreateCourseEvent, UpdateCourseEvent};
pub use model::department::{CreateDepartment, Department, UpdateDepartment};
pub use model::employee::{CreateEmployee, Employee, UpdateEmployee};
pub use model::field::FieldValue;
pub use model::query::{Page, RangeFilter, SearchParams, SearchPatch, SortDirection};
pub use model::record::{AuditInfo, Entity, StatusUpdate};
pub use model::validation::{FieldError, ValidationError};
pub use remote::PageBase;
pub use repo::record_repo::{InMemoryRepository, RecordRepository, RepoError, RepoResult};
pub use service::{
    MockService, RecordService, RemoteService, ServiceError, ServiceResult, SharedService,
};
pub use store::{Store, StoreAction, StoreState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
