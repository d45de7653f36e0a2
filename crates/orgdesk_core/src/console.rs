//! Composition root for the admin console.
//!
//! # Responsibility
//! - Turn a `ConsoleConfig` into one shared service per entity kind.
//! - Own the mock repositories so they live as long as the console.
//! - Hand out list stores preloaded with the configured defaults.
//!
//! # Invariants
//! - All remote resources share one `HttpTransport`.
//! - Mock resources start from the deterministic seed sets.

use crate::config::{ConfigError, ConsoleConfig, DataMode};
use crate::model::competency::Competency;
use crate::model::course::Course;
use crate::model::course_event::CourseEvent;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::query::SearchParams;
use crate::model::record::Entity;
use crate::remote::params::PageBase;
use crate::remote::transport::{HttpTransport, TransportError};
use crate::repo::record_repo::InMemoryRepository;
use crate::seed;
use crate::service::{MockService, RemoteService, SharedService};
use crate::store::Store;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
pub enum ConsoleError {
    Config(ConfigError),
    Transport(TransportError),
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Transport(err) => write!(f, "cannot build http transport: {err}"),
        }
    }
}

impl Error for ConsoleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Transport(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ConsoleError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TransportError> for ConsoleError {
    fn from(value: TransportError) -> Self {
        Self::Transport(value)
    }
}

/// List store over a shared service handle.
pub type SharedStore<E> = Store<E, SharedService<E>>;

pub struct Console {
    config: ConsoleConfig,
    competencies: SharedService<Competency>,
    courses: SharedService<Course>,
    course_events: SharedService<CourseEvent>,
    departments: SharedService<Department>,
    employees: SharedService<Employee>,
}

struct Wiring<'a> {
    config: &'a ConsoleConfig,
    transport: Option<Arc<HttpTransport>>,
}

impl Wiring<'_> {
    fn service<E: Entity>(&self, records: impl FnOnce() -> Vec<E>) -> SharedService<E> {
        let mode = self.config.mode_for(E::RESOURCE);
        match (mode, &self.transport) {
            (DataMode::Remote, Some(transport)) => {
                info!(
                    "event=service_wired module=console status=ok resource={} mode=remote",
                    E::RESOURCE
                );
                Arc::new(RemoteService::<E, _>::new(
                    Arc::clone(transport),
                    self.config.wire_page_base,
                ))
            }
            _ => {
                info!(
                    "event=service_wired module=console status=ok resource={} mode=mock",
                    E::RESOURCE
                );
                let repo = InMemoryRepository::seeded(records());
                Arc::new(
                    MockService::new(repo)
                        .with_latency(self.config.mock_latency())
                        .with_actor(self.config.actor.clone()),
                )
            }
        }
    }
}

impl Console {
    /// Builds every service described by `config`.
    ///
    /// # Errors
    /// - Returns `ConsoleError::Config` when `config` fails validation.
    /// - Returns `ConsoleError::Transport` when the HTTP client cannot be built.
    pub fn from_config(config: ConsoleConfig) -> Result<Self, ConsoleError> {
        config.validate()?;
        let transport = if config.uses_remote() {
            Some(Arc::new(HttpTransport::new(
                config.base_url.clone(),
                config.request_timeout(),
            )?))
        } else {
            None
        };

        let wiring = Wiring {
            config: &config,
            transport,
        };
        let competencies = wiring.service(seed::competencies);
        let courses = wiring.service(seed::courses);
        let course_events = wiring.service(seed::course_events);
        let departments = wiring.service(seed::departments);
        let employees = wiring.service(seed::employees);

        Ok(Self {
            config,
            competencies,
            courses,
            course_events,
            departments,
            employees,
        })
    }

    /// Mock-only console with seed data and no artificial latency.
    pub fn mock() -> Self {
        let config = ConsoleConfig {
            mock_latency_ms: 0,
            ..ConsoleConfig::default()
        };
        let wiring = Wiring {
            config: &config,
            transport: None,
        };
        Self {
            competencies: wiring.service(seed::competencies),
            courses: wiring.service(seed::courses),
            course_events: wiring.service(seed::course_events),
            departments: wiring.service(seed::departments),
            employees: wiring.service(seed::employees),
            config,
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn default_params(&self) -> SearchParams {
        SearchParams::with_page_size(self.config.default_page_size)
    }

    pub fn wire_page_base(&self) -> PageBase {
        self.config.wire_page_base
    }

    pub fn mock_latency(&self) -> Duration {
        self.config.mock_latency()
    }

    pub fn competencies(&self) -> SharedService<Competency> {
        Arc::clone(&self.competencies)
    }

    pub fn courses(&self) -> SharedService<Course> {
        Arc::clone(&self.courses)
    }

    pub fn course_events(&self) -> SharedService<CourseEvent> {
        Arc::clone(&self.course_events)
    }

    pub fn departments(&self) -> SharedService<Department> {
        Arc::clone(&self.departments)
    }

    pub fn employees(&self) -> SharedService<Employee> {
        Arc::clone(&self.employees)
    }

    pub fn competency_store(&self) -> SharedStore<Competency> {
        Store::new(self.competencies(), self.default_params())
    }

    pub fn course_store(&self) -> SharedStore<Course> {
        Store::new(self.courses(), self.default_params())
    }

    pub fn course_event_store(&self) -> SharedStore<CourseEvent> {
        Store::new(self.course_events(), self.default_params())
    }

    pub fn department_store(&self) -> SharedStore<Department> {
        Store::new(self.departments(), self.default_params())
    }

    pub fn employee_store(&self) -> SharedStore<Employee> {
        Store::new(self.employees(), self.default_params())
    }
}
