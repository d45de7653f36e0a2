//! Mock-mode service backed by an in-process repository.
//!
//! # Responsibility
//! - Run the filter/sort/paginate pipeline over repository contents.
//! - Validate DTOs and stamp audit columns on write.
//! - Simulate backend latency so callers exercise their loading states.
//!
//! # Invariants
//! - Service APIs never bypass repository key-uniqueness checks.
//! - On create `create_time == update_time`.

use crate::model::query::{Page, SearchParams};
use crate::model::record::{AuditInfo, Entity};
use crate::query::run_query;
use crate::repo::record_repo::RecordRepository;
use crate::service::{RecordService, ServiceResult};
use chrono::Utc;
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::marker::PhantomData;
use std::thread;
use std::time::{Duration, Instant};

pub const DEFAULT_ACTOR: &str = "admin";

/// Record service over any `RecordRepository`.
pub struct MockService<E: Entity, R: RecordRepository<E>> {
    repo: R,
    latency: Duration,
    actor: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, R: RecordRepository<E>> MockService<E, R> {
    /// Creates a service with no artificial latency and the default actor.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            latency: Duration::ZERO,
            actor: DEFAULT_ACTOR.to_string(),
            _entity: PhantomData,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Sets the user name written into audit columns.
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = actor.into();
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }
}

impl<E: Entity, R: RecordRepository<E>> RecordService<E> for MockService<E, R> {
    fn list(&self, params: &SearchParams) -> ServiceResult<Page<E>> {
        let started_at = Instant::now();
        self.simulate_latency();
        let records = self.repo.list()?;
        let page = run_query(&records, params);
        debug!(
            "event=record_list module=service status=ok mode=mock resource={} page={} page_size={} total={} duration_ms={}",
            E::RESOURCE,
            params.page,
            params.page_size,
            page.total_records,
            started_at.elapsed().as_millis()
        );
        Ok(page)
    }

    fn get_by_key(&self, key: &str) -> ServiceResult<Option<E>> {
        self.simulate_latency();
        Ok(self.repo.get(key)?)
    }

    fn create(&self, dto: E::Create) -> ServiceResult<E> {
        self.simulate_latency();
        if let Err(err) = E::validate_create(&dto) {
            warn!(
                "event=record_create module=service status=rejected mode=mock resource={} error_code=validation",
                E::RESOURCE
            );
            return Err(err.into());
        }

        let record = E::from_create(dto, AuditInfo::created(&self.actor, Utc::now()));
        let created = self.repo.create(record)?;
        info!(
            "event=record_create module=service status=ok mode=mock resource={} key={}",
            E::RESOURCE,
            created.key()
        );
        Ok(created)
    }

    fn update(&self, key: &str, dto: E::Update) -> ServiceResult<Option<E>> {
        self.simulate_latency();
        E::validate_update(&dto)?;

        let Some(mut record) = self.repo.get(key)? else {
            debug!(
                "event=record_update module=service status=not_found mode=mock resource={} key={}",
                E::RESOURCE,
                key
            );
            return Ok(None);
        };
        record.apply_update(dto);
        record.audit_mut().touch(&self.actor, Utc::now());

        let updated = self.repo.update(record)?;
        if updated.is_some() {
            info!(
                "event=record_update module=service status=ok mode=mock resource={} key={}",
                E::RESOURCE,
                key
            );
        }
        Ok(updated)
    }

    fn delete(&self, key: &str) -> ServiceResult<bool> {
        self.simulate_latency();
        let removed = self.repo.delete(key)?;
        info!(
            "event=record_delete module=service status={} mode=mock resource={} key={}",
            if removed { "ok" } else { "not_found" },
            E::RESOURCE,
            key
        );
        Ok(removed)
    }

    fn bulk_delete(&self, keys: &[String]) -> ServiceResult<bool> {
        self.simulate_latency();
        let distinct = keys.iter().cloned().collect::<BTreeSet<_>>();
        if distinct.is_empty() {
            return Ok(false);
        }

        let distinct = distinct.into_iter().collect::<Vec<_>>();
        let removed = self.repo.delete_many(&distinct)?;
        info!(
            "event=record_bulk_delete module=service status=ok mode=mock resource={} requested={} removed={}",
            E::RESOURCE,
            distinct.len(),
            removed
        );
        Ok(removed == distinct.len())
    }
}
