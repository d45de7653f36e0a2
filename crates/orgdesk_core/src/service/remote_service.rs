//! Remote-mode service forwarding every call to a backend.
//!
//! # Responsibility
//! - Map the `RecordService` contract onto REST endpoints.
//! - Decode the `{code, message, data}` envelope into records and pages.
//!
//! # Invariants
//! - No local filtering, sorting or paging; the backend is authoritative.
//! - HTTP 404 and envelope code 404 both mean "not found", never an error.
//! - Transport failures surface as `ServiceError::Transport`.

use crate::model::query::{Page, SearchParams};
use crate::model::record::Entity;
use crate::remote::envelope::{ApiEnvelope, PageData, CODE_NOT_FOUND, CODE_OK};
use crate::remote::params::{encode_search_params, PageBase};
use crate::remote::transport::{ApiRequest, HttpMethod, Transport};
use crate::service::{RecordService, ServiceError, ServiceResult};
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::marker::PhantomData;

/// Outcome of one decoded exchange.
enum Reply<D> {
    Found(Option<D>),
    NotFound,
}

/// Record service backed by an HTTP `Transport`.
pub struct RemoteService<E: Entity, T: Transport> {
    transport: T,
    page_base: PageBase,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, T: Transport> RemoteService<E, T> {
    pub fn new(transport: T, page_base: PageBase) -> Self {
        Self {
            transport,
            page_base,
            _entity: PhantomData,
        }
    }

    pub fn page_base(&self) -> PageBase {
        self.page_base
    }

    fn collection_path() -> String {
        E::RESOURCE.to_string()
    }

    fn item_path(key: &str) -> String {
        format!("{}/{}", E::RESOURCE, urlencoding::encode(key))
    }

    fn exchange<D: DeserializeOwned>(&self, request: &ApiRequest) -> ServiceResult<Reply<D>> {
        let response = self.transport.execute(request).map_err(|err| {
            error!(
                "event=remote_call module=service status=error resource={} method={} error_code=transport error={}",
                E::RESOURCE,
                request.method.as_str(),
                err
            );
            ServiceError::Transport(err.to_string())
        })?;

        if response.status == CODE_NOT_FOUND {
            return Ok(Reply::NotFound);
        }
        let success = response.is_success();

        let Some(body) = response.body else {
            if success {
                return Ok(Reply::Found(None));
            }
            return Err(http_failure(response.status, request));
        };

        let envelope: ApiEnvelope<Value> = match serde_json::from_value(body) {
            Ok(envelope) => envelope,
            Err(err) if success => {
                return Err(ServiceError::Decode(format!(
                    "{} {}: {err}",
                    request.method.as_str(),
                    request.path
                )));
            }
            Err(_) => return Err(http_failure(response.status, request)),
        };

        if envelope.code == CODE_NOT_FOUND {
            return Ok(Reply::NotFound);
        }
        if !success || envelope.code != CODE_OK {
            warn!(
                "event=remote_call module=service status=error resource={} method={} http_status={} code={}",
                E::RESOURCE,
                request.method.as_str(),
                response.status,
                envelope.code
            );
            let message = if envelope.message.trim().is_empty() {
                format!("backend returned code {}", envelope.code)
            } else {
                envelope.message
            };
            return Err(ServiceError::Transport(message));
        }

        match envelope.data {
            None | Some(Value::Null) => Ok(Reply::Found(None)),
            Some(data) => serde_json::from_value::<D>(data)
                .map(|decoded| Reply::Found(Some(decoded)))
                .map_err(|err| {
                    ServiceError::Decode(format!(
                        "{} {}: {err}",
                        request.method.as_str(),
                        request.path
                    ))
                }),
        }
    }
}

impl<E: Entity, T: Transport> RecordService<E> for RemoteService<E, T> {
    fn list(&self, params: &SearchParams) -> ServiceResult<Page<E>> {
        let request = ApiRequest::new(HttpMethod::Get, Self::collection_path())
            .with_query(encode_search_params(params, self.page_base));
        match self.exchange::<PageData<E>>(&request)? {
            Reply::Found(Some(data)) => {
                let page = data.into_page();
                debug!(
                    "event=record_list module=service status=ok mode=remote resource={} page={} total={}",
                    E::RESOURCE,
                    params.page,
                    page.total_records
                );
                Ok(page)
            }
            Reply::Found(None) => Err(ServiceError::Decode(format!(
                "list response for {} has no data",
                E::RESOURCE
            ))),
            Reply::NotFound => Err(ServiceError::Transport(format!(
                "list endpoint for {} not found",
                E::RESOURCE
            ))),
        }
    }

    fn get_by_key(&self, key: &str) -> ServiceResult<Option<E>> {
        let request = ApiRequest::new(HttpMethod::Get, Self::item_path(key));
        match self.exchange::<E>(&request)? {
            Reply::Found(record) => Ok(record),
            Reply::NotFound => Ok(None),
        }
    }

    fn create(&self, dto: E::Create) -> ServiceResult<E> {
        let body = serde_json::to_value(&dto)
            .map_err(|err| ServiceError::Decode(format!("cannot encode request: {err}")))?;
        let request = ApiRequest::new(HttpMethod::Post, Self::collection_path()).with_body(body);
        match self.exchange::<E>(&request)? {
            Reply::Found(Some(record)) => Ok(record),
            Reply::Found(None) => Err(ServiceError::Decode(format!(
                "create response for {} has no record",
                E::RESOURCE
            ))),
            Reply::NotFound => Err(ServiceError::Transport(format!(
                "create endpoint for {} not found",
                E::RESOURCE
            ))),
        }
    }

    fn update(&self, key: &str, dto: E::Update) -> ServiceResult<Option<E>> {
        let body = serde_json::to_value(&dto)
            .map_err(|err| ServiceError::Decode(format!("cannot encode request: {err}")))?;
        let request = ApiRequest::new(HttpMethod::Put, Self::item_path(key)).with_body(body);
        match self.exchange::<E>(&request)? {
            Reply::Found(Some(record)) => Ok(Some(record)),
            Reply::Found(None) => Err(ServiceError::Decode(format!(
                "update response for {} `{key}` has no record",
                E::RESOURCE
            ))),
            Reply::NotFound => Ok(None),
        }
    }

    fn delete(&self, key: &str) -> ServiceResult<bool> {
        let request = ApiRequest::new(HttpMethod::Delete, Self::item_path(key));
        match self.exchange::<Value>(&request)? {
            Reply::Found(_) => Ok(true),
            Reply::NotFound => Ok(false),
        }
    }

    fn bulk_delete(&self, keys: &[String]) -> ServiceResult<bool> {
        if keys.is_empty() {
            return Ok(false);
        }
        let request = ApiRequest::new(
            HttpMethod::Post,
            format!("{}/bulk-delete", Self::collection_path()),
        )
        .with_body(json!({ "keys": keys }));
        match self.exchange::<Value>(&request)? {
            Reply::Found(_) => Ok(true),
            Reply::NotFound => Ok(false),
        }
    }
}

fn http_failure(status: u16, request: &ApiRequest) -> ServiceError {
    ServiceError::Transport(format!(
        "{} {} returned HTTP {status}",
        request.method.as_str(),
        request.path
    ))
}
