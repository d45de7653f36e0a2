//! HTTP transport seam for remote services.
//!
//! # Responsibility
//! - Describe one request/response exchange independent of the HTTP client.
//! - Provide the blocking `reqwest` implementation used in remote mode.
//!
//! # Invariants
//! - Network failures are returned as `TransportError` with a readable
//!   message; HTTP error statuses are returned as responses.
//! - Non-JSON bodies are reported as `body = None`.

use log::{debug, error};
use reqwest::blocking::Client;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// One outgoing request relative to the backend base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network-level failure (connect, timeout, unreadable body).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for TransportError {}

/// Executes one request against the backend.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        (**self).execute(request)
    }
}

/// Blocking `reqwest` transport rooted at a base URL.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Builds a transport. `timeout = None` keeps the client default.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| TransportError::new(format!("failed to create HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let started_at = Instant::now();
        let url = self.endpoint(&request.path);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(|err| {
            error!(
                "event=http_request module=remote status=error method={} path={} duration_ms={} error={}",
                request.method.as_str(),
                request.path,
                started_at.elapsed().as_millis(),
                err
            );
            TransportError::new(format!(
                "{} {} failed: {err}",
                request.method.as_str(),
                request.path
            ))
        })?;

        let status = response.status().as_u16();
        let text = response.text().map_err(|err| {
            TransportError::new(format!("failed to read response body: {err}"))
        })?;
        let body = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str::<Value>(&text).ok()
        };

        debug!(
            "event=http_request module=remote status=ok method={} path={} http_status={} duration_ms={}",
            request.method.as_str(),
            request.path,
            status,
            started_at.elapsed().as_millis()
        );
        Ok(ApiResponse { status, body })
    }
}
