//! The Todoist client and its request pipeline.
//!
//! # Design
//! `TodoistClient` holds an immutable `Config` and a `Transport`, nothing
//! else. Every resource operation runs the same three steps:
//! `build_request` produces an `HttpRequest`, the transport executes it, and
//! `decode::parse_json` or `decode::parse_no_content` interprets the
//! response. The per-resource methods live in `crate::resources` and only
//! pick a method, path, query and body.

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::decode::{parse_json, parse_no_content};
use crate::error::{ApiError, Result};
use crate::http::{with_query, HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

/// Blocking client for the Todoist REST API.
///
/// Operations take `&self` and never mutate the client, so one client can be
/// shared between threads.
#[derive(Debug, Clone)]
pub struct TodoistClient<T: Transport = UreqTransport> {
    config: Config,
    transport: T,
}

impl TodoistClient<UreqTransport> {
    /// Client for the public API authenticated with `token`.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(token))
    }

    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> TodoistClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build a request for `path` (relative to the base URL).
    ///
    /// The bearer header is always set. A `body`, when given, is encoded as
    /// JSON and tagged with `content-type: application/json`.
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<HttpRequest> {
        let url = with_query(format!("{}{path}", self.config.base_url()), query);
        let mut headers = vec![("authorization".to_string(), self.config.authorization())];
        let body = match body {
            Some(payload) => {
                headers.push(("content-type".to_string(), "application/json".to_string()));
                Some(serde_json::to_string(payload).map_err(ApiError::Serialization)?)
            }
            None => None,
        };
        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Execute a built request without interpreting the status.
    pub fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        debug!("{} {}", request.method.as_str(), request.url);
        self.transport.execute(request)
    }

    /// Run the pipeline for an operation answered with a 200 JSON body.
    pub(crate) fn fetch_json<B, R>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.build_request(method, path, query, body)?;
        parse_json(self.send(&request)?)
    }

    /// Run the pipeline for an operation answered with 204 No Content.
    pub(crate) fn fetch_no_content<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<bool>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_request(method, path, &[], body)?;
        parse_no_content(self.send(&request)?)
    }
}
