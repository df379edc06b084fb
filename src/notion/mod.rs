//! Notion API plumbing: routes, request bodies and the HTTP transport.

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::ExportError;

pub mod model;

/// Database query sort property; rows arrive newest lesson first.
pub const SORT_PROPERTY: &str = "Lesson Date";

/// Logical kind of remote object; decides the route of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Database,
    Block,
    Page,
}

/// Maps a resource type onto its URL and method. Substitution is literal,
/// so `object_id` must already be a plain Notion id.
pub fn resource_route(resource: ResourceType, base_url: &str, object_id: &str) -> (String, Method) {
    match resource {
        ResourceType::Database => (
            format!("{base_url}/databases/{object_id}/query"),
            Method::POST,
        ),
        ResourceType::Block => (
            format!("{base_url}/blocks/{object_id}/children"),
            Method::GET,
        ),
        ResourceType::Page => (format!("{base_url}/pages/{object_id}"), Method::PATCH),
    }
}

/// Query body for the database route: newest lessons first, one bounded page.
pub fn build_query_body(page_size: u32) -> Value {
    json!({
        "sorts": [
            { "property": SORT_PROPERTY, "direction": "descending" }
        ],
        "page_size": page_size,
    })
}

/// Update body that ticks the `Processed` checkbox on a page.
pub fn build_processed_body() -> Value {
    json!({
        "properties": {
            "Processed": { "checkbox": true }
        }
    })
}

/// Raw outcome of one API call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Boundary to the Notion API. The exporter only talks to this trait, so
/// tests can substitute a scripted transport.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ExportError>;
}

/// HTTP client for the Notion REST API.
#[derive(Clone)]
pub struct NotionClient {
    http: Client,
    token: String,
    version: String,
}

impl fmt::Debug for NotionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose the token.
        f.debug_struct("NotionClient")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl NotionClient {
    /// `token` is sent verbatim as the `Authorization` header.
    pub fn new(token: String, version: String) -> Self {
        let http = Client::builder()
            .user_agent("notion-flashcards/0.1")
            .no_proxy()
            .build()
            .expect("reqwest client");
        Self {
            http,
            token,
            version,
        }
    }

    /// Builds one request carrying the three headers every Notion call needs.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<reqwest::Request, ExportError> {
        let mut request = self
            .http
            .request(method, path)
            .header("Content-Type", "application/json")
            .header("Authorization", &self.token)
            .header("Notion-Version", &self.version);
        if let Some(body) = body {
            request = request.json(body);
        }
        request.build().map_err(ExportError::from)
    }
}

#[async_trait]
impl Transport for NotionClient {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ExportError> {
        let request = self.build_request(method, path, body)?;
        debug!(method = %request.method(), url = %request.url(), "sending notion request");
        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "notion responded");
        Ok(ApiResponse { status, body })
    }
}
