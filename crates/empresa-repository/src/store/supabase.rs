//! Supabase table store (PostgREST over HTTP).

use super::{Payload, Predicate, StoreResponse, TableStore};
use async_trait::async_trait;
use empresa_config::StoreConfig;
use empresa_core::{EmpresaError, EmpresaResult, KeyValue};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use std::fmt;
use tracing::{debug, info, warn};

const SERVICE: &str = "supabase";

/// Table store backed by a Supabase project's REST endpoint.
///
/// Every request carries the API key as both `apikey` and bearer token and
/// asks for the affected rows back (`Prefer: return=representation`).
pub struct SupabaseTableStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseTableStore {
    /// Creates a store from configuration.
    ///
    /// Fails with a configuration error when the URL or key is missing or
    /// the URL does not parse.
    pub fn new(config: &StoreConfig) -> EmpresaResult<Self> {
        let base_url = required(config.supabase_url.as_deref(), "SUPABASE_URL")?;
        let api_key = required(config.supabase_key.as_deref(), "SUPABASE_KEY")?;

        url::Url::parse(base_url)
            .map_err(|e| EmpresaError::configuration(format!("Invalid Supabase URL '{}': {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| EmpresaError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        info!(url = base_url, "Supabase client created");
        Ok(Self::with_client(client, base_url, api_key))
    }

    /// Creates a store with a pre-built HTTP client.
    #[must_use]
    pub fn with_client(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/rest/v1/{}", self.base_url, table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
    }

    async fn execute(&self, operation: &str, table: &str, request: RequestBuilder) -> EmpresaResult<StoreResponse> {
        let response = request
            .send()
            .await
            .map_err(|e| EmpresaError::external(SERVICE, format!("{} on {} failed: {}", operation, table, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| EmpresaError::external(SERVICE, format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            warn!(operation, table, status = status.as_u16(), "Supabase request rejected");
            return Err(EmpresaError::from_status(SERVICE, status.as_u16(), &body));
        }

        let payload = if body.trim().is_empty() {
            Payload::Empty
        } else {
            Payload::from_json(serde_json::from_str(&body)?)?
        };

        debug!(operation, table, status = status.as_u16(), "Supabase request completed");
        Ok(StoreResponse::transport(payload, status.as_u16()))
    }
}

fn required<'a>(value: Option<&'a str>, name: &str) -> EmpresaResult<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| EmpresaError::configuration(format!("{} is not set", name)))
}

/// Renders a predicate value as a PostgREST filter.
fn filter(value: &Value) -> String {
    match value {
        Value::Null => "is.null".to_string(),
        Value::String(s) => format!("eq.{}", s),
        other => format!("eq.{}", other),
    }
}

#[async_trait]
impl TableStore for SupabaseTableStore {
    fn name(&self) -> &'static str {
        SERVICE
    }

    async fn select(&self, table: &str) -> EmpresaResult<StoreResponse> {
        let request = self.request(Method::GET, table).query(&[("select", "*")]);
        self.execute("select", table, request).await
    }

    async fn insert(&self, table: &str, payload: KeyValue) -> EmpresaResult<StoreResponse> {
        let request = self.request(Method::POST, table).json(&payload);
        self.execute("insert", table, request).await
    }

    async fn update(&self, table: &str, payload: KeyValue, predicate: &Predicate) -> EmpresaResult<StoreResponse> {
        let request = self
            .request(Method::PATCH, table)
            .query(&[(predicate.field.as_str(), filter(&predicate.value))])
            .json(&payload);
        self.execute("update", table, request).await
    }

    async fn delete(&self, table: &str, predicate: &Predicate) -> EmpresaResult<StoreResponse> {
        let request = self
            .request(Method::DELETE, table)
            .query(&[(predicate.field.as_str(), filter(&predicate.value))]);
        self.execute("delete", table, request).await
    }
}

impl fmt::Debug for SupabaseTableStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseTableStore")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
