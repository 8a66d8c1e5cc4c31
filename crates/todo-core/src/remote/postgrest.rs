//! PostgREST Client
//!
//! `RemoteTableClient` over the hosted database's REST endpoint
//! (`<url>/rest/v1/<table>`).

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;

use super::config::SupabaseConfig;
use super::traits::RemoteTableClient;
use crate::domain::{NewTodo, RemoteOperationFailure, RemoteResult, Todo, TodoId};

/// Error body returned by PostgREST on non-2xx responses
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: String,
}

/// REST client for one table of the hosted database
#[derive(Debug, Clone)]
pub struct PostgrestClient {
    http: Client,
    config: SupabaseConfig,
}

impl PostgrestClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    pub fn with_http_client(http: Client, config: SupabaseConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.config.url, self.config.table)
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.http
            .request(method, self.table_url())
            .header("apikey", &self.config.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.anon_key))
    }
}

fn id_filter(id: TodoId) -> [(&'static str, String); 1] {
    [("id", format!("eq.{}", id))]
}

/// Turn a non-2xx response into a failure carrying the server's message
async fn check_status(response: Response) -> RemoteResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<PostgrestErrorBody>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => format!("HTTP {}", status.as_u16()),
        Err(_) => format!("HTTP {}: {}", status.as_u16(), body.trim()),
    };
    log::warn!("[postgrest] {} failed: {}", status, message);
    Err(RemoteOperationFailure::new(message))
}

#[async_trait(?Send)]
impl RemoteTableClient for PostgrestClient {
    async fn list(&self) -> RemoteResult<Vec<Todo>> {
        log::debug!("[postgrest] GET {}", self.table_url());
        let response = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        let rows = check_status(response).await?.json::<Vec<Todo>>().await?;
        log::debug!("[postgrest] fetched {} rows", rows.len());
        Ok(rows)
    }

    async fn insert(&self, todo: &NewTodo) -> RemoteResult<Todo> {
        log::debug!("[postgrest] POST {}", self.table_url());
        let response = self
            .request(Method::POST)
            .header(CONTENT_TYPE, "application/json")
            .header("Prefer", "return=representation")
            .json(&[todo])
            .send()
            .await?;
        let rows = check_status(response).await?.json::<Vec<Todo>>().await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RemoteOperationFailure::new("insert returned no rows"))
    }

    async fn update(&self, id: TodoId, is_complete: bool) -> RemoteResult<()> {
        log::debug!("[postgrest] PATCH {} id={} is_complete={}", self.table_url(), id, is_complete);
        let response = self
            .request(Method::PATCH)
            .query(&id_filter(id))
            .header(CONTENT_TYPE, "application/json")
            .header("Prefer", "return=minimal")
            .json(&serde_json::json!({ "is_complete": is_complete }))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> RemoteResult<()> {
        log::debug!("[postgrest] DELETE {} id={}", self.table_url(), id);
        let response = self
            .request(Method::DELETE)
            .query(&id_filter(id))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
