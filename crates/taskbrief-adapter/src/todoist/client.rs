/*
[INPUT]:  Bearer token and HTTP configuration
[OUTPUT]: Task lists fetched from the Todoist REST API
[POS]:    Todoist layer - HTTP client
[UPDATE]: When adding new endpoints or changing client behavior
*/

use crate::client::{ClientConfig, build_http_client};
use crate::error::{AdapterError, Result};
use crate::todoist::models::Task;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// Base URL for the Todoist REST API
const TODOIST_BASE_URL: &str = "https://api.todoist.com";

/// HTTP client for the Todoist REST API
#[derive(Debug)]
pub struct TodoistClient {
    http_client: Client,
    base_url: Url,
    token: String,
}

impl TodoistClient {
    /// Create a new client with default configuration
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http_client: build_http_client(&config)?,
            base_url: Url::parse(TODOIST_BASE_URL)?,
            token: token.into(),
        })
    }

    /// Override the API base URL (used by tests against a mock server)
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = Url::parse(base_url)?;
        Ok(self)
    }

    /// Build an authenticated GET request for an endpoint path
    fn get(&self, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self.http_client.get(url).bearer_auth(&self.token))
    }

    /// Send a request and deserialize a JSON success body
    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdapterError::status_error(status, body));
        }
        Ok(response.json().await?)
    }

    /// Fetch all active tasks
    ///
    /// GET /rest/v2/tasks
    pub async fn active_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.get("/rest/v2/tasks")?;
        let tasks: Vec<Task> = self.send_json(builder).await?;
        tracing::debug!(count = tasks.len(), "todoist tasks fetched");
        Ok(tasks)
    }
}
