//! Projects API endpoints.

use crate::client::RunnClient;
use crate::error::RunnResult;
use serde_json::Value;

/// Projects API over the upstream `/projects` resource.
pub struct ProjectsApi<'a> {
    client: &'a RunnClient,
}

impl<'a> ProjectsApi<'a> {
    pub(crate) fn new(client: &'a RunnClient) -> Self {
        Self { client }
    }

    /// List all projects across every page.
    pub async fn list(&self) -> RunnResult<Vec<Value>> {
        self.client.list_all("/projects", &[]).await
    }

    /// Get a single project by id.
    pub async fn get(&self, id: &str) -> RunnResult<Value> {
        self.client.http.get(&format!("/projects/{id}"), None).await
    }
}
