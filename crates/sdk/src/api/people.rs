//! People API endpoints.

use crate::client::RunnClient;
use crate::error::RunnResult;
use serde_json::Value;

/// People API over the upstream `/people` resource.
pub struct PeopleApi<'a> {
    client: &'a RunnClient,
}

impl<'a> PeopleApi<'a> {
    pub(crate) fn new(client: &'a RunnClient) -> Self {
        Self { client }
    }

    /// List all people across every page.
    pub async fn list(&self) -> RunnResult<Vec<Value>> {
        self.client.list_all("/people", &[]).await
    }

    /// Get a single person by id.
    pub async fn get(&self, id: &str) -> RunnResult<Value> {
        self.client.http.get(&format!("/people/{id}"), None).await
    }
}
