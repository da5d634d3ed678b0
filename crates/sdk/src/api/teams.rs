//! Teams API endpoints.

use crate::client::RunnClient;
use crate::error::RunnResult;
use serde_json::Value;

/// Teams API over the upstream `/teams` resource.
pub struct TeamsApi<'a> {
    client: &'a RunnClient,
}

impl<'a> TeamsApi<'a> {
    pub(crate) fn new(client: &'a RunnClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> RunnResult<Vec<Value>> {
        self.client.list_all("/teams", &[]).await
    }
}
