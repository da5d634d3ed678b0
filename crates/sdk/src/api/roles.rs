//! Roles API endpoints.

use crate::client::RunnClient;
use crate::error::RunnResult;
use serde_json::Value;

/// Roles API over the upstream `/roles` resource.
pub struct RolesApi<'a> {
    client: &'a RunnClient,
}

impl<'a> RolesApi<'a> {
    pub(crate) fn new(client: &'a RunnClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> RunnResult<Vec<Value>> {
        self.client.list_all("/roles", &[]).await
    }
}
