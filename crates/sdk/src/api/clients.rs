//! Clients API endpoints.

use crate::client::RunnClient;
use crate::error::RunnResult;
use serde_json::Value;

/// Clients API over the upstream `/clients` resource.
pub struct ClientsApi<'a> {
    client: &'a RunnClient,
}

impl<'a> ClientsApi<'a> {
    pub(crate) fn new(client: &'a RunnClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> RunnResult<Vec<Value>> {
        self.client.list_all("/clients", &[]).await
    }
}
