//! Actuals API endpoints.

use crate::client::RunnClient;
use crate::error::RunnResult;
use serde_json::Value;

/// Actuals API over the upstream `/actuals` resource: hours actually
/// logged against a project and person.
pub struct ActualsApi<'a> {
    client: &'a RunnClient,
}

impl<'a> ActualsApi<'a> {
    pub(crate) fn new(client: &'a RunnClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> RunnResult<Vec<Value>> {
        self.client.list_all("/actuals", &[]).await
    }
}
