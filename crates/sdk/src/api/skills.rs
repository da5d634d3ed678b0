//! Skills API endpoints.

use crate::client::RunnClient;
use crate::error::RunnResult;
use serde_json::Value;

/// Skills API over the upstream `/skills` resource.
pub struct SkillsApi<'a> {
    client: &'a RunnClient,
}

impl<'a> SkillsApi<'a> {
    pub(crate) fn new(client: &'a RunnClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> RunnResult<Vec<Value>> {
        self.client.list_all("/skills", &[]).await
    }
}
