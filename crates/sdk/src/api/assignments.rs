//! Assignments API endpoints.

use crate::client::RunnClient;
use crate::error::RunnResult;
use serde_json::Value;

/// Assignments API over the upstream `/assignments` resource. An
/// assignment is a planned allocation of a person to a project; the
/// upstream does not filter these server-side, so callers scope the full
/// listing in memory.
pub struct AssignmentsApi<'a> {
    client: &'a RunnClient,
}

impl<'a> AssignmentsApi<'a> {
    pub(crate) fn new(client: &'a RunnClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> RunnResult<Vec<Value>> {
        self.client.list_all("/assignments", &[]).await
    }
}
