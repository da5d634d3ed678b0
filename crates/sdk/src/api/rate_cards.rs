//! Rate cards API endpoints.

use crate::client::RunnClient;
use crate::error::RunnResult;
use serde_json::Value;

/// Rate cards API over the upstream `/rate-cards` resource. Rate cards
/// are organization-level pricing configurations; projects reference one
/// by `rateCardId`.
pub struct RateCardsApi<'a> {
    client: &'a RunnClient,
}

impl<'a> RateCardsApi<'a> {
    pub(crate) fn new(client: &'a RunnClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> RunnResult<Vec<Value>> {
        self.client.list_all("/rate-cards", &[]).await
    }
}
