//! Main client for the Runn API.

use crate::api::*;
use crate::config::ClientConfig;
use crate::error::RunnResult;
use crate::pagination;
use crate::transport::HttpTransport;
use serde_json::Value;
use std::sync::Arc;

/// Client for the upstream API. Cheap to clone; the only shared state is
/// the immutable configuration and the connection pool.
#[derive(Debug, Clone)]
pub struct RunnClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl RunnClient {
    /// Create a client from configuration.
    pub fn new(config: ClientConfig) -> RunnResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;
        Ok(Self { config, http })
    }

    /// Build a client from `RUNN_*` environment variables.
    pub fn from_env() -> RunnResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Raw access to the HTTP adapter, for callers that forward arbitrary
    /// requests (the generic passthrough tool).
    pub fn transport(&self) -> &HttpTransport {
        &self.http
    }

    /// Fetch every page of a list endpoint in cursor order.
    pub async fn list_all(&self, path: &str, query: &[(String, String)]) -> RunnResult<Vec<Value>> {
        pagination::list_all(&self.http, path, query).await
    }

    /// Fetch exactly one page of a list endpoint, discarding any cursor.
    pub async fn list_first_page(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> RunnResult<Vec<Value>> {
        pagination::first_page(&self.http, path, query).await
    }

    /// Get the projects API.
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(self)
    }

    /// Get the people API.
    pub fn people(&self) -> PeopleApi<'_> {
        PeopleApi::new(self)
    }

    /// Get the clients API.
    pub fn clients(&self) -> ClientsApi<'_> {
        ClientsApi::new(self)
    }

    /// Get the assignments API.
    pub fn assignments(&self) -> AssignmentsApi<'_> {
        AssignmentsApi::new(self)
    }

    /// Get the actuals API.
    pub fn actuals(&self) -> ActualsApi<'_> {
        ActualsApi::new(self)
    }

    /// Get the roles API.
    pub fn roles(&self) -> RolesApi<'_> {
        RolesApi::new(self)
    }

    /// Get the skills API.
    pub fn skills(&self) -> SkillsApi<'_> {
        SkillsApi::new(self)
    }

    /// Get the teams API.
    pub fn teams(&self) -> TeamsApi<'_> {
        TeamsApi::new(self)
    }

    /// Get the rate cards API.
    pub fn rate_cards(&self) -> RateCardsApi<'_> {
        RateCardsApi::new(self)
    }
}
