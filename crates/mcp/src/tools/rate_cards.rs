// Rate card listing tools.

use crate::args::{self, Arguments};
use crate::error::DispatchError;
use crate::protocol::ToolSchema;
use crate::tools::{json_schema_id, json_schema_object, Tool};
use runn_core::filter::filter_by_foreign_key;
use runn_core::id_key;
use runn_sdk::RunnClient;
use serde_json::{json, Value};

pub struct ListRateCardsTool {
    client: RunnClient,
}

impl ListRateCardsTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListRateCardsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_rate_cards".to_string(),
            description: "List all rate cards (raw upstream records).".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: &Arguments) -> Result<Value, DispatchError> {
        Ok(Value::Array(self.client.rate_cards().list().await?))
    }
}

pub struct ListRateCardsByProjectTool {
    client: RunnClient,
}

impl ListRateCardsByProjectTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListRateCardsByProjectTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_rate_cards_by_project".to_string(),
            description: "List the rate card(s) attached to one project, following the project's \
                          rateCardId."
                .to_string(),
            input_schema: json_schema_object(
                json!({"project_id": json_schema_id("Project whose rate card to look up")}),
                vec!["project_id"],
            ),
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<Value, DispatchError> {
        let project_id = args::require_id(arguments, "project_id")?;

        let project = self.client.projects().get(&project_id).await?;
        let Some(rate_card_id) = project.get("rateCardId").and_then(id_key) else {
            return Ok(json!([]));
        };
        let rate_cards = self.client.rate_cards().list().await?;
        Ok(Value::Array(filter_by_foreign_key(
            &rate_cards,
            "id",
            &Value::String(rate_card_id),
        )))
    }
}
