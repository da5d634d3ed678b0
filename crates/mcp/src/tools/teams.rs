// Team listing tool.

use crate::args::Arguments;
use crate::error::DispatchError;
use crate::protocol::ToolSchema;
use crate::tools::{json_schema_object, Tool};
use runn_sdk::RunnClient;
use serde_json::{json, Value};

pub struct ListTeamsTool {
    client: RunnClient,
}

impl ListTeamsTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListTeamsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_teams".to_string(),
            description: "List all teams (raw upstream records).".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: &Arguments) -> Result<Value, DispatchError> {
        Ok(Value::Array(self.client.teams().list().await?))
    }
}
