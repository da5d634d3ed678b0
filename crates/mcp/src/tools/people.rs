// People listing tools.

use crate::args::{self, Arguments};
use crate::error::DispatchError;
use crate::protocol::ToolSchema;
use crate::tools::{json_schema_boolean, json_schema_id, json_schema_object, Tool};
use runn_core::filter::filter_by_foreign_key;
use runn_core::projection::person_summary;
use runn_sdk::RunnClient;
use serde_json::{json, Value};

pub struct ListPeopleTool {
    client: RunnClient,
}

impl ListPeopleTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListPeopleTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_people".to_string(),
            description: "List all people (id, name, email). Set `full` for raw upstream records."
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "full": json_schema_boolean(
                        "Return raw upstream records instead of the reduced shape (default: false)"
                    )
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<Value, DispatchError> {
        let full = args::optional_bool(arguments, "full", false)?;
        let people = self.client.people().list().await?;
        Ok(if full {
            Value::Array(people)
        } else {
            Value::Array(people.iter().map(person_summary).collect())
        })
    }
}

pub struct ListPeopleByTeamTool {
    client: RunnClient,
}

impl ListPeopleByTeamTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListPeopleByTeamTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_people_by_team".to_string(),
            description:
                "List the people on a team (id, name, email). Archived people are excluded unless \
                 `include_archived` is set."
                    .to_string(),
            input_schema: json_schema_object(
                json!({
                    "team_id": json_schema_id("Team to list members of"),
                    "include_archived": json_schema_boolean(
                        "Also return archived people (default: false)"
                    )
                }),
                vec!["team_id"],
            ),
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<Value, DispatchError> {
        let team_id = args::require_id(arguments, "team_id")?;
        let include_archived = args::optional_bool(arguments, "include_archived", false)?;

        let people = self.client.people().list().await?;
        let mut people = filter_by_foreign_key(&people, "teamId", &Value::String(team_id));
        if !include_archived {
            people.retain(|person| {
                !person
                    .get("isArchived")
                    .and_then(Value::as_bool)
                    .unwrap_or(false)
            });
        }
        Ok(Value::Array(people.iter().map(person_summary).collect()))
    }
}
