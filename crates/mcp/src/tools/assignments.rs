// Assignment listing tools. An assignment is a planned allocation of a
// person to a project; it carries startDate/endDate rather than a single
// date, so the optional range filters on startDate.

use crate::args::{self, Arguments};
use crate::error::DispatchError;
use crate::protocol::ToolSchema;
use crate::tools::{json_schema_date, json_schema_id, json_schema_object, Tool};
use runn_core::filter::{filter_by_date_range, filter_by_foreign_key};
use runn_sdk::RunnClient;
use serde_json::{json, Value};

pub struct ListAssignmentsTool {
    client: RunnClient,
}

impl ListAssignmentsTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListAssignmentsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_assignments".to_string(),
            description: "List all assignments (raw upstream records).".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: &Arguments) -> Result<Value, DispatchError> {
        Ok(Value::Array(self.client.assignments().list().await?))
    }
}

pub struct ListAssignmentsByPersonTool {
    client: RunnClient,
}

impl ListAssignmentsByPersonTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListAssignmentsByPersonTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_assignments_by_person".to_string(),
            description: "List one person's assignments, optionally bounded to those starting in \
                          an inclusive date range."
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "person_id": json_schema_id("Person whose assignments to list"),
                    "start": json_schema_date("Earliest start date to include (inclusive)"),
                    "end": json_schema_date("Latest start date to include (inclusive)"),
                }),
                vec!["person_id"],
            ),
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<Value, DispatchError> {
        let person_id = args::require_id(arguments, "person_id")?;
        let range = args::optional_date_range(arguments)?;

        let assignments = self.client.assignments().list().await?;
        let mut assignments =
            filter_by_foreign_key(&assignments, "personId", &Value::String(person_id));
        if let Some(range) = range {
            assignments = filter_by_date_range(&assignments, "startDate", &range);
        }
        Ok(Value::Array(assignments))
    }
}

pub struct ListAssignmentsByProjectTool {
    client: RunnClient,
}

impl ListAssignmentsByProjectTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListAssignmentsByProjectTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_assignments_by_project".to_string(),
            description: "List one project's assignments, optionally bounded to those starting in \
                          an inclusive date range."
                .to_string(),
            input_schema: json_schema_object(
                json!({
                    "project_id": json_schema_id("Project whose assignments to list"),
                    "start": json_schema_date("Earliest start date to include (inclusive)"),
                    "end": json_schema_date("Latest start date to include (inclusive)"),
                }),
                vec!["project_id"],
            ),
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<Value, DispatchError> {
        let project_id = args::require_id(arguments, "project_id")?;
        let range = args::optional_date_range(arguments)?;

        let assignments = self.client.assignments().list().await?;
        let mut assignments =
            filter_by_foreign_key(&assignments, "projectId", &Value::String(project_id));
        if let Some(range) = range {
            assignments = filter_by_date_range(&assignments, "startDate", &range);
        }
        Ok(Value::Array(assignments))
    }
}
