// Actuals listing tools. Actuals are hours actually logged; the upstream
// does not filter them server-side, so scoping happens in memory.

use crate::args::{self, Arguments};
use crate::error::DispatchError;
use crate::protocol::ToolSchema;
use crate::tools::{json_schema_date, json_schema_id, json_schema_object, Tool};
use runn_core::filter::{filter_by_date_range, filter_by_foreign_key};
use runn_core::DateRange;
use runn_sdk::RunnClient;
use serde_json::{json, Value};

pub struct ListActualsTool {
    client: RunnClient,
}

impl ListActualsTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListActualsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_actuals".to_string(),
            description: "List all logged actuals (raw upstream records).".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: &Arguments) -> Result<Value, DispatchError> {
        Ok(Value::Array(self.client.actuals().list().await?))
    }
}

pub struct ListActualsByDateRangeTool {
    client: RunnClient,
}

impl ListActualsByDateRangeTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListActualsByDateRangeTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_actuals_by_date_range".to_string(),
            description: "List actuals whose date falls in an inclusive range.".to_string(),
            input_schema: json_schema_object(
                json!({
                    "start": json_schema_date("First day to include (inclusive)"),
                    "end": json_schema_date("Last day to include (inclusive)"),
                }),
                vec!["start", "end"],
            ),
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<Value, DispatchError> {
        let start = args::require_date(arguments, "start")?;
        let end = args::require_date(arguments, "end")?;
        // An inverted range yields an empty result, not an error.
        let range = DateRange::new(start, end);

        let actuals = self.client.actuals().list().await?;
        Ok(Value::Array(filter_by_date_range(&actuals, "date", &range)))
    }
}

pub struct ListActualsByPersonTool {
    client: RunnClient,
}

impl ListActualsByPersonTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListActualsByPersonTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_actuals_by_person".to_string(),
            description: "List actuals logged by one person.".to_string(),
            input_schema: json_schema_object(
                json!({"person_id": json_schema_id("Person whose actuals to list")}),
                vec!["person_id"],
            ),
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<Value, DispatchError> {
        let person_id = args::require_id(arguments, "person_id")?;
        let actuals = self.client.actuals().list().await?;
        Ok(Value::Array(filter_by_foreign_key(
            &actuals,
            "personId",
            &Value::String(person_id),
        )))
    }
}

pub struct ListActualsByProjectTool {
    client: RunnClient,
}

impl ListActualsByProjectTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListActualsByProjectTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_actuals_by_project".to_string(),
            description: "List actuals logged against one project.".to_string(),
            input_schema: json_schema_object(
                json!({"project_id": json_schema_id("Project whose actuals to list")}),
                vec!["project_id"],
            ),
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<Value, DispatchError> {
        let project_id = args::require_id(arguments, "project_id")?;
        let actuals = self.client.actuals().list().await?;
        Ok(Value::Array(filter_by_foreign_key(
            &actuals,
            "projectId",
            &Value::String(project_id),
        )))
    }
}
