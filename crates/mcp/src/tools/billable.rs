// Billable-hours aggregation tool.

use crate::args::{self, Arguments};
use crate::error::DispatchError;
use crate::protocol::ToolSchema;
use crate::tools::{json_schema_date, json_schema_id, json_schema_object, Tool};
use runn_core::aggregate::{group_billable_hours, group_billable_hours_strict};
use runn_core::filter::{filter_by_date_range, filter_by_foreign_key};
use runn_core::report::report_rows;
use runn_sdk::RunnClient;
use serde_json::{json, Value};

pub struct BillableHoursTool {
    client: RunnClient,
    /// Strict mode fails the whole aggregation on a malformed record
    /// instead of skipping it. Configuration-driven, never the default.
    strict: bool,
}

impl BillableHoursTool {
    pub fn new(client: RunnClient, strict: bool) -> Self {
        Self { client, strict }
    }
}

#[async_trait::async_trait]
impl Tool for BillableHoursTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "billable_hours".to_string(),
            description:
                "Aggregate logged hours grouped by project, person, and month. Optionally bounded \
                 by an inclusive date range and scoped to one project and/or person."
                    .to_string(),
            input_schema: json_schema_object(
                json!({
                    "start": json_schema_date("First day to include (inclusive)"),
                    "end": json_schema_date("Last day to include (inclusive)"),
                    "project_id": json_schema_id("Only hours on this project"),
                    "person_id": json_schema_id("Only hours by this person"),
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<Value, DispatchError> {
        let range = args::optional_date_range(arguments)?;
        let project_id = args::optional_id(arguments, "project_id")?;
        let person_id = args::optional_id(arguments, "person_id")?;

        let mut actuals = self.client.actuals().list().await?;
        if let Some(range) = range {
            actuals = filter_by_date_range(&actuals, "date", &range);
        }
        if let Some(id) = project_id {
            actuals = filter_by_foreign_key(&actuals, "projectId", &Value::String(id));
        }
        if let Some(id) = person_id {
            actuals = filter_by_foreign_key(&actuals, "personId", &Value::String(id));
        }

        let buckets = if self.strict {
            group_billable_hours_strict(&actuals)?
        } else {
            group_billable_hours(&actuals)
        };
        Ok(serde_json::to_value(report_rows(&buckets))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runn_sdk::ClientConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_with_actuals(actuals: Value) -> (MockServer, RunnClient) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/actuals"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"values": actuals})))
            .mount(&server)
            .await;
        let config = ClientConfig::new(url::Url::parse(&server.uri()).unwrap(), "k");
        let client = RunnClient::new(config).unwrap();
        (server, client)
    }

    fn sample_actuals() -> Value {
        json!([
            {"projectId": "P1", "personId": "A", "date": "2025-01-10", "hours": 5},
            {"projectId": "P1", "personId": "A", "date": "2025-01-20", "hours": 3},
            {"projectId": "P2", "personId": "B", "date": "2025-02-01", "hours": 8},
        ])
    }

    #[tokio::test]
    async fn groups_hours_by_project_person_month() {
        let (_server, client) = client_with_actuals(sample_actuals()).await;
        let tool = BillableHoursTool::new(client, false);
        let result = tool.execute(&Arguments::new()).await.unwrap();
        assert_eq!(
            result,
            json!([
                {"project_id": "P1", "person_id": "A", "month": "2025-01", "hours": 8.0},
                {"project_id": "P2", "person_id": "B", "month": "2025-02", "hours": 8.0},
            ])
        );
    }

    #[tokio::test]
    async fn scopes_to_person_and_range_before_grouping() {
        let (_server, client) = client_with_actuals(sample_actuals()).await;
        let tool = BillableHoursTool::new(client, false);
        let arguments = json!({"person_id": "A", "start": "2025-01-15", "end": "2025-01-31"});
        let result = tool.execute(arguments.as_object().unwrap()).await.unwrap();
        assert_eq!(
            result,
            json!([
                {"project_id": "P1", "person_id": "A", "month": "2025-01", "hours": 3.0},
            ])
        );
    }

    #[tokio::test]
    async fn strict_mode_surfaces_malformed_records() {
        let (_server, client) = client_with_actuals(json!([
            {"projectId": "P1", "personId": "A", "date": "2025-01-10", "hours": 5},
            {"projectId": "P1", "personId": "A", "date": "not-a-date", "hours": 3},
        ]))
        .await;

        let lenient = BillableHoursTool::new(client.clone(), false);
        let rows = lenient.execute(&Arguments::new()).await.unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 1);

        let strict = BillableHoursTool::new(client, true);
        let err = strict.execute(&Arguments::new()).await.unwrap_err();
        assert!(matches!(err, DispatchError::Aggregation(_)));
    }
}
