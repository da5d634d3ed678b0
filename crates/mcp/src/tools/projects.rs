// Project listing tools.

use crate::args::Arguments;
use crate::error::DispatchError;
use crate::protocol::ToolSchema;
use crate::tools::{json_schema_object, Tool};
use runn_core::projection::project_summary;
use runn_sdk::RunnClient;
use serde_json::{json, Value};

pub struct ListProjectsTool {
    client: RunnClient,
}

impl ListProjectsTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListProjectsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_projects".to_string(),
            description: "List all projects (id, name).".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: &Arguments) -> Result<Value, DispatchError> {
        let projects = self.client.projects().list().await?;
        Ok(Value::Array(projects.iter().map(project_summary).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runn_sdk::ClientConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn projects_come_back_reduced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "values": [
                    {"id": 1, "name": "Apollo", "budget": 10000, "clientId": 4},
                    {"id": 2, "name": "Borealis", "isTemplate": false},
                ]
            })))
            .mount(&server)
            .await;

        let config = ClientConfig::new(url::Url::parse(&server.uri()).unwrap(), "k");
        let tool = ListProjectsTool::new(RunnClient::new(config).unwrap());
        let result = tool.execute(&Arguments::new()).await.unwrap();
        assert_eq!(
            result,
            json!([
                {"id": 1, "name": "Apollo"},
                {"id": 2, "name": "Borealis"},
            ])
        );
    }
}
