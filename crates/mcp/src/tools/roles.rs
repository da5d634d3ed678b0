// Role listing tools.

use crate::args::{self, Arguments};
use crate::error::DispatchError;
use crate::protocol::ToolSchema;
use crate::tools::{json_schema_id, json_schema_object, Tool};
use runn_core::filter::filter_by_foreign_key;
use runn_core::id_key;
use runn_sdk::RunnClient;
use serde_json::{json, Value};

pub struct ListRolesTool {
    client: RunnClient,
}

impl ListRolesTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListRolesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_roles".to_string(),
            description: "List all roles (raw upstream records).".to_string(),
            input_schema: json_schema_object(json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: &Arguments) -> Result<Value, DispatchError> {
        Ok(Value::Array(self.client.roles().list().await?))
    }
}

pub struct ListRolesByPersonTool {
    client: RunnClient,
}

impl ListRolesByPersonTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListRolesByPersonTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_roles_by_person".to_string(),
            description: "List the role(s) held by one person, following the person's roleId."
                .to_string(),
            input_schema: json_schema_object(
                json!({"person_id": json_schema_id("Person whose role to look up")}),
                vec!["person_id"],
            ),
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<Value, DispatchError> {
        let person_id = args::require_id(arguments, "person_id")?;

        let person = self.client.people().get(&person_id).await?;
        let Some(role_id) = person.get("roleId").and_then(id_key) else {
            // A person without a role is an empty listing, not an error.
            return Ok(json!([]));
        };
        let roles = self.client.roles().list().await?;
        Ok(Value::Array(filter_by_foreign_key(
            &roles,
            "id",
            &Value::String(role_id),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runn_sdk::ClientConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn follows_role_id_from_the_person_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people/7"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 7, "firstName": "Ada", "roleId": 2})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/roles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"values": [
                {"id": 1, "name": "Designer"},
                {"id": 2, "name": "Engineer"},
            ]})))
            .mount(&server)
            .await;

        let config = ClientConfig::new(url::Url::parse(&server.uri()).unwrap(), "k");
        let tool = ListRolesByPersonTool::new(RunnClient::new(config).unwrap());
        let arguments = json!({"person_id": 7});
        let result = tool.execute(arguments.as_object().unwrap()).await.unwrap();
        assert_eq!(result, json!([{"id": 2, "name": "Engineer"}]));
    }

    #[tokio::test]
    async fn person_without_role_yields_empty_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people/9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig::new(url::Url::parse(&server.uri()).unwrap(), "k");
        let tool = ListRolesByPersonTool::new(RunnClient::new(config).unwrap());
        let arguments = json!({"person_id": 9});
        let result = tool.execute(arguments.as_object().unwrap()).await.unwrap();
        assert_eq!(result, json!([]));
    }
}
