// Generic upstream passthrough. Looser validation on purpose: method and
// path presence are the only checks, so any upstream endpoint is
// reachable, including ones that mutate state. The tool is registered as
// write-capable and every invocation is logged with its method and path.

use crate::args::{self, Arguments};
use crate::error::DispatchError;
use crate::protocol::ToolSchema;
use crate::tools::{json_schema_boolean, json_schema_object, json_schema_string, Tool, ToolTier};
use reqwest::Method;
use runn_sdk::RunnClient;
use serde_json::{json, Value};
use tracing::warn;

pub struct RunnRequestTool {
    client: RunnClient,
}

impl RunnRequestTool {
    pub fn new(client: RunnClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for RunnRequestTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "runn_request".to_string(),
            description:
                "Issue an arbitrary request against the upstream API. Escape hatch for endpoints \
                 without a dedicated tool; write methods mutate upstream state. GETs return the \
                 listed records (all pages, or one page when paginate is false); write methods \
                 return {status, body}."
                    .to_string(),
            input_schema: json_schema_object(
                json!({
                    "method": {
                        "type": "string",
                        "enum": ["GET", "POST", "PATCH", "PUT", "DELETE"],
                        "description": "HTTP method"
                    },
                    "path": json_schema_string("Upstream-relative path, e.g. /projects"),
                    "query": {
                        "type": "object",
                        "description": "Query parameters (scalar values only)"
                    },
                    "body": {
                        "description": "JSON request body for write methods"
                    },
                    "paginate": json_schema_boolean(
                        "Follow pagination cursors on GET (default: true)"
                    ),
                }),
                vec!["method", "path"],
            ),
        }
    }

    async fn execute(&self, arguments: &Arguments) -> Result<Value, DispatchError> {
        let method = parse_method(args::require_str(arguments, "method")?)?;
        let path = args::require_str(arguments, "path")?;
        let paginate = args::optional_bool(arguments, "paginate", true)?;
        let query = query_pairs(arguments.get("query"))?;
        let body = arguments.get("body").filter(|value| !value.is_null());

        warn!(method = %method, path, "runn_request passthrough invoked");

        if method == Method::GET && body.is_none() {
            let records = if paginate {
                self.client.list_all(path, &query).await?
            } else {
                // One request, cursor discarded: a partial result by design.
                self.client.list_first_page(path, &query).await?
            };
            return Ok(Value::Array(records));
        }

        let (status, body) = self
            .client
            .transport()
            .request(method, path, Some(&query), body)
            .await?;
        Ok(json!({"status": status, "body": body}))
    }

    fn tier(&self) -> ToolTier {
        ToolTier::Write
    }
}

fn parse_method(raw: &str) -> Result<Method, DispatchError> {
    match raw.to_ascii_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PATCH" => Ok(Method::PATCH),
        "PUT" => Ok(Method::PUT),
        "DELETE" => Ok(Method::DELETE),
        other => Err(DispatchError::invalid(
            "method",
            format!("unsupported method `{other}`"),
        )),
    }
}

fn query_pairs(value: Option<&Value>) -> Result<Vec<(String, String)>, DispatchError> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Ok(Vec::new());
    };
    let Value::Object(map) = value else {
        return Err(DispatchError::invalid("query", "expected an object"));
    };
    map.iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => {
                    return Err(DispatchError::invalid(
                        "query",
                        format!("unsupported value for key `{key}`"),
                    ))
                }
            };
            Ok((key.clone(), rendered))
        })
        .collect()
}
