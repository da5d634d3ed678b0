// Tool trait and registry.

use crate::args::Arguments;
use crate::error::DispatchError;
use crate::protocol::ToolSchema;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A named operation the dispatcher can invoke.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// The schema advertised by `tools/list`.
    fn schema(&self) -> ToolSchema;

    /// Run the tool. Arguments are validated before any upstream request
    /// is issued; the result is a JSON-serializable value.
    async fn execute(&self, arguments: &Arguments) -> Result<Value, DispatchError>;

    /// Whether the tool can mutate upstream state.
    fn tier(&self) -> ToolTier {
        ToolTier::ReadOnly
    }
}

/// Write capability marker. Invocations of write-capable tools are logged
/// distinctly by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolTier {
    ReadOnly,
    Write,
}

/// Fixed registry mapping tool name to implementation.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool under its schema name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        self.tools.insert(schema.name.clone(), tool);
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all tool schemas, sorted by name for a stable catalog.
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self.tools.values().map(|t| t.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Check if a tool exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for building tool input schemas

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_boolean(description: &str) -> Value {
    serde_json::json!({
        "type": "boolean",
        "description": description
    })
}

/// Upstream identifiers arrive as numbers or strings; accept both.
pub fn json_schema_id(description: &str) -> Value {
    serde_json::json!({
        "type": ["string", "number"],
        "description": description
    })
}

/// Calendar date in `YYYY-MM-DD` form.
pub fn json_schema_date(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "format": "date",
        "description": description
    })
}
