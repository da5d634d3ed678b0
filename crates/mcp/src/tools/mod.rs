pub mod actuals;
pub mod assignments;
pub mod billable;
pub mod clients;
pub mod passthrough;
pub mod people;
pub mod projects;
pub mod rate_cards;
mod registry;
pub mod roles;
pub mod skills;
pub mod teams;

pub use actuals::{
    ListActualsByDateRangeTool, ListActualsByPersonTool, ListActualsByProjectTool, ListActualsTool,
};
pub use assignments::{
    ListAssignmentsByPersonTool, ListAssignmentsByProjectTool, ListAssignmentsTool,
};
pub use billable::BillableHoursTool;
pub use clients::ListClientsTool;
pub use passthrough::RunnRequestTool;
pub use people::{ListPeopleByTeamTool, ListPeopleTool};
pub use projects::ListProjectsTool;
pub use rate_cards::{ListRateCardsByProjectTool, ListRateCardsTool};
pub use registry::{
    json_schema_boolean, json_schema_date, json_schema_id, json_schema_object, json_schema_string,
    Tool, ToolRegistry, ToolTier,
};
pub use roles::{ListRolesByPersonTool, ListRolesTool};
pub use skills::ListSkillsTool;
pub use teams::ListTeamsTool;

use runn_sdk::RunnClient;
use std::sync::Arc;

/// The complete tool catalog wired to one upstream client.
pub fn default_registry(client: RunnClient, strict_aggregation: bool) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(ListProjectsTool::new(client.clone())));
    registry.register(Arc::new(ListPeopleTool::new(client.clone())));
    registry.register(Arc::new(ListPeopleByTeamTool::new(client.clone())));
    registry.register(Arc::new(BillableHoursTool::new(
        client.clone(),
        strict_aggregation,
    )));
    registry.register(Arc::new(ListClientsTool::new(client.clone())));
    registry.register(Arc::new(ListAssignmentsTool::new(client.clone())));
    registry.register(Arc::new(ListAssignmentsByPersonTool::new(client.clone())));
    registry.register(Arc::new(ListAssignmentsByProjectTool::new(client.clone())));
    registry.register(Arc::new(ListActualsTool::new(client.clone())));
    registry.register(Arc::new(ListActualsByDateRangeTool::new(client.clone())));
    registry.register(Arc::new(ListActualsByPersonTool::new(client.clone())));
    registry.register(Arc::new(ListActualsByProjectTool::new(client.clone())));
    registry.register(Arc::new(ListRolesTool::new(client.clone())));
    registry.register(Arc::new(ListRolesByPersonTool::new(client.clone())));
    registry.register(Arc::new(ListSkillsTool::new(client.clone())));
    registry.register(Arc::new(ListTeamsTool::new(client.clone())));
    registry.register(Arc::new(ListRateCardsTool::new(client.clone())));
    registry.register(Arc::new(ListRateCardsByProjectTool::new(client.clone())));
    registry.register(Arc::new(RunnRequestTool::new(client)));

    registry
}
