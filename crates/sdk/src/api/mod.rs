//! Thin typed surfaces over the upstream resources.
//!
//! Each surface borrows the client and forwards to the pagination layer;
//! records come back as untyped `serde_json::Value`.

mod actuals;
mod assignments;
mod clients;
mod people;
mod projects;
mod rate_cards;
mod roles;
mod skills;
mod teams;

pub use actuals::ActualsApi;
pub use assignments::AssignmentsApi;
pub use clients::ClientsApi;
pub use people::PeopleApi;
pub use projects::ProjectsApi;
pub use rate_cards::RateCardsApi;
pub use roles::RolesApi;
pub use skills::SkillsApi;
pub use teams::TeamsApi;
