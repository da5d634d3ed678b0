//! Basic usage: list projects and print a small billable-hours summary.
//!
//! ```bash
//! RUNN_API_KEY=LIVE_... cargo run --example basic_usage
//! ```

use runn_core::aggregate::group_billable_hours;
use runn_sdk::{RunnClient, RunnResult};

#[tokio::main]
async fn main() -> RunnResult<()> {
    let client = RunnClient::from_env()?;

    let projects = client.projects().list().await?;
    println!("Found {} projects", projects.len());
    for project in projects.iter().take(5) {
        println!(
            "  {} - {}",
            project["id"],
            project["name"].as_str().unwrap_or("?")
        );
    }

    let actuals = client.actuals().list().await?;
    let buckets = group_billable_hours(&actuals);
    println!("\n{} project/person/month buckets:", buckets.len());
    for (key, hours) in buckets.iter().take(10) {
        println!(
            "  {} / {} / {}: {:.1}h",
            key.project_id, key.person_id, key.month, hours
        );
    }

    Ok(())
}
