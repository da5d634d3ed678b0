// Billable-hours report exporter: fetches actuals from the upstream API,
// groups them by project/person/month, and writes the result as CSV.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use runn_core::aggregate::{group_billable_hours, group_billable_hours_strict};
use runn_core::filter::{filter_by_date_range, filter_by_foreign_key};
use runn_core::report::{report_rows, rows_to_csv};
use runn_core::DateRange;
use runn_sdk::RunnClient;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "runn-reports")]
#[command(about = "Export billable-hours CSV reports from the Runn API", long_about = None)]
struct Args {
    /// First day to include (inclusive), YYYY-MM-DD
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last day to include (inclusive), YYYY-MM-DD
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Only hours on this project
    #[arg(long)]
    project_id: Option<String>,

    /// Only hours by this person
    #[arg(long)]
    person_id: Option<String>,

    /// Write the CSV to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Fail on malformed records instead of skipping them
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let client = RunnClient::from_env()?;
    tracing::info!("fetching actuals");
    let actuals = client.actuals().list().await?;
    tracing::info!(records = actuals.len(), "actuals fetched");

    let csv = build_csv(
        &actuals,
        args.start,
        args.end,
        args.project_id.as_deref(),
        args.person_id.as_deref(),
        args.strict,
    )?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &csv)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{csv}"),
    }

    Ok(())
}

fn build_csv(
    actuals: &[Value],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    project_id: Option<&str>,
    person_id: Option<&str>,
    strict: bool,
) -> Result<String> {
    let mut actuals = actuals.to_vec();
    if start.is_some() || end.is_some() {
        let range = DateRange::new(
            start.unwrap_or(NaiveDate::MIN),
            end.unwrap_or(NaiveDate::MAX),
        );
        actuals = filter_by_date_range(&actuals, "date", &range);
    }
    if let Some(id) = project_id {
        actuals = filter_by_foreign_key(&actuals, "projectId", &Value::String(id.to_string()));
    }
    if let Some(id) = person_id {
        actuals = filter_by_foreign_key(&actuals, "personId", &Value::String(id.to_string()));
    }

    let buckets = if strict {
        group_billable_hours_strict(&actuals)?
    } else {
        group_billable_hours(&actuals)
    };
    Ok(rows_to_csv(&report_rows(&buckets)))
}
