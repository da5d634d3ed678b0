// Billable-hours grouping over actuals records.

use crate::types::{id_key, parse_record_date, BucketKey};
use serde_json::Value;
use std::collections::BTreeMap;

/// A record the strict grouping mode refuses to fold in.
#[derive(Debug, thiserror::Error)]
#[error("malformed record at index {index}: {reason}")]
pub struct MalformedRecord {
    pub index: usize,
    pub reason: String,
}

/// Group records by (project, person, month) and sum their hours.
///
/// Records missing an id, an hours value, or a parseable date are skipped.
/// Accumulation is commutative, so the result is independent of input
/// order. The `BTreeMap` keeps buckets sorted by project, person, month.
pub fn group_billable_hours(records: &[Value]) -> BTreeMap<BucketKey, f64> {
    let mut buckets = BTreeMap::new();
    for record in records {
        match classify(record) {
            Ok((key, hours)) => *buckets.entry(key).or_insert(0.0) += hours,
            Err(reason) => {
                tracing::debug!(reason, "skipping record in billable-hours grouping");
            }
        }
    }
    buckets
}

/// Strict-mode grouping: the first malformed record fails the whole
/// aggregation instead of being skipped. Opt-in via configuration.
pub fn group_billable_hours_strict(
    records: &[Value],
) -> Result<BTreeMap<BucketKey, f64>, MalformedRecord> {
    let mut buckets = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        let (key, hours) = classify(record).map_err(|reason| MalformedRecord {
            index,
            reason: reason.to_string(),
        })?;
        *buckets.entry(key).or_insert(0.0) += hours;
    }
    Ok(buckets)
}

fn classify(record: &Value) -> Result<(BucketKey, f64), &'static str> {
    let project_id = record
        .get("projectId")
        .and_then(id_key)
        .ok_or("missing projectId")?;
    let person_id = record
        .get("personId")
        .and_then(id_key)
        .ok_or("missing personId")?;
    let date = record
        .get("date")
        .and_then(parse_record_date)
        .ok_or("missing or unparseable date")?;
    let hours = record
        .get("hours")
        .and_then(Value::as_f64)
        .ok_or("missing hours")?;
    let key = BucketKey {
        project_id,
        person_id,
        month: date.format("%Y-%m").to_string(),
    };
    Ok((key, hours))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<Value> {
        vec![
            json!({"projectId": "P1", "personId": "A", "date": "2025-01-10", "hours": 5}),
            json!({"projectId": "P1", "personId": "A", "date": "2025-01-20", "hours": 3}),
            json!({"projectId": "P2", "personId": "B", "date": "2025-02-01", "hours": 8}),
        ]
    }

    fn key(project: &str, person: &str, month: &str) -> BucketKey {
        BucketKey {
            project_id: project.to_string(),
            person_id: person.to_string(),
            month: month.to_string(),
        }
    }

    #[test]
    fn groups_by_project_person_and_month() {
        let buckets = group_billable_hours(&sample());
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[&key("P1", "A", "2025-01")], 8.0);
        assert_eq!(buckets[&key("P2", "B", "2025-02")], 8.0);
    }

    #[test]
    fn grouping_is_order_independent() {
        let forward = group_billable_hours(&sample());
        let mut reversed = sample();
        reversed.reverse();
        assert_eq!(forward, group_billable_hours(&reversed));
    }

    #[test]
    fn numeric_ids_key_the_same_bucket_as_their_string_form() {
        let records = vec![
            json!({"projectId": 7, "personId": 1, "date": "2025-03-03", "hours": 2.5}),
            json!({"projectId": "7", "personId": "1", "date": "2025-03-10", "hours": 1.5}),
        ];
        let buckets = group_billable_hours(&records);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[&key("7", "1", "2025-03")], 4.0);
    }

    #[test]
    fn malformed_records_are_skipped_silently() {
        let mut records = sample();
        records.push(json!({"projectId": "P1", "date": "2025-01-10", "hours": 4}));
        records.push(json!({"projectId": "P1", "personId": "A", "date": "???", "hours": 4}));
        records.push(json!({"projectId": "P1", "personId": "A", "date": "2025-01-12"}));
        let buckets = group_billable_hours(&records);
        assert_eq!(buckets[&key("P1", "A", "2025-01")], 8.0);
    }

    #[test]
    fn strict_mode_fails_on_the_first_malformed_record() {
        let mut records = sample();
        records.push(json!({"projectId": "P3", "personId": "C", "date": "???", "hours": 1}));
        let err = group_billable_hours_strict(&records).unwrap_err();
        assert_eq!(err.index, 3);
        assert!(err.reason.contains("date"));
    }

    #[test]
    fn strict_mode_matches_default_on_clean_input() {
        assert_eq!(
            group_billable_hours_strict(&sample()).unwrap(),
            group_billable_hours(&sample())
        );
    }
}
