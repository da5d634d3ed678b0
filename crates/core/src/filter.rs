// Pure record filters. A malformed individual record is dropped from the
// result, never an error for the whole operation.

use crate::types::{id_key, parse_record_date, DateRange};
use serde_json::Value;

/// Keep records whose `field` parses as a calendar date inside `range`.
/// Records with a missing or unparseable date field are skipped.
pub fn filter_by_date_range(records: &[Value], field: &str, range: &DateRange) -> Vec<Value> {
    records
        .iter()
        .filter(|record| {
            record
                .get(field)
                .and_then(parse_record_date)
                .is_some_and(|date| range.contains(date))
        })
        .cloned()
        .collect()
}

/// Keep records whose `field` equals `value` under id normalization, so a
/// numeric upstream id matches its string form and vice versa. Records
/// without the field are skipped.
pub fn filter_by_foreign_key(records: &[Value], field: &str, value: &Value) -> Vec<Value> {
    let Some(target) = id_key(value) else {
        return Vec::new();
    };
    records
        .iter()
        .filter(|record| {
            record
                .get(field)
                .and_then(id_key)
                .is_some_and(|key| key == target)
        })
        .cloned()
        .collect()
}
