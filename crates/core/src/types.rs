use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inclusive calendar-date range used to filter upstream records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// True when `date` falls within the range, bounds included.
    /// An inverted range (start > end) contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Grouping key for billable-hours aggregation: project, person, and
/// calendar month. Months are `YYYY-MM`, so lexicographic order is
/// chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BucketKey {
    pub project_id: String,
    pub person_id: String,
    pub month: String,
}

/// One line of the billable-hours report, the shape handed to report
/// consumers (the `billable_hours` tool and the CSV exporter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub project_id: String,
    pub person_id: String,
    pub month: String,
    pub hours: f64,
}

/// Normalize an upstream identifier to its string form so numeric and
/// string ids compare and group consistently.
pub fn id_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse the date portion of an upstream field value. Accepts plain
/// `YYYY-MM-DD` as well as ISO datetimes; only the first ten characters
/// are read.
pub fn parse_record_date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?;
    let prefix = s.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = DateRange::new(date("2025-01-01"), date("2025-01-31"));
        assert!(range.contains(date("2025-01-01")));
        assert!(range.contains(date("2025-01-31")));
        assert!(!range.contains(date("2025-02-01")));
        assert!(!range.contains(date("2024-12-31")));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = DateRange::new(date("2025-02-01"), date("2025-01-01"));
        assert!(!range.contains(date("2025-01-15")));
        assert!(!range.contains(date("2025-02-01")));
    }

    #[test]
    fn id_key_normalizes_numbers_and_strings() {
        assert_eq!(id_key(&json!(5)), Some("5".to_string()));
        assert_eq!(id_key(&json!("5")), Some("5".to_string()));
        assert_eq!(id_key(&json!("P1")), Some("P1".to_string()));
        assert_eq!(id_key(&json!(null)), None);
        assert_eq!(id_key(&json!([1, 2])), None);
    }

    #[test]
    fn record_dates_accept_datetime_suffixes() {
        assert_eq!(
            parse_record_date(&json!("2025-01-10")),
            Some(date("2025-01-10"))
        );
        assert_eq!(
            parse_record_date(&json!("2025-01-10T09:30:00Z")),
            Some(date("2025-01-10"))
        );
        assert_eq!(parse_record_date(&json!("not-a-date")), None);
        assert_eq!(parse_record_date(&json!(20250110)), None);
    }
}
