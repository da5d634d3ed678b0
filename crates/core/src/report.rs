// Report rows and CSV serialization for grouped billable hours.

use crate::types::{BucketKey, ReportRow};
use std::collections::BTreeMap;

/// Flatten grouped hours into rows, ordered by project, person, then
/// month (the map's key order; months sort chronologically).
pub fn report_rows(buckets: &BTreeMap<BucketKey, f64>) -> Vec<ReportRow> {
    buckets
        .iter()
        .map(|(key, hours)| ReportRow {
            project_id: key.project_id.clone(),
            person_id: key.person_id.clone(),
            month: key.month.clone(),
            hours: *hours,
        })
        .collect()
}

/// Serialize rows as CSV text with a fixed header line.
pub fn rows_to_csv(rows: &[ReportRow]) -> String {
    let mut out = String::from("project_id,person_id,month,hours\n");
    for row in rows {
        out.push_str(&csv_field(&row.project_id));
        out.push(',');
        out.push_str(&csv_field(&row.person_id));
        out.push(',');
        out.push_str(&csv_field(&row.month));
        out.push(',');
        out.push_str(&row.hours.to_string());
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::group_billable_hours;
    use serde_json::json;

    #[test]
    fn rows_come_out_sorted_and_summed() {
        let records = vec![
            json!({"projectId": "P2", "personId": "B", "date": "2025-02-01", "hours": 8}),
            json!({"projectId": "P1", "personId": "A", "date": "2025-01-20", "hours": 3}),
            json!({"projectId": "P1", "personId": "A", "date": "2025-01-10", "hours": 5}),
        ];
        let rows = report_rows(&group_billable_hours(&records));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].project_id, "P1");
        assert_eq!(rows[0].month, "2025-01");
        assert_eq!(rows[0].hours, 8.0);
        assert_eq!(rows[1].project_id, "P2");
    }

    #[test]
    fn csv_has_fixed_header_and_one_line_per_row() {
        let rows = vec![ReportRow {
            project_id: "P1".to_string(),
            person_id: "A".to_string(),
            month: "2025-01".to_string(),
            hours: 8.0,
        }];
        let csv = rows_to_csv(&rows);
        assert_eq!(csv, "project_id,person_id,month,hours\nP1,A,2025-01,8\n");
    }

    #[test]
    fn csv_quotes_fields_containing_delimiters() {
        let rows = vec![ReportRow {
            project_id: "Acme, Inc".to_string(),
            person_id: "A\"B".to_string(),
            month: "2025-01".to_string(),
            hours: 1.5,
        }];
        let csv = rows_to_csv(&rows);
        assert!(csv.contains("\"Acme, Inc\",\"A\"\"B\",2025-01,1.5"));
    }
}
