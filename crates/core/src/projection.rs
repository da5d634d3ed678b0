// Reduced output shapes for tools whose documented default is not the raw
// upstream record.

use serde_json::{json, Value};

/// `{id, name}` shape for projects, clients, and other named resources.
pub fn project_summary(record: &Value) -> Value {
    json!({
        "id": record.get("id").cloned().unwrap_or(Value::Null),
        "name": record.get("name").cloned().unwrap_or(Value::Null),
    })
}

/// `{id, name, email}` shape for people.
pub fn person_summary(record: &Value) -> Value {
    json!({
        "id": record.get("id").cloned().unwrap_or(Value::Null),
        "name": person_name(record),
        "email": record.get("email").cloned().unwrap_or(Value::Null),
    })
}

// Upstream people carry firstName/lastName rather than a single name
// field; assemble one when name is absent.
fn person_name(record: &Value) -> Value {
    if let Some(name) = record.get("name").and_then(Value::as_str) {
        return Value::String(name.to_string());
    }
    let first = record.get("firstName").and_then(Value::as_str).unwrap_or("");
    let last = record.get("lastName").and_then(Value::as_str).unwrap_or("");
    let full = format!("{first} {last}");
    let full = full.trim();
    if full.is_empty() {
        Value::Null
    } else {
        Value::String(full.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_summary_keeps_only_id_and_name() {
        let record = json!({"id": 12, "name": "Apollo", "budget": 100000, "clientId": 3});
        assert_eq!(project_summary(&record), json!({"id": 12, "name": "Apollo"}));
    }

    #[test]
    fn person_summary_builds_name_from_parts() {
        let record = json!({"id": 5, "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com"});
        assert_eq!(
            person_summary(&record),
            json!({"id": 5, "name": "Ada Lovelace", "email": "ada@example.com"})
        );
    }

    #[test]
    fn person_summary_prefers_explicit_name() {
        let record = json!({"id": 5, "name": "Ada L.", "firstName": "Ada", "lastName": "Lovelace"});
        assert_eq!(person_summary(&record)["name"], "Ada L.");
    }

    #[test]
    fn person_summary_trims_partial_names() {
        let record = json!({"id": 5, "firstName": "Ada"});
        assert_eq!(person_summary(&record)["name"], "Ada");
        let record = json!({"id": 6});
        assert_eq!(person_summary(&record)["name"], Value::Null);
    }
}
