//! Cursor-following aggregation over upstream list endpoints.
//!
//! Upstream list responses arrive as `{values: [...], nextCursor: "..."}`.
//! Concatenating pages in cursor order preserves upstream ordering with no
//! duplicates, assuming upstream pagination is consistent.

use crate::error::{RunnError, RunnResult};
use crate::transport::HttpTransport;
use serde_json::Value;
use tracing::debug;

/// One page of an upstream list response.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Value>,
    pub next_cursor: Option<String>,
}

/// A decoded list response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    /// A cursor page (the `values`/`nextCursor` convention, or a bare
    /// array treated as a single unpaginated page).
    Page(Page),
    /// Anything else, e.g. a single-record response.
    Other(Value),
}

/// Split a response body into records and continuation cursor.
pub fn parse_list_body(body: Value) -> ListBody {
    match body {
        Value::Array(items) => ListBody::Page(Page {
            items,
            next_cursor: None,
        }),
        Value::Object(mut map) if map.contains_key("values") => {
            let items = match map.remove("values") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            };
            let next_cursor = match map.remove("nextCursor") {
                Some(Value::String(s)) if !s.is_empty() => Some(s),
                _ => None,
            };
            ListBody::Page(Page { items, next_cursor })
        }
        other => ListBody::Other(other),
    }
}

/// Fetch every page of `path`, passing each response's cursor into the
/// next request until none is returned.
///
/// The loop is bounded by the configured page limit; a cursor that never
/// runs out (or cycles) fails with [`RunnError::PaginationLimitExceeded`]
/// rather than silently truncating. A non-list response is handed back as
/// a single record.
pub async fn list_all(
    transport: &HttpTransport,
    path: &str,
    query: &[(String, String)],
) -> RunnResult<Vec<Value>> {
    let page_limit = transport.config().page_limit;
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0u32;

    loop {
        if pages >= page_limit {
            return Err(RunnError::PaginationLimitExceeded { pages });
        }
        let body = transport
            .get(path, Some(&paged_query(transport, query, cursor.as_deref())))
            .await?;
        pages += 1;

        match parse_list_body(body) {
            ListBody::Page(page) => {
                items.extend(page.items);
                match page.next_cursor {
                    Some(next) => cursor = Some(next),
                    None => break,
                }
            }
            ListBody::Other(body) => {
                items.push(body);
                break;
            }
        }
    }

    debug!(path, pages, records = items.len(), "aggregated list response");
    Ok(items)
}

/// Fetch exactly one page of `path`, discarding any continuation cursor.
/// Partial results by design when the caller opts out of pagination.
pub async fn first_page(
    transport: &HttpTransport,
    path: &str,
    query: &[(String, String)],
) -> RunnResult<Vec<Value>> {
    let body = transport
        .get(path, Some(&paged_query(transport, query, None)))
        .await?;
    Ok(match parse_list_body(body) {
        ListBody::Page(page) => page.items,
        ListBody::Other(body) => vec![body],
    })
}

fn paged_query(
    transport: &HttpTransport,
    query: &[(String, String)],
    cursor: Option<&str>,
) -> Vec<(String, String)> {
    let mut pairs = query.to_vec();
    if !pairs.iter().any(|(key, _)| key == "limit") {
        pairs.push(("limit".to_string(), transport.config().page_size.to_string()));
    }
    if let Some(cursor) = cursor {
        pairs.push(("cursor".to_string(), cursor.to_string()));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport_for(server: &MockServer) -> HttpTransport {
        let config = ClientConfig::new(url::Url::parse(&server.uri()).unwrap(), "test-key");
        HttpTransport::new(Arc::new(config)).unwrap()
    }

    fn records(range: std::ops::Range<i64>) -> Vec<Value> {
        range.map(|id| json!({"id": id})).collect()
    }

    async fn mount_three_pages(server: &MockServer) {
        // Cursor-specific mocks first; wiremock picks the first match in
        // mount order, so the catch-all page-one mock goes last.
        Mock::given(method("GET"))
            .and(path("/projects"))
            .and(query_param("cursor", "c1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "values": records(50..100),
                "nextCursor": "c2",
            })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .and(query_param("cursor", "c2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"values": records(100..120)})),
            )
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "values": records(0..50),
                "nextCursor": "c1",
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn concatenates_pages_in_cursor_order() {
        let server = MockServer::start().await;
        mount_three_pages(&server).await;

        let transport = transport_for(&server);
        let items = list_all(&transport, "/projects", &[]).await.unwrap();
        assert_eq!(items.len(), 120);
        let ids: Vec<i64> = items.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, (0..120).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn aggregation_is_idempotent_under_stable_upstream() {
        let server = MockServer::start().await;
        mount_three_pages(&server).await;

        let transport = transport_for(&server);
        let first = list_all(&transport, "/projects", &[]).await.unwrap();
        let second = list_all(&transport, "/projects", &[]).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn cycling_cursor_trips_the_page_bound() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/actuals"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "values": [{"id": 1}],
                "nextCursor": "again",
            })))
            .expect(5)
            .mount(&server)
            .await;

        let config = ClientConfig::new(url::Url::parse(&server.uri()).unwrap(), "k")
            .with_page_limit(5);
        let transport = HttpTransport::new(Arc::new(config)).unwrap();
        let err = list_all(&transport, "/actuals", &[]).await.unwrap_err();
        match err {
            RunnError::PaginationLimitExceeded { pages } => assert_eq!(pages, 5),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn first_page_issues_exactly_one_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "values": records(0..10),
                "nextCursor": "more",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let items = first_page(&transport, "/people", &[]).await.unwrap();
        assert_eq!(items.len(), 10);
    }

    #[tokio::test]
    async fn bare_arrays_are_a_single_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(records(0..3)))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let items = list_all(&transport, "/teams", &[]).await.unwrap();
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn non_list_bodies_are_preserved() {
        let body = json!({"id": 7, "name": "solo"});
        assert_eq!(parse_list_body(body.clone()), ListBody::Other(body));
    }

    #[test]
    fn blank_cursor_terminates() {
        let page = match parse_list_body(json!({"values": [], "nextCursor": ""})) {
            ListBody::Page(page) => page,
            other => panic!("unexpected body: {other:?}"),
        };
        assert_eq!(page.next_cursor, None);
    }
}
