//! The `search_docs` tool against the local engine.

use crate::common::sample_corpus;
use docsift::{handle_call, search_docs, search_docs_descriptor, Error, LocalSearch, SearchDocsParams};
use serde_json::json;

#[tokio::test]
async fn test_search_docs_returns_compact_hits() {
    let params = SearchDocsParams {
        query: "theme".into(),
        limit: Some(3),
    };
    let hits = search_docs(&LocalSearch::new(), &sample_corpus(), params).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].slug, "config");
    assert_eq!(hits[0].title, "Configuration");
    assert_eq!(hits[0].snippet, "Theme");
}

#[tokio::test]
async fn test_handle_call_default_limit() {
    let reply = handle_call(&LocalSearch::new(), &sample_corpus(), json!({"query": "o"}))
        .await
        .unwrap();
    let results = reply["results"].as_array().unwrap();
    assert!(!results.is_empty());
    assert!(results.len() <= 5);
    for hit in results {
        assert!(hit["slug"].is_string());
        assert!(hit["title"].is_string());
        assert!(hit["snippet"].is_string());
    }
}

#[tokio::test]
async fn test_handle_call_rejects_wrong_types() {
    let err = handle_call(&LocalSearch::new(), &sample_corpus(), json!({"query": 42}))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArguments(_)));
}

#[test]
fn test_descriptor_schema_matches_params() {
    let schema = search_docs_descriptor().input_schema;
    let properties = schema["properties"].as_object().unwrap();
    assert!(properties.contains_key("query"));
    assert!(properties.contains_key("limit"));
    assert_eq!(schema["additionalProperties"], json!(false));
}
