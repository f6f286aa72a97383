// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `search_docs` as a tool callable by an assistant.
//!
//! Arguments arrive as raw JSON and are validated here. The reply is a
//! compact list of `{slug, title, snippet}` so it fits in a model context
//! without dragging full page bodies along.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::adapter::SearchAdapter;
use crate::error::{Error, Result};
use crate::index::Corpus;
use crate::query::{normalize_query, truncate_chars};
use crate::types::SearchResult;

pub const TOOL_NAME: &str = "search_docs";
pub const DEFAULT_TOOL_LIMIT: usize = 5;
pub const MAX_TOOL_LIMIT: usize = 50;

/// Snippets built from a description or body are cut to this many characters.
const FALLBACK_SNIPPET_LEN: usize = 160;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchDocsParams {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl SearchDocsParams {
    fn validate(&self) -> Result<usize> {
        if normalize_query(&self.query).is_empty() {
            return Err(Error::InvalidArguments("query must not be empty".into()));
        }
        match self.limit {
            None => Ok(DEFAULT_TOOL_LIMIT),
            Some(limit) if (1..=MAX_TOOL_LIMIT).contains(&limit) => Ok(limit),
            Some(limit) => Err(Error::InvalidArguments(format!(
                "limit must be between 1 and {MAX_TOOL_LIMIT}, got {limit}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocHit {
    pub slug: String,
    pub title: String,
    pub snippet: String,
}

impl From<SearchResult> for DocHit {
    fn from(result: SearchResult) -> Self {
        let snippet = match (result.snippet, result.doc.description) {
            (Some(snippet), _) => snippet,
            (None, Some(description)) => description,
            (None, None) => truncate_chars(result.doc.content.trim(), FALLBACK_SNIPPET_LEN).to_string(),
        };
        Self {
            slug: result.doc.slug,
            title: result.doc.title,
            snippet,
        }
    }
}

/// Name, description and JSON Schema for tool registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

pub fn search_docs_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME,
        description: "Search the documentation and return the most relevant pages with a short snippet each.",
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "What to look for, in plain words."
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": MAX_TOOL_LIMIT,
                    "default": DEFAULT_TOOL_LIMIT
                }
            },
            "required": ["query"],
            "additionalProperties": false
        }),
    }
}

pub async fn search_docs(
    adapter: &dyn SearchAdapter,
    corpus: &Corpus,
    params: SearchDocsParams,
) -> Result<Vec<DocHit>> {
    let limit = params.validate()?;
    let results = adapter.search(&params.query, corpus, Some(limit)).await?;
    Ok(results.into_iter().map(DocHit::from).collect())
}

/// Raw JSON in, raw JSON out: `{"results": [...]}`.
pub async fn handle_call(adapter: &dyn SearchAdapter, corpus: &Corpus, arguments: Value) -> Result<Value> {
    let params: SearchDocsParams =
        serde_json::from_value(arguments).map_err(|err| Error::InvalidArguments(err.to_string()))?;
    let hits = search_docs(adapter, corpus, params).await?;
    Ok(json!({ "results": hits }))
}
