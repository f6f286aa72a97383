//! Search for documentation sites: a local fuzzy ranker and a caching
//! client for server-side search, behind one adapter interface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│   index.rs   │────▶│  scoring/    │
//! │ (SearchDoc, │     │ (Corpus,     │     │ (fuzzy, term │
//! │  Heading)   │     │  IndexedDoc) │     │  tiers, top) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!        ┌────────────────────────────────────────┘
//!        ▼
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  search/     │   │  remote/     │   │ providers/   │
//! │ LocalSearch  │   │ SearchClient │   │ Algolia,     │
//! │              │   │ RemoteSearch │   │ Orama        │
//! └──────────────┘   └──────────────┘   └──────────────┘
//!        │                  │                  │
//!        └──────────────────┼──────────────────┘
//!                           ▼
//!                 ┌───────────────────┐
//!                 │ adapter.rs        │
//!                 │ SearchAdapter     │──▶ tools.rs (search_docs)
//!                 └───────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use docsift::{Corpus, LocalSearch, SearchDoc};
//!
//! let corpus = Corpus::new(vec![
//!     SearchDoc::new("auth", "Authentication", "Configure OAuth providers for SSO."),
//!     SearchDoc::new("intro", "Introduction", "Welcome."),
//! ]);
//!
//! let results = LocalSearch::new().search("oauth", &corpus, Some(10));
//! assert_eq!(results[0].doc.slug, "auth");
//! ```
//!
//! # Features
//!
//! - `parallel` (default): index large corpora with rayon
//! - `remote` (default): the HTTP client, session and hosted providers

pub mod adapter;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod query;
pub mod scoring;
pub mod search;
pub mod tools;
pub mod types;

#[cfg(feature = "remote")]
pub mod providers;
#[cfg(feature = "remote")]
pub mod remote;

#[doc(hidden)]
pub mod testing;

pub use adapter::SearchAdapter;
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use fuzzy::{fuzzy_score, typo_match};
pub use index::{build_index, Corpus, IndexedDoc};
pub use query::{normalize_query, trim_query, ParsedQuery, QueryPolicy, MAX_QUERY_LEN};
pub use scoring::{score_doc, DocScore, Weights};
pub use search::{search, LocalSearch};
pub use tools::{handle_call, search_docs, search_docs_descriptor, DocHit, SearchDocsParams};
pub use types::{DocMeta, Heading, SearchDoc, SearchResult};

#[cfg(feature = "remote")]
pub use providers::{AlgoliaSearch, OramaSearch};
#[cfg(feature = "remote")]
pub use remote::{Cached, RemoteHit, RemoteSearch, SearchClient, SearchSession, SearchState};
