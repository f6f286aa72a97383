//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::index::Corpus;
use crate::types::{Heading, SearchDoc};

/// A document with a derived slug and no description or headings.
pub fn make_doc(id: usize, title: &str, content: &str) -> SearchDoc {
    SearchDoc::new(format!("doc-{id}"), title, content)
}

/// A document whose only text is its title.
pub fn make_doc_simple(id: usize) -> SearchDoc {
    make_doc(id, &format!("Doc {id}"), "")
}

/// A document with one heading per `(id, text, level)`.
pub fn make_doc_with_headings(id: usize, title: &str, headings: &[(&str, &str, u8)]) -> SearchDoc {
    headings
        .iter()
        .fold(make_doc(id, title, ""), |doc, (anchor, text, level)| {
            doc.with_heading(Heading::new(*anchor, *text, *level))
        })
}

/// The corpus most docs-site tests start from.
pub fn sample_corpus() -> Corpus {
    Corpus::new(vec![
        SearchDoc::new("getting-started", "Getting Started", "Install the CLI and create a project.")
            .with_description("First steps")
            .with_heading(Heading::new("install", "Install", 2))
            .with_heading(Heading::new("first-project", "Your first project", 3)),
        SearchDoc::new("auth", "Authentication", "Configure OAuth providers for SSO.")
            .with_description("Sign-in and identity")
            .with_heading(Heading::new("oauth", "OAuth Providers", 2)),
        SearchDoc::new("config", "Configuration", "Every option in docs.config.ts, explained.")
            .with_heading(Heading::new("theme", "Theme", 2)),
        SearchDoc::new("deploy", "Deployment", "Ship the static build to any host."),
        SearchDoc::new("intro", "Introduction", "Welcome."),
    ])
}
