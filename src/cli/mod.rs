// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! `search` ranks a JSON corpus locally, `inspect` shows what the index sees
//! for each page, and `remote` queries a search endpoint through the caching
//! client. `--config` points at a TOML file layered under `DOCSIFT_*`
//! environment variables.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "docsift", about = "Fuzzy search for documentation sites", version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a JSON array of documents
    Search {
        /// Path to the documents file
        docs: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results (defaults to `default_limit` from config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the normalized fields and word lists for each document
    Inspect {
        /// Path to the documents file
        docs: PathBuf,
    },

    /// Query a remote search endpoint
    #[cfg(feature = "remote")]
    Remote {
        /// Endpoint URL, e.g. https://docs.example.com/api/search
        endpoint: String,

        /// Search query
        query: String,

        /// Maximum number of results (defaults to `default_limit` from config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
