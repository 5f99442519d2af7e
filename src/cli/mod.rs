// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fitsearch command-line interface.
//!
//! Three subcommands over a static index file: `search` to rank a query the
//! way the dropdown would, `page` to render the results page for a URL, and
//! `inspect` to summarize what the index contains.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fitsearch",
    about = "Query and inspect static site search indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a query against an index file
    Search {
        /// Path to the index JSON (e.g. public/search-index.json)
        index: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render the results page for a URL
    Page {
        /// Path to the index JSON
        index: PathBuf,

        /// Results page URL, query parameter included
        #[arg(short, long, default_value = "/search")]
        url: String,

        /// Locale prefix applied to result links (e.g. "es")
        #[arg(long)]
        locale: Option<String>,

        /// Locale whose paths carry no prefix
        #[arg(long, default_value = "en")]
        default_locale: String,
    },

    /// Summarize an index file by type and category
    Inspect {
        /// Path to the index JSON
        index: PathBuf,
    },
}
