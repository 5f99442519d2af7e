use anyhow::{Context, Result};
use clap::Parser;
use futures::executor::block_on;
use std::collections::BTreeMap;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use fitsearch::{
    is_searchable, load_index, parse_index, rank, DocumentType, FileSource, LocalePrefix,
    ResultsPage, ResultsView, SearchResult, TracingSink, MIN_QUERY_CHARS,
    RESULTS_PAGE_COMPONENT,
};

mod cli;
use cli::display::{
    category_badge, heading, row, score_value, section_bot, section_mid, section_top, truncate,
    type_badge,
};
use cli::{Cli, Commands};

/// Component tag for loads started from the `search` command.
const CLI_COMPONENT: &str = "fitsearch-cli";

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            json,
        } => run_search(&index, &query, limit, json),
        Commands::Page {
            index,
            url,
            locale,
            default_locale,
        } => run_page(&index, &url, locale, default_locale),
        Commands::Inspect { index } => run_inspect(&index),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Rank one query like the dropdown does. A broken index degrades to zero
/// results with a logged warning.
fn run_search(index_path: &Path, query: &str, limit: usize, json: bool) -> Result<()> {
    if !is_searchable(query) {
        eprintln!(
            "⚠️  Queries need at least {} characters; nothing to search",
            MIN_QUERY_CHARS
        );
        return Ok(());
    }

    let sink = TracingSink::new(CLI_COMPONENT);
    let index = block_on(load_index(&FileSource::new(index_path), &sink));
    let results = rank(&index, query, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    section_top(&format!("\"{}\" in {} documents", query, index.len()));
    if results.is_empty() {
        row(&format!("  No results found for \"{}\"", query));
    }
    for (i, result) in results.iter().enumerate() {
        print_result(i, result);
    }
    section_bot();
    Ok(())
}

fn print_result(position: usize, result: &SearchResult) {
    let doc = &result.document;
    row(&format!(
        " {:>2}. {} {} {}",
        position + 1,
        score_value(result.score),
        type_badge(doc.kind),
        heading(&truncate(&doc.title, 50))
    ));
    row(&format!("              {}", truncate(&doc.description, 64)));
    let category = doc
        .category
        .as_deref()
        .map(category_badge)
        .unwrap_or_default();
    row(&format!("              {} {}", truncate(&doc.url, 48), category));
}

/// Render the results page the way a browser landing on `url` would see it
/// once the index has arrived.
fn run_page(
    index_path: &Path,
    url: &str,
    locale: Option<String>,
    default_locale: String,
) -> Result<()> {
    let mut page = ResultsPage::from_url(url);
    if let Some(locale) = locale {
        page = page.with_localizer(LocalePrefix::new(locale, default_locale));
    }

    page.mount();
    let sink = TracingSink::new(RESULTS_PAGE_COMPONENT);
    block_on(page.load(&FileSource::new(index_path), &sink));

    match page.view() {
        ResultsView::Loading => {
            section_top("Search");
            row("  Loading…");
        }
        ResultsView::Prompt { popular } => {
            section_top("Search");
            row("  Start typing to search calculators and articles");
            section_mid("Popular");
            for link in popular {
                row(&format!("  {} → {}", link.title, link.url));
            }
        }
        ResultsView::Found { query, entries } => {
            section_top(&format!("{} results for \"{}\"", entries.len(), query));
            for (i, entry) in entries.iter().enumerate() {
                let target = page
                    .open(i)
                    .map(|nav| nav.url().to_string())
                    .unwrap_or_else(|| entry.url.clone());
                row(&format!(
                    " {:>3}. {} {}",
                    i + 1,
                    heading(&truncate(&entry.title, 56)),
                    entry.type_label
                ));
                row(&format!("       {}", truncate(&entry.description, 70)));
                let mut badges: Vec<String> =
                    entry.category.as_deref().map(category_badge).into_iter().collect();
                badges.extend(entry.tags.iter().map(|t| format!("[{}]", t)));
                row(&format!("       {} {}", truncate(&target, 40), badges.join(" ")));
            }
        }
        ResultsView::NoResults { query, popular } => {
            section_top("No results");
            row(&format!("  No results found for \"{}\"", query));
            section_mid("Popular");
            for link in popular {
                row(&format!("  {} → {}", link.title, link.url));
            }
        }
    }
    section_bot();
    Ok(())
}

/// Strict parse (no degradation): inspecting a broken index should say so.
fn run_inspect(index_path: &Path) -> Result<()> {
    let body = std::fs::read_to_string(index_path)
        .with_context(|| format!("Failed to read {}", index_path.display()))?;
    let index = parse_index(&body)
        .with_context(|| format!("Failed to parse {}", index_path.display()))?;

    let mut by_type: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    let mut with_content = 0usize;
    let mut tag_count = 0usize;

    for doc in index.documents() {
        *by_type.entry(doc.kind.label()).or_default() += 1;
        *by_category
            .entry(doc.category.as_deref().unwrap_or("(none)"))
            .or_default() += 1;
        if doc.content.is_some() {
            with_content += 1;
        }
        tag_count += doc.tags.len();
    }

    section_top(&format!("{}", index_path.display()));
    row(&format!("  Documents:      {}", index.len()));
    row(&format!("  With content:   {}", with_content));
    row(&format!("  Tags (total):   {}", tag_count));
    section_mid("Types");
    for kind in [DocumentType::Calculator, DocumentType::Article, DocumentType::Page] {
        let count = by_type.get(kind.label()).copied().unwrap_or(0);
        row(&format!("  {} {}", type_badge(kind), count));
    }
    section_mid("Categories");
    for (category, count) in &by_category {
        row(&format!("  {:<40} {}", category, count));
    }
    section_bot();
    Ok(())
}
