use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::clipboard::copy_prompt;
use crate::filters::{FilterExpr, PromptQuery, parse_filter};
use crate::logging;
use crate::models::{Category, PromptId, PromptRecord};
use crate::tui::run_interactive;
use crate::utils::{sanitize_for_terminal, single_line};

#[derive(Parser)]
#[command(name = "prompt-catalog")]
#[command(version = "0.1.0")]
#[command(about = "Browse, search and copy prompts from a CSV prompt catalog", long_about = None)]
pub struct Cli {
    /// Load the catalog from this CSV file instead of the bundled one
    #[arg(long, global = true, env = "PROMPT_CATALOG_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the catalog interactively (default)
    Browse,
    /// Print prompts matching a search, category and filter
    List {
        /// Case-insensitive text matched against title and prompt
        #[arg(short, long)]
        search: Option<String>,
        /// One of all, text, image, structured
        #[arg(short, long, default_value = "all")]
        category: Category,
        /// Filter expression, e.g. "type:image dev:true"
        #[arg(short, long)]
        filter: Option<String>,
        /// Print a JSON array instead of one line per prompt
        #[arg(long)]
        json: bool,
    },
    /// Print one prompt in full
    Show {
        /// Prompt id (`prompt-3` or `3`)
        id: PromptId,
    },
    /// Copy a prompt body to the clipboard
    Copy {
        /// Prompt id (`prompt-3` or `3`)
        id: PromptId,
    },
    /// Show statistics about the catalog
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let catalog = Catalog::open(cli.file.as_deref())?;
    info!(source = %catalog.source().describe(), records = catalog.len(), "Catalog ready");

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => run_interactive(catalog.into_records()),
        Commands::List { search, category, filter, json } => {
            list_prompts(&catalog, search.unwrap_or_default(), category, filter.as_deref(), json)
        }
        Commands::Show { id } => show_prompt(&catalog, id),
        Commands::Copy { id } => copy_by_id(&catalog, id),
        Commands::Stats => {
            show_stats(&catalog);
            Ok(())
        }
    }
}

fn lookup(catalog: &Catalog, id: PromptId) -> Result<&PromptRecord> {
    catalog
        .get(id)
        .ok_or_else(|| anyhow!("No prompt with id {} in {}", id, catalog.source().describe()))
}

fn list_prompts(
    catalog: &Catalog,
    search: String,
    category: Category,
    filter: Option<&str>,
    json: bool,
) -> Result<()> {
    let filter_expr = match filter {
        Some(expr) => parse_filter(expr).context("Invalid --filter expression")?,
        None => FilterExpr::new(),
    };
    let query = PromptQuery::new(search, category);
    let matched = catalog.query_with_filter(&query, &filter_expr);
    debug!(matched = matched.len(), total = catalog.len(), "Listed prompts");

    if json {
        let output =
            serde_json::to_string_pretty(&matched).context("Failed to serialize prompts")?;
        println!("{}", output);
        return Ok(());
    }

    if matched.is_empty() {
        println!("No prompts found");
        return Ok(());
    }
    for record in matched {
        println!("{}", format_list_line(record));
    }
    Ok(())
}

fn show_prompt(catalog: &Catalog, id: PromptId) -> Result<()> {
    let record = lookup(catalog, id)?;
    println!("{}", format_record(record));
    Ok(())
}

fn copy_by_id(catalog: &Catalog, id: PromptId) -> Result<()> {
    let record = lookup(catalog, id)?;
    copy_prompt(record)?;
    println!("Copied {} ({}) to clipboard", record.id, single_line(&record.act));
    Ok(())
}

fn show_stats(catalog: &Catalog) {
    let stats = catalog.stats();
    let summary = catalog.summary();

    println!("Prompt Catalog Statistics");
    println!("=========================");
    println!("Total prompts: {}", stats.total);
    println!("For devs: {}", stats.dev_focused);
    println!("Contributors: {}", stats.contributors);
    println!();
    println!("By type:");
    for (tag, count) in &stats.by_type {
        println!("  {}: {}", single_line(tag), count);
    }
    println!();
    println!("Source: {}", catalog.source().describe());
    if summary.dropped > 0 {
        println!("Rows without a prompt (skipped): {}", summary.dropped);
    }
    if summary.unterminated_quote {
        println!("Warning: catalog ends inside a quoted field");
    }
}

/// `id | TYPE [DEV] | act | @contributor`
pub fn format_list_line(record: &PromptRecord) -> String {
    let mut tag = single_line(record.prompt_type.as_str());
    if record.for_devs {
        tag.push_str(" [DEV]");
    }
    format!(
        "{} | {} | {} | @{}",
        record.id,
        tag,
        single_line(&record.act),
        single_line(&record.contributor)
    )
}

/// Full multi-line view used by `show`
pub fn format_record(record: &PromptRecord) -> String {
    format!(
        "{} | {}\nType: {}\nFor devs: {}\nContributor: @{}\n\n{}",
        record.id,
        single_line(&record.act),
        single_line(record.prompt_type.as_str()),
        if record.for_devs { "yes" } else { "no" },
        single_line(&record.contributor),
        sanitize_for_terminal(&record.prompt)
    )
}
