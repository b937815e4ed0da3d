//! CLI administration tool for sha-shortener.
//!
//! Works directly on the JSON store document, without going through the
//! HTTP API. Do not run mutating commands against a file that a running
//! server is using: the two processes do not share a lock.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- add https://example.com
//!
//! # Look up a code
//! cargo run --bin admin -- get 327c3fda87
//!
//! # List all links
//! cargo run --bin admin -- list
//!
//! # Remove a link
//! cargo run --bin admin -- remove 327c3fda87
//!
//! # Print the code for a URL without storing it
//! cargo run --bin admin -- code https://example.com
//! ```
//!
//! # Environment Variables
//!
//! - `STORE_PATH`: store document (default: `store.json`, overridden by `--store`)
//! - `SHORT_DOMAIN`: prefix used when printing short URLs (default: `http://localhost:8080`)

use sha_shortener::application::services::LinkService;
use sha_shortener::domain::repositories::{Store, StoreError};
use sha_shortener::domain::short_code::short_code_for;
use sha_shortener::infrastructure::persistence::FileStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CLI tool for managing a sha-shortener store file.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON store document
    #[arg(short, long, env = "STORE_PATH", default_value = "store.json")]
    store: PathBuf,

    /// Prefix used when printing short URLs
    #[arg(long, env = "SHORT_DOMAIN", default_value = "http://localhost:8080")]
    domain: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL and store it
    Add {
        /// The long URL
        url: String,
    },

    /// Show the URL behind a short code
    Get {
        /// Short code
        code: String,
    },

    /// Remove a short link
    Remove {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all short links
    List,

    /// Print the short code for a URL without storing it
    Code {
        /// The long URL
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Add { url } => {
            let (_, service) = open_store(&cli.store, cli.domain).await?;
            add_link(&service, url).await?;
        }
        Commands::Get { code } => {
            let (_, service) = open_store(&cli.store, cli.domain).await?;
            get_link(&service, &code).await?;
        }
        Commands::Remove { code, yes } => {
            let (_, service) = open_store(&cli.store, cli.domain).await?;
            remove_link(&service, &code, yes).await?;
        }
        Commands::List => {
            let (store, service) = open_store(&cli.store, cli.domain).await?;
            list_links(&store, service.domain()).await?;
        }
        Commands::Code { url } => println!("{}", short_code_for(&url)),
    }

    Ok(())
}

/// Opens the store document and wraps it in a link service.
async fn open_store(path: &Path, domain: String) -> Result<(Arc<FileStore>, LinkService)> {
    let store = Arc::new(
        FileStore::open(path)
            .await
            .with_context(|| format!("Failed to open store {}", path.display()))?,
    );
    let service = LinkService::new(store.clone() as Arc<dyn Store>, domain);

    Ok((store, service))
}

/// Shortens and stores a URL.
async fn add_link(service: &LinkService, url: String) -> Result<()> {
    println!("{}", "🔗 Add Short Link".bright_blue().bold());
    println!();

    match service.shorten(url).await {
        Ok(link) => {
            println!("  Code:      {}", link.code.bright_yellow().bold());
            println!("  Short URL: {}", link.short_url.cyan());
            println!("  Long URL:  {}", link.long_url);
            println!();
            println!("{}", "✅ Link created successfully!".green().bold());
        }
        Err(StoreError::AlreadyExists) => {
            println!(
                "{}",
                "⚠️  This code is already in use (URL already shortened or hash collision)"
                    .yellow()
            );
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to add link: {}", e)),
    }

    println!();
    Ok(())
}

/// Prints the URL for a code.
async fn get_link(service: &LinkService, code: &str) -> Result<()> {
    match service.resolve(code).await {
        Ok(url) => println!("{}", url),
        Err(StoreError::NotFound) => {
            println!("{}", format!("❌ No link with code '{}'", code).red());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to read link: {}", e)),
    }

    Ok(())
}

/// Removes a link after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
/// - Shows the target URL before asking
async fn remove_link(service: &LinkService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Remove Short Link".bright_blue().bold());
    println!();

    let url = match service.resolve(code).await {
        Ok(url) => url,
        Err(StoreError::NotFound) => {
            println!("{}", format!("❌ No link with code '{}'", code).red());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to read link: {}", e)),
    };

    println!("  Code: {}", code.cyan());
    println!("  URL:  {}", url.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to remove link: {}", e))?;

    println!();
    println!("{}", "✅ Link removed successfully!".green().bold());
    println!();

    Ok(())
}

/// Lists all links in the store.
///
/// # Output Format
///
/// ```text
/// 📋 Short Links (store.json)
///
///   Code        Short URL                              Long URL
///   ──────────────────────────────────────────────────────────────────────────
///   327c3fda87  http://localhost:8080/327c3fda87       https://example.com
/// ```
async fn list_links(store: &FileStore, domain: &str) -> Result<()> {
    println!(
        "{} ({})",
        "📋 Short Links".bright_blue().bold(),
        store.path().display()
    );
    println!();

    let entries = store
        .entries()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if entries.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin add <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<11} {:<38} {}",
        "Code".bright_white().bold(),
        "Short URL".bright_white().bold(),
        "Long URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for (code, url) in &entries {
        println!(
            "  {:<11} {:<38} {}",
            code.cyan(),
            format!("{}/{}", domain, code).bright_black(),
            url
        );
    }

    println!();
    println!(
        "  Total: {}",
        entries.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}
