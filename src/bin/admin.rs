//! CLI administration tool for domain-shortener.
//!
//! Works directly on the JSON documents in the data directory, through the
//! same validated operations as the HTTP admin API.
//!
//! # Usage
//!
//! ```bash
//! # Links
//! cargo run --bin admin -- links list
//! cargo run --bin admin -- links export links-backup.json
//! cargo run --bin admin -- links import links-backup.json
//!
//! # Domains
//! cargo run --bin admin -- domains list
//! cargo run --bin admin -- domains add go.example.org https://example.org
//! cargo run --bin admin -- domains remove go.example.org
//!
//! # Admin credential
//! cargo run --bin admin -- password
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_DIR` (optional, default `./data`): directory holding `config.json`
//!   and `links.json`
//!
//! # Caveat
//!
//! A running server keeps its own copy of both documents and does not reload
//! them. Stop the server before changing data with this tool, or the server's
//! next write will overwrite the change.

use domain_shortener::application::services::AdminService;
use domain_shortener::config::DEFAULT_DATA_DIR;
use domain_shortener::domain::entities::LinkTable;
use domain_shortener::infrastructure::persistence::FileKeyValueStore;
use domain_shortener::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Password};
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing domain-shortener data.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data directory (overrides `DATA_DIR`)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Manage domains and their default redirects
    Domains {
        #[command(subcommand)]
        action: DomainAction,
    },

    /// Change the admin password
    Password,
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Write the link table to a JSON file
    Export {
        /// Destination file
        file: PathBuf,
    },

    /// Merge links from a JSON file (entries in the file win)
    Import {
        /// Source file, in the format produced by `links export`
        file: PathBuf,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Domain management subcommands.
#[derive(Subcommand)]
enum DomainAction {
    /// List configured domains
    List,

    /// Add a domain or replace its default redirect
    Add {
        /// Host as sent in the `Host` header, port included if any
        domain: String,

        /// Target used when no link matches on this host
        redirect: String,
    },

    /// Remove a domain (its links are kept)
    Remove {
        /// Domain to remove
        domain: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        std::env::var("DATA_DIR")
            .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string())
            .into()
    });

    let state = AppState::load(Arc::new(FileKeyValueStore::new(&data_dir)))
        .await
        .with_context(|| format!("Failed to load data from {}", data_dir.display()))?;
    let service = state.admin_service;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &service).await?,
        Commands::Domains { action } => handle_domain_action(action, &service).await?,
        Commands::Password => change_password(&service).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &AdminService) -> Result<()> {
    match action {
        LinkAction::List => list_links(service).await,
        LinkAction::Export { file } => export_links(service, file).await,
        LinkAction::Import { file, yes } => import_links(service, file, yes).await,
    }
}

/// Dispatches domain management commands.
async fn handle_domain_action(action: DomainAction, service: &AdminService) -> Result<()> {
    match action {
        DomainAction::List => list_domains(service).await,
        DomainAction::Add { domain, redirect } => add_domain(service, domain, redirect).await,
        DomainAction::Remove { domain, yes } => remove_domain(service, domain, yes).await,
    }
}

/// Lists all links, flagging those whose domain is no longer configured.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   Code                 Domain                         Target
///   ────────────────────────────────────────────────────────────────────────────
///   promo                short.example.com              https://example.com/summer
/// ```
async fn list_links(service: &AdminService) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = service.export_links().await;
    let domains = service.list_domains().await;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<20} {:<30} {}",
        "Code".bright_white().bold(),
        "Domain".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(78).bright_black());

    for (code, link) in &links {
        let domain = if domains.contains_key(&link.domain) {
            link.domain.normal()
        } else {
            format!("{} (orphaned)", link.domain).red()
        };

        println!("  {:<20} {:<30} {}", code.cyan(), domain, link.url.bright_black());
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Writes the link table to `file` as pretty-printed JSON.
async fn export_links(service: &AdminService, file: PathBuf) -> Result<()> {
    let links = service.export_links().await;
    let json = serde_json::to_vec_pretty(&links)?;

    tokio::fs::write(&file, json)
        .await
        .with_context(|| format!("Failed to write {}", file.display()))?;

    println!(
        "{} Exported {} links to {}",
        "✅".green(),
        links.len().to_string().bright_white().bold(),
        file.display().to_string().cyan()
    );

    Ok(())
}

/// Merges links from `file` after confirmation.
async fn import_links(service: &AdminService, file: PathBuf, skip_confirm: bool) -> Result<()> {
    println!("{}", "📥 Import Links".bright_blue().bold());
    println!();

    let bytes = tokio::fs::read(&file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let batch: LinkTable = serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is not a link table", file.display()))?;

    let existing = service.export_links().await;
    let overwritten = batch.keys().filter(|code| existing.contains_key(*code)).count();

    println!("  Links in file:       {}", batch.len().to_string().cyan());
    println!("  Existing overwritten: {}", overwritten.to_string().yellow());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Import these links?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let summary = service
        .import_links(batch)
        .await
        .context("Failed to import links")?;

    println!();
    println!(
        "{} Imported {} links, {} in total",
        "✅".green(),
        summary.imported.to_string().bright_white().bold(),
        summary.total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Lists configured domains with their default redirects.
async fn list_domains(service: &AdminService) -> Result<()> {
    println!("{}", "🌐 Domains".bright_blue().bold());
    println!();

    let domains = service.list_domains().await;

    if domains.is_empty() {
        println!("{}", "  No domains configured".yellow());
        return Ok(());
    }

    println!(
        "  {:<30} {}",
        "Domain".bright_white().bold(),
        "Default redirect".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for (domain, config) in &domains {
        println!(
            "  {:<30} {}",
            domain.cyan(),
            config.default_redirect.bright_black()
        );
    }

    println!();

    Ok(())
}

/// Adds a domain or replaces its default redirect.
async fn add_domain(service: &AdminService, domain: String, redirect: String) -> Result<()> {
    let config = service
        .add_domain(domain.clone(), redirect)
        .await
        .context("Failed to add domain")?;

    println!(
        "{} {} → {}",
        "✅".green(),
        domain.cyan(),
        config.default_redirect.bright_black()
    );

    Ok(())
}

/// Removes a domain with confirmation, reporting links left orphaned.
async fn remove_domain(service: &AdminService, domain: String, skip_confirm: bool) -> Result<()> {
    if !service.list_domains().await.contains_key(&domain) {
        println!("{}", "⚠️  Domain is not configured".yellow());
        return Ok(());
    }

    let orphaned = service
        .export_links()
        .await
        .values()
        .filter(|link| link.domain == domain)
        .count();

    println!("  Domain: {}", domain.cyan());
    if orphaned > 0 {
        println!(
            "  {}",
            format!("{orphaned} links use this domain and will be orphaned").yellow()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this domain?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .remove_domain(&domain)
        .await
        .context("Failed to remove domain")?;

    println!("{}", "✅ Domain removed".green().bold());

    Ok(())
}

/// Prompts twice for a new admin password and stores it.
async fn change_password(service: &AdminService) -> Result<()> {
    println!("{}", "🔑 Change Admin Password".bright_blue().bold());
    println!();

    let password = Password::new()
        .with_prompt("New password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    service
        .change_password(password)
        .await
        .context("Failed to change password")?;

    println!();
    println!("{}", "✅ Password changed".green().bold());
    println!();

    Ok(())
}
