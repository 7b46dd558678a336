//! CLI inspection tool for bsky-links.
//!
//! Classifies URLs from the command line using the same configuration
//! library consumers inject: canonical origin, display name, and trusted
//! suffixes from the environment.
//!
//! # Usage
//!
//! ```bash
//! # Full classification report
//! cargo run -- inspect "https://bsky.app/profile/alice.test/post/abc123"
//!
//! # Machine-readable report
//! cargo run -- inspect --json "https://example.com/a/b"
//!
//! # Share URL for an in-app path
//! cargo run -- share /profile/alice.test
//!
//! # Subdomain / registrable-domain split
//! cargo run -- apex foo.bar.com
//!
//! # Build an at:// record URI
//! cargo run -- record alice.test app.bsky.feed.post 3jzfcijpj2z2a
//!
//! # Deceptive-label check
//! cargo run -- check-label "https://evil.example" "trusted.example"
//! ```

use anyhow::Result;
use bsky_links::classify::classifier::LinkClassifier;
use bsky_links::classify::display::to_short_url;
use bsky_links::config::{self, Config};
use bsky_links::domain::apex::split_apex_domain;
use bsky_links::domain::record_uri::make_record_uri;
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// CLI tool for classifying links.
#[derive(Parser)]
#[command(name = "bsky-links")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Classify a URL and print the full report
    Inspect {
        /// URL to classify
        url: String,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the share URL for a path or URL
    Share {
        /// In-app path (or an https URL to pass through)
        path_or_url: String,
    },

    /// Split a hostname into subdomain prefix and registrable domain
    Apex {
        /// Hostname to split
        hostname: String,
    },

    /// Build an at:// record URI from its components
    Record {
        /// Handle or DID owning the record
        authority: String,

        /// Collection namespace, e.g. app.bsky.feed.post
        collection: String,

        /// Record key within the collection
        rkey: String,
    },

    /// Check whether a link label deserves a deceptive-link warning
    CheckLabel {
        /// Destination URL
        url: String,

        /// Rendered label text
        label: String,
    },
}

/// Classification report for a single URL.
#[derive(Debug, Serialize)]
struct LinkReport {
    url: String,
    nice_domain: String,
    short_url: String,
    share_url: String,
    is_app_url: bool,
    is_external_url: bool,
    is_post_url: bool,
    is_custom_feed_url: bool,
    is_list_url: bool,
    /// In-app navigation path, present only for app URLs that parse.
    app_path: Option<String>,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    let classifier = LinkClassifier::new(&config);

    let cli = Cli::parse();
    match cli.command {
        Commands::Inspect { url, json } => inspect(&classifier, &url, json)?,
        Commands::Share { path_or_url } => {
            println!("{}", classifier.to_share_url(&path_or_url));
        }
        Commands::Apex { hostname } => apex(&hostname),
        Commands::Record {
            authority,
            collection,
            rkey,
        } => {
            println!("{}", make_record_uri(&authority, &collection, &rkey)?);
        }
        Commands::CheckLabel { url, label } => check_label(&classifier, &url, &label),
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Prints the classification report for `url`.
fn inspect(classifier: &LinkClassifier, url: &str, json: bool) -> Result<()> {
    // The library stays silent on parse failures; the diagnostic belongs
    // here at the application boundary.
    let app_path = if classifier.is_app_url(url) {
        match classifier.app_path(url) {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::debug!(%err, "app URL did not parse; leaving it unconverted");
                None
            }
        }
    } else {
        None
    };

    let report = LinkReport {
        url: url.to_string(),
        nice_domain: classifier.to_nice_domain(url),
        short_url: to_short_url(url),
        share_url: classifier.to_share_url(url),
        is_app_url: classifier.is_app_url(url),
        is_external_url: classifier.is_external_url(url),
        is_post_url: classifier.is_post_url(url),
        is_custom_feed_url: classifier.is_custom_feed_url(url),
        is_list_url: classifier.is_list_url(url),
        app_path,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.url.bright_white().bold());
    println!("  Nice domain: {}", report.nice_domain.cyan());
    println!("  Short form:  {}", report.short_url.cyan());
    println!("  Share URL:   {}", report.share_url.cyan());
    println!("  App URL:     {}", yes_no(report.is_app_url));
    println!("  External:    {}", yes_no(report.is_external_url));
    println!("  Post:        {}", yes_no(report.is_post_url));
    println!("  Custom feed: {}", yes_no(report.is_custom_feed_url));
    println!("  List:        {}", yes_no(report.is_list_url));
    if let Some(path) = &report.app_path {
        println!("  App path:    {}", path.cyan());
    }

    Ok(())
}

fn yes_no(flag: bool) -> ColoredString {
    if flag { "yes".green() } else { "no".dimmed() }
}

/// Prints the subdomain/apex split of a hostname.
fn apex(hostname: &str) {
    let apex = split_apex_domain(hostname);
    if apex.subdomain.is_empty() {
        println!("{}", apex.domain.cyan());
    } else {
        println!("{}{}", apex.subdomain.dimmed(), apex.domain.cyan());
    }
}

/// Prints the deceptive-link verdict for a destination/label pair.
fn check_label(classifier: &LinkClassifier, url: &str, label: &str) {
    if classifier.link_requires_warning(url, label) {
        println!(
            "{}",
            "⚠ label does not match the destination".yellow().bold()
        );
    } else {
        println!("{}", "✓ label matches the destination".green());
    }
}
