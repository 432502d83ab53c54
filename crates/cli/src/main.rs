//! Trademark results CLI — fetch once, filter locally, print.
//!
//! Uses `trademarks-core` for the same store and row rules as the desktop view.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use trademarks_core::present::{rows, RowView, EMPTY_RESULTS_MESSAGE, ERROR_HEADING};
use trademarks_core::{
    load_config, load_config_file, Action, FacetKind, StatusFilter, Store, TrademarkClient,
    ViewState,
};

/// Trademark results — search and filter trademark records from the terminal.
#[derive(Parser)]
#[command(name = "tm", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Backend base URL (overrides trademarks.toml)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Config file (default: ./trademarks.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List trademark records matching the given filters
    List {
        /// Case-insensitive text matched against name, owner, law firm, attorney, status
        #[arg(long, default_value = "")]
        search: String,

        /// Status filter: all, registered, pending, abandoned
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// Keep only this owner (repeatable)
        #[arg(long = "owner")]
        owners: Vec<String>,

        /// Keep only this law firm (repeatable)
        #[arg(long = "law-firm")]
        law_firms: Vec<String>,

        /// Keep only this attorney (repeatable)
        #[arg(long = "attorney")]
        attorneys: Vec<String>,
    },
    /// Show the owner, law firm, and attorney values available as filters
    Facets,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trademarks_core=warn,tm=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config_file(path),
        None => load_config(&std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))),
    };
    if let Some(url) = cli.base_url {
        config.base_url = url.trim_end_matches('/').to_string();
    }
    debug!(base_url = config.base_url.as_str(), timeout_ms = config.timeout_ms, "Using backend");

    let mut store = Store::new();
    let result = match TrademarkClient::new(&config) {
        Ok(client) => client.fetch_hits().await,
        Err(e) => Err(e),
    };
    store.dispatch(Action::FetchSettled(result));

    if let ViewState::Error(message) = store.view() {
        eprintln!("{ERROR_HEADING}: {message}");
        return ExitCode::FAILURE;
    }

    match cli.command {
        Commands::List { search, status, owners, law_firms, attorneys } => {
            store.dispatch(Action::SetSearch(search));
            store.dispatch(Action::SetStatus(status));
            let selections = [
                (FacetKind::Owner, owners),
                (FacetKind::LawFirm, law_firms),
                (FacetKind::Attorney, attorneys),
            ];
            for (kind, values) in selections {
                for value in values {
                    if !store.filters().is_selected(kind, &value) {
                        store.dispatch(Action::ToggleFacet(kind, value));
                    }
                }
            }

            let rows = rows(store.filtered_hits());
            if cli.json {
                return print_json(&rows);
            }
            if rows.is_empty() {
                println!("{EMPTY_RESULTS_MESSAGE}");
            }
            for row in &rows {
                print_row(row);
            }
            eprintln!("\n{} of {} results", rows.len(), store.hits().len());
        }
        Commands::Facets => {
            if cli.json {
                let output = serde_json::json!({
                    "owners": store.facet_options(FacetKind::Owner),
                    "law_firms": store.facet_options(FacetKind::LawFirm),
                    "attorneys": store.facet_options(FacetKind::Attorney),
                });
                return print_json(&output);
            }
            for kind in FacetKind::ALL {
                println!("Filter by {}", kind.title());
                let options = store.facet_options(kind);
                if options.is_empty() {
                    println!("  (none)");
                }
                for option in options {
                    println!("  {option}");
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Could not encode JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_row(row: &RowView) {
    let status = if row.status_date.is_empty() {
        row.status.clone()
    } else {
        format!("{} {}", row.status, row.status_date)
    };
    println!("{:<40} {}", row.mark_name, status);
    println!("    Law firm:     {}", row.law_firm);
    println!("    Owner:        {}", row.current_owner);
    println!("    Reg. number:  {}", row.registration_number);
    println!("    Reg. date:    {}", row.registration_date);
    println!("    {}", row.description);
    if !row.class_codes.is_empty() {
        println!("    {}", row.class_codes.join("  "));
    }
    println!();
}
