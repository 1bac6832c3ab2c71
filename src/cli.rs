//! Command-line surface: `init-db`, `check` and `history`

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::{
    DEFAULT_HISTORY_LIMIT, DEFAULT_SOURCE_URL, FETCH_TIMEOUT_SECS, FetchConfig, default_db_path,
};
use crate::version::checker::run_check;
use crate::version::compare::parse_version;
use crate::version::fetcher::{HttpFetcher, PageFetcher};
use crate::version::history::HistoryStore;
use crate::version::types::StoredCheck;

#[derive(Debug, Parser)]
#[command(name = "vlc-updater")]
#[command(version, about = "Check whether a newer VLC release is available and keep a history")]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, default_value_os_t = default_db_path())]
    pub db: PathBuf,

    /// Also write JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the database tables
    InitDb,

    /// Run a new check and store the result
    Check {
        /// Locally installed VLC version (e.g. 3.0.20)
        #[arg(long, value_parser = parse_installed_version)]
        installed_version: Option<String>,

        /// Page that advertises the latest VLC version
        #[arg(long, default_value = DEFAULT_SOURCE_URL)]
        source_url: String,

        /// Fetch timeout in seconds
        #[arg(long, default_value_t = FETCH_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: u64,
    },

    /// Show stored check results, newest first
    History {
        /// Number of rows to show
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,
    },
}

fn parse_installed_version(value: &str) -> Result<String, String> {
    parse_version(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}

/// Execute the parsed command, writing documents to `out`.
///
/// Returns the process exit code: `check` yields 1 when the check failed,
/// everything else 0.
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<u8> {
    match cli.command {
        Command::InitDb => init_db(&cli.db, out),
        Command::Check {
            installed_version,
            source_url,
            timeout,
        } => {
            let fetcher = HttpFetcher::new(&FetchConfig::with_timeout_secs(timeout))?;
            check(
                &cli.db,
                &fetcher,
                installed_version.as_deref(),
                &source_url,
                out,
            )
            .await
        }
        Command::History { limit } => history(&cli.db, limit, out),
    }
}

fn init_db<W: Write>(db: &Path, out: &mut W) -> anyhow::Result<u8> {
    let store = HistoryStore::open(db)?;
    store.initialize()?;

    writeln!(out, "Database ready: {}", db.display())?;
    Ok(0)
}

/// Run one check with `fetcher` and store its result in the database at `db`.
pub async fn check<W: Write>(
    db: &Path,
    fetcher: &dyn PageFetcher,
    installed_version: Option<&str>,
    source_url: &str,
    out: &mut W,
) -> anyhow::Result<u8> {
    let store = HistoryStore::open(db)?;
    store.initialize()?;

    let result = run_check(fetcher, installed_version, source_url).await;
    let id = store.insert(&result)?;
    info!("Stored check {} ({})", id, result.status);

    let document = serde_json::to_string_pretty(&StoredCheck { check: &result, id })?;
    writeln!(out, "{}", document)?;

    Ok(if result.is_ok() { 0 } else { 1 })
}

fn history<W: Write>(db: &Path, limit: u32, out: &mut W) -> anyhow::Result<u8> {
    let store = HistoryStore::open(db)?;
    store.initialize()?;
    let rows = store.list_recent(limit)?;

    for row in &rows {
        writeln!(out, "{}", serde_json::to_string_pretty(row)?)?;
    }
    if rows.is_empty() {
        writeln!(out, "No history yet.")?;
    }

    Ok(0)
}
