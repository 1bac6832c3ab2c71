use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Defaults
// =============================================================================

/// Default location of the history database, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "data/vlc_updates.sqlite3";

/// Page scraped for the latest VLC release
pub const DEFAULT_SOURCE_URL: &str = "https://www.videolan.org/vlc/";

/// Timeout for the page fetch in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 15;

/// Number of rows `history` prints when no limit is given
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;

/// Product tag written to every check record
pub const PRODUCT: &str = "vlc";

/// Environment variable holding the log filter directives
pub const LOG_ENV_VAR: &str = "VLC_UPDATER_LOG";

/// Filter used when `LOG_ENV_VAR` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Returns the client tag sent as `User-Agent` on every fetch.
pub fn user_agent() -> String {
    format!("vlc-updater/{}", env!("CARGO_PKG_VERSION"))
}

/// Returns the default database path as a `PathBuf`.
pub fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

/// HTTP settings for fetching the source page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl FetchConfig {
    /// Default settings with the timeout replaced.
    pub fn with_timeout_secs(secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(secs),
            ..Self::default()
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            user_agent: user_agent(),
        }
    }
}
