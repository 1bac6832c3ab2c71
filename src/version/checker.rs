//! One fetch-extract-compare cycle for the product

use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};

use crate::version::compare::compare_versions;
use crate::version::error::CheckError;
use crate::version::extractor::extract_version;
use crate::version::fetcher::PageFetcher;
use crate::version::types::CheckResult;

/// Current UTC time as ISO-8601 with a `+00:00` offset
fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Fetch `source_url`, extract the latest version and compare it to
/// `installed_version`.
///
/// Never fails: fetch, extraction and comparison errors are returned as a
/// result with status `error` and the error text in `error_message`.
pub async fn run_check(
    fetcher: &dyn PageFetcher,
    installed_version: Option<&str>,
    source_url: &str,
) -> CheckResult {
    let created_at = now_iso();
    let installed = installed_version.map(str::to_string);

    match latest_and_update(fetcher, installed_version, source_url).await {
        Ok((latest, update_available)) => {
            info!(
                "Latest version {} (update available: {:?})",
                latest, update_available
            );
            CheckResult::ok(
                created_at,
                installed,
                latest,
                update_available,
                source_url.to_string(),
            )
        }
        Err(e) => {
            warn!("Check against {} failed: {}", source_url, e);
            CheckResult::error(created_at, installed, source_url.to_string(), e.to_string())
        }
    }
}

async fn latest_and_update(
    fetcher: &dyn PageFetcher,
    installed_version: Option<&str>,
    source_url: &str,
) -> Result<(String, Option<u8>), CheckError> {
    let body = fetcher.fetch(source_url).await?;

    let latest = extract_version(&body).ok_or_else(|| CheckError::NoVersionFound {
        url: source_url.to_string(),
    })?;

    let update_available = compare_versions(installed_version, Some(&latest))?;

    Ok((latest, update_available))
}
