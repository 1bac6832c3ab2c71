use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::PRODUCT;

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Error,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "ok",
            CheckStatus::Error => "error",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(CheckStatus::Ok),
            "error" => Ok(CheckStatus::Error),
            _ => Err(format!("Unknown check status: {}", s)),
        }
    }
}

/// One check of the source page against the installed version
///
/// Built through [`CheckResult::ok`] or [`CheckResult::error`]:
/// `error_message` is set iff `status` is `Error`, and a failed check never
/// carries `latest_version` or `update_available`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub created_at: String,
    pub product: String,
    pub installed_version: Option<String>,
    pub latest_version: Option<String>,
    pub update_available: Option<u8>,
    pub source_url: String,
    pub status: CheckStatus,
    pub error_message: Option<String>,
}

impl CheckResult {
    pub fn ok(
        created_at: String,
        installed_version: Option<String>,
        latest_version: String,
        update_available: Option<u8>,
        source_url: String,
    ) -> Self {
        Self {
            created_at,
            product: PRODUCT.to_string(),
            installed_version,
            latest_version: Some(latest_version),
            update_available,
            source_url,
            status: CheckStatus::Ok,
            error_message: None,
        }
    }

    pub fn error(
        created_at: String,
        installed_version: Option<String>,
        source_url: String,
        error_message: String,
    ) -> Self {
        Self {
            created_at,
            product: PRODUCT.to_string(),
            installed_version,
            latest_version: None,
            update_available: None,
            source_url,
            status: CheckStatus::Error,
            error_message: Some(error_message),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == CheckStatus::Ok
    }
}

/// A stored check together with the id the store assigned to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    pub id: i64,
    #[serde(flatten)]
    pub check: CheckResult,
}

/// Output shape of `check`: the record first, its id last
#[derive(Debug, Serialize)]
pub struct StoredCheck<'a> {
    #[serde(flatten)]
    pub check: &'a CheckResult,
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_ok() -> CheckResult {
        CheckResult::ok(
            "2026-01-01T00:00:00+00:00".to_string(),
            Some("3.0.20".to_string()),
            "3.0.21".to_string(),
            Some(1),
            "https://example.com/vlc".to_string(),
        )
    }

    #[test]
    fn error_result_clears_latest_version_and_sets_message() {
        let result = CheckResult::error(
            "2026-01-01T00:00:00+00:00".to_string(),
            Some("3.0.20".to_string()),
            "http://127.0.0.1:9".to_string(),
            "connection refused".to_string(),
        );

        assert_eq!(result.status, CheckStatus::Error);
        assert_eq!(result.product, "vlc");
        assert_eq!(result.latest_version, None);
        assert_eq!(result.update_available, None);
        assert_eq!(result.error_message.as_deref(), Some("connection refused"));
        assert!(!result.is_ok());
    }

    #[test]
    fn check_status_round_trips_through_str() {
        for status in [CheckStatus::Ok, CheckStatus::Error] {
            assert_eq!(status.as_str().parse::<CheckStatus>(), Ok(status));
        }
        assert!("pending".parse::<CheckStatus>().is_err());
    }

    #[test]
    fn history_row_serializes_id_first_with_flat_fields() {
        let row = HistoryRow {
            id: 7,
            check: sample_ok(),
        };

        let text = serde_json::to_string(&row).unwrap();
        assert!(text.starts_with(r#"{"id":7,"created_at""#));
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!({
                "id": 7,
                "created_at": "2026-01-01T00:00:00+00:00",
                "product": "vlc",
                "installed_version": "3.0.20",
                "latest_version": "3.0.21",
                "update_available": 1,
                "source_url": "https://example.com/vlc",
                "status": "ok",
                "error_message": null
            })
        );
    }

    #[test]
    fn stored_check_serializes_id_last() {
        let check = sample_ok();
        let text = serde_json::to_string(&StoredCheck { check: &check, id: 3 }).unwrap();

        assert!(text.ends_with(r#""error_message":null,"id":3}"#));
    }
}
