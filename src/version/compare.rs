//! Dot-integer version parsing and ordering
//!
//! Versions are compared as integer tuples, so "3.0.9" < "3.0.10".
//! A tuple that is a prefix of a longer one orders first ("3.0" < "3.0.0").
//! Components have no upper bound.

use std::cmp::Ordering;

use crate::version::error::VersionError;

/// One non-negative integer component of a version, of any length
///
/// Stored as its decimal digits without leading zeros ("0" for zero), so a
/// longer digit string is always the larger number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component(String);

impl Component {
    fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        Self(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parse a dot-separated version string into its integer components.
///
/// Examples:
/// - "3.0.21" -> [3, 0, 21]
/// - "03.0" -> [3, 0]
/// - "3.x" -> Err(InvalidComponent)
pub fn parse_version(version: &str) -> Result<Vec<Component>, VersionError> {
    if version.is_empty() {
        return Err(VersionError::Empty);
    }

    version
        .split('.')
        .map(|component| {
            if !component.is_empty() && component.bytes().all(|b| b.is_ascii_digit()) {
                Ok(Component::from_digits(component))
            } else {
                Err(VersionError::InvalidComponent {
                    version: version.to_string(),
                    component: component.to_string(),
                })
            }
        })
        .collect()
}

/// Report whether `latest` is strictly newer than `installed`.
///
/// Returns `Ok(None)` when either side is missing or empty, `Ok(Some(1))` when
/// an update is available and `Ok(Some(0))` otherwise.
pub fn compare_versions(
    installed: Option<&str>,
    latest: Option<&str>,
) -> Result<Option<u8>, VersionError> {
    let (Some(installed), Some(latest)) = (
        installed.filter(|v| !v.is_empty()),
        latest.filter(|v| !v.is_empty()),
    ) else {
        return Ok(None);
    };

    let installed = parse_version(installed)?;
    let latest = parse_version(latest)?;

    Ok(Some(u8::from(latest > installed)))
}
