//! Host interface declarations.
//!
//! The marker name the checker claims interest in, and the language-version
//! span it is validated against. Hosts read these to route classes and to
//! warn about version skew; neither changes rule behavior.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker name this checker claims interest in.
///
/// Hosts route a class to the checker only when the class carries this
/// marker.
pub const MARKER_NAME: &str = "Singleton";

/// A language level, as the host reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageVersion(pub u16);

impl LanguageVersion {
    /// Earliest language level the rules are validated against.
    pub const SUPPORTED_MIN: LanguageVersion = LanguageVersion(8);
    /// Latest language level the rules are validated against.
    pub const SUPPORTED_MAX: LanguageVersion = LanguageVersion(21);

    /// Whether this level falls inside the validated span.
    #[must_use]
    pub fn is_supported(self) -> bool {
        supported_versions().contains(&self)
    }
}

/// The validated language-version span. Informational only.
#[must_use]
pub fn supported_versions() -> RangeInclusive<LanguageVersion> {
    LanguageVersion::SUPPORTED_MIN..=LanguageVersion::SUPPORTED_MAX
}

/// Failure to parse a language-version marker.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid language version: {0:?}")]
pub struct VersionError(String);

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LanguageVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .map(LanguageVersion)
            .map_err(|_| VersionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        let version: LanguageVersion = "17".parse().unwrap();
        assert_eq!(version, LanguageVersion(17));
        assert_eq!(version.to_string(), "17");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let error = "latest".parse::<LanguageVersion>().unwrap_err();
        assert!(error.to_string().contains("latest"));
    }

    #[test]
    fn test_supported_span() {
        assert!(LanguageVersion::SUPPORTED_MIN.is_supported());
        assert!(LanguageVersion::SUPPORTED_MAX.is_supported());
        assert!(!LanguageVersion(LanguageVersion::SUPPORTED_MAX.0 + 1).is_supported());
    }
}
