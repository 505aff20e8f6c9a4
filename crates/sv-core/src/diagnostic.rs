//! Diagnostics and verdicts reported back to the host.
//!
//! Violations are data, never faults: a failed rule becomes a [`Diagnostic`]
//! inside a [`Verdict::Rejected`], and the host forwards it to its own
//! diagnostics framework verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::location::SourceLocation;

/// Diagnostic severity.
///
/// The singleton rules only ever emit [`Severity::Error`]; the variant set
/// leaves room for advisory rules without changing the sink contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Should fix but not blocking
    Warning,
    /// Blocks the class from being considered valid
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// A single rule violation, anchored at the most specific element
/// responsible for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Rule that was violated
    pub rule: &'static str,
    /// Severity level
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
    /// Anchor in the host's source model
    pub location: SourceLocation,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub fn error(rule: &'static str, message: impl Into<String>, location: SourceLocation) -> Self {
        debug_assert!(!rule.is_empty(), "rule tag must not be empty");

        Self {
            rule,
            severity: Severity::Error,
            message: message.into(),
            location,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.location, self.severity, self.rule, self.message
        )
    }
}

/// Outcome of checking one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// Every rule passed.
    Accepted,
    /// At least one rule failed; diagnostics in emission order.
    Rejected(Vec<Diagnostic>),
}

impl Verdict {
    /// Reject with a single diagnostic.
    #[must_use]
    pub fn rejected(diagnostic: Diagnostic) -> Self {
        Self::Rejected(vec![diagnostic])
    }

    /// Whether the class passed every rule.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Diagnostics carried by the verdict; empty when accepted.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Accepted => &[],
            Self::Rejected(diagnostics) => diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_format() {
        let diagnostic = Diagnostic::error(
            "ConstructorNotPrivate",
            "singleton constructor must be private",
            SourceLocation::new("demo/Registry.src", 8, 5),
        );
        let formatted = diagnostic.to_string();
        assert!(formatted.contains("demo/Registry.src:8:5"));
        assert!(formatted.contains("error"));
        assert!(formatted.contains("ConstructorNotPrivate"));
    }

    #[test]
    fn test_verdict_helpers() {
        assert!(Verdict::Accepted.is_accepted());
        assert!(Verdict::Accepted.diagnostics().is_empty());

        let rejected = Verdict::rejected(Diagnostic::error(
            "MissingAccessor",
            "singleton class requires a public static method named getInstance",
            SourceLocation::new("demo/Registry.src", 1, 1),
        ));
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.diagnostics().len(), 1);
    }
}
