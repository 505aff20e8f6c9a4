//! Singleton conformance rules.
//!
//! Two rule groups, evaluated in order with a short circuit: a class that
//! fails constructor privacy is rejected before its accessor is ever
//! examined, and each group returns at its first violation.

use std::ops::RangeInclusive;

use sv_core::{ClassSymbol, Diagnostic, Verdict};

use crate::marker::{self, LanguageVersion};

/// Required simple name of the accessor method.
pub const ACCESSOR_NAME: &str = "getInstance";

/// Rule tag: a declared constructor lacks the `private` modifier.
pub const CONSTRUCTOR_NOT_PRIVATE: &str = "ConstructorNotPrivate";
/// Rule tag: the class declares no methods at all.
pub const MISSING_ACCESSOR: &str = "MissingAccessor";
/// Rule tag: an accessor returning the class's own type is `private`.
pub const ACCESSOR_IS_PRIVATE: &str = "AccessorIsPrivate";
/// Rule tag: an accessor returning the class's own type is not `static`.
pub const ACCESSOR_NOT_STATIC: &str = "AccessorNotStatic";
/// Rule tag: methods exist but none qualifies as a valid accessor.
pub const NO_VALID_ACCESSOR: &str = "NoValidAccessor";

/// Singleton conformance checker.
///
/// Stateless: one instance may check any number of classes, across any
/// number of rounds, and concurrent checks on different symbols need no
/// synchronization.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingletonChecker;

impl SingletonChecker {
    /// Create a new checker.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Marker name this checker claims interest in.
    #[must_use]
    pub fn marker(&self) -> &'static str {
        marker::MARKER_NAME
    }

    /// Language-version span the rules are validated against. Informational.
    #[must_use]
    pub fn supported_versions(&self) -> RangeInclusive<LanguageVersion> {
        marker::supported_versions()
    }

    /// Decide singleton conformance for one class.
    ///
    /// Returns [`Verdict::Accepted`] exactly when every rule passes;
    /// otherwise the verdict carries the diagnostic of the first violation
    /// along the short-circuit path, anchored at the responsible element.
    #[must_use]
    pub fn check(&self, class: &ClassSymbol) -> Verdict {
        if let Some(diagnostic) = self.check_constructor_privacy(class) {
            return Verdict::rejected(diagnostic);
        }
        if let Some(diagnostic) = self.check_accessor(class) {
            return Verdict::rejected(diagnostic);
        }
        Verdict::Accepted
    }

    /// Group A: every declared constructor must be `private`.
    ///
    /// A class with no declared constructors trivially passes. The first
    /// offending constructor rejects; later constructors go unexamined.
    fn check_constructor_privacy(&self, class: &ClassSymbol) -> Option<Diagnostic> {
        for constructor in &class.constructors {
            if !constructor.is_private() {
                return Some(Diagnostic::error(
                    CONSTRUCTOR_NOT_PRIVATE,
                    "singleton constructor must be private",
                    constructor.location.clone(),
                ));
            }
        }
        None
    }

    /// Group B: a public static method named `getInstance` must return the
    /// class's own type.
    ///
    /// Methods named `getInstance` with an unrelated return type are not
    /// inspected at all: they neither satisfy nor violate the rule. The scan
    /// keeps going after a satisfying accessor is found, so a later
    /// ill-formed overload returning the class type still rejects.
    fn check_accessor(&self, class: &ClassSymbol) -> Option<Diagnostic> {
        if class.methods.is_empty() {
            return Some(Diagnostic::error(
                MISSING_ACCESSOR,
                "singleton class requires a public static method named getInstance",
                class.location.clone(),
            ));
        }

        let mut satisfied = false;
        for method in &class.methods {
            if method.name != ACCESSOR_NAME || method.return_type != class.self_type {
                continue;
            }
            if method.is_private() {
                return Some(Diagnostic::error(
                    ACCESSOR_IS_PRIVATE,
                    "getInstance must not be private",
                    method.location.clone(),
                ));
            }
            if !method.is_static {
                return Some(Diagnostic::error(
                    ACCESSOR_NOT_STATIC,
                    "getInstance must be a public static method",
                    method.location.clone(),
                ));
            }
            satisfied = true;
        }

        if satisfied {
            None
        } else {
            Some(Diagnostic::error(
                NO_VALID_ACCESSOR,
                "singleton must satisfy two conditions: 1) private constructor; \
                 2) a public static getInstance method returning the singleton type.",
                class.location.clone(),
            ))
        }
    }
}
