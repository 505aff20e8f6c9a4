//! # sv-checker
//!
//! Compile-time singleton conformance checking over host-supplied symbols.
//!
//! The host's resolver hands over one [`ClassSymbol`](sv_core::ClassSymbol)
//! per class carrying the [`MARKER_NAME`] marker;
//! [`SingletonChecker::check`] applies two rule groups in order and stops at
//! the first failing group:
//!
//! | Group | Requirement | Rejects with |
//! |-------|-------------|--------------|
//! | A | every declared constructor is `private` | `ConstructorNotPrivate` |
//! | B | a public static `getInstance` returns the class's own type | `MissingAccessor`, `AccessorIsPrivate`, `AccessorNotStatic`, `NoValidAccessor` |
//!
//! Checking is a pure computation: no I/O, no shared state, no mutation of
//! the symbols. Batch processing across a round - and the policy of stopping
//! the round at the first rejected class - belongs to the host and lives in
//! [`round::RoundProcessor`].

pub mod marker;
pub mod round;
pub mod rules;

pub use marker::{LanguageVersion, MARKER_NAME};
pub use round::{CollectingSink, DiagnosticSink, RoundConfig, RoundProcessor, RoundStatus};
pub use rules::SingletonChecker;
