//! # sv-core
//!
//! Core symbol and diagnostic types for singleton conformance checking.
//!
//! A host resolver produces one immutable [`ClassSymbol`] per marked class
//! per processing round; the checker crate pattern-matches over that graph
//! and answers with a [`Verdict`]. Nothing here parses source text or
//! performs reflection - symbols are plain records, constructed by the host
//! and discarded after the check.

pub mod diagnostic;
pub mod location;
pub mod symbol;

pub use diagnostic::{Diagnostic, Severity, Verdict};
pub use location::SourceLocation;
pub use symbol::{AccessModifier, ClassSymbol, ConstructorSymbol, MethodSymbol, TypeName};
