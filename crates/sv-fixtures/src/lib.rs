//! # sv-fixtures
//!
//! Reference class shapes for singleton conformance checking.
//!
//! Each builder returns the symbol graph a host resolver would produce for
//! a small marked class: the canonical well-formed singleton, plus one
//! ill-formed variant per rule in the taxonomy. Hosts use them as test
//! fixtures; the checker's integration suite drives them end to end.

pub mod shapes;

pub use shapes::{
    instance_accessor, misleading_overload, missing_accessor, no_qualifying_accessor,
    private_accessor, public_constructor, well_formed,
};
