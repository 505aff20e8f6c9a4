//! Round-driven batch processing.
//!
//! One round of the host's iterative compile-time processing: the host
//! discovers the marked classes, hands them over in discovery order together
//! with a diagnostic sink, and redrives the checker in a later round once
//! reported errors are fixed. Whether a rejection ends the round early is
//! host policy, carried in [`RoundConfig`] - the rule engine itself stays a
//! pure per-class function.

use sv_core::{ClassSymbol, Diagnostic, Verdict};
use tracing::{debug, info};

use crate::rules::SingletonChecker;

/// Host-side diagnostic sink.
///
/// The host decides what a reported diagnostic means - typically a
/// build-breaking error per report.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Sink that collects diagnostics in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    /// Diagnostics in emission order
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Policy knobs for one processing round.
#[derive(Debug, Clone)]
pub struct RoundConfig {
    /// Stop at the first rejecting class and leave the rest to a later
    /// round. Hosts wanting one exhaustive pass set this to false.
    pub fail_fast: bool,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self { fail_fast: true }
    }
}

/// Outcome of one processing round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Every presented class conforms.
    Complete,
    /// At least one class was rejected; the host should redrive once the
    /// reported errors are fixed.
    Incomplete,
}

/// Drives the checker over one round's worth of classes.
///
/// Retains no state between rounds: the host re-discovers the marked
/// classes each round and calls [`RoundProcessor::process`] again.
#[derive(Debug, Clone, Default)]
pub struct RoundProcessor {
    checker: SingletonChecker,
    config: RoundConfig,
}

impl RoundProcessor {
    /// Create a processor with the given policy.
    #[must_use]
    pub fn new(config: RoundConfig) -> Self {
        Self {
            checker: SingletonChecker::new(),
            config,
        }
    }

    /// Create with default policy (stop at the first rejection).
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(RoundConfig::default())
    }

    /// Check every class in supplied order, forwarding each rejected
    /// class's diagnostics to the sink verbatim.
    ///
    /// Under `fail_fast` the first rejecting class ends the round and the
    /// remaining classes are not examined.
    pub fn process(&self, classes: &[ClassSymbol], sink: &mut dyn DiagnosticSink) -> RoundStatus {
        let mut status = RoundStatus::Complete;

        for class in classes {
            match self.checker.check(class) {
                Verdict::Accepted => {
                    debug!(class = %class.qualified_name, "class conforms");
                }
                Verdict::Rejected(diagnostics) => {
                    debug!(
                        class = %class.qualified_name,
                        count = diagnostics.len(),
                        "class rejected"
                    );
                    for diagnostic in diagnostics {
                        sink.report(diagnostic);
                    }
                    status = RoundStatus::Incomplete;
                    if self.config.fail_fast {
                        break;
                    }
                }
            }
        }

        let complete = status == RoundStatus::Complete;
        info!(classes = classes.len(), complete, "round finished");
        status
    }

    /// The active policy.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }
}
