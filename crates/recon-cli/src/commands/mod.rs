//! Command implementations

mod apply;
mod case;
mod compare;
mod normalize;

pub use apply::{ApplyArgs, run_apply};
pub use case::{run_camelize, run_snake, run_snake_keys};
pub use compare::run_compare;
pub use normalize::run_normalize;

/// How a command finished, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Nothing to do (exit 0)
    Reconciled,
    /// Observed state does not satisfy desired state (exit 2)
    Drifted,
}
