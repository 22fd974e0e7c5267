//! Reconciliation driver for desired/observed configuration trees
//!
//! Ties normalization and comparison together around an external resource:
//! fetch the observed state, decide whether it satisfies the desired state,
//! and submit (or delete) only when it does not.

pub mod client;
pub mod error;
pub mod logging;
pub mod profile;
pub mod reconciler;
pub mod store;

pub use client::{FileResource, MemoryResource, ResourceClient};
pub use error::{Error, Result};
pub use profile::Profile;
pub use reconciler::{Presence, ReconcileAction, ReconcileOutcome, Reconciler};
