//! The reconciliation decision
//!
//! One call handles one resource: normalize desired state, fetch observed
//! state, and pick an action.
//!
//! | wanted  | observed | comparison | action |
//! |---------|----------|------------|--------|
//! | present | missing  | -          | Create |
//! | present | found    | matches    | None   |
//! | present | found    | differs    | Update |
//! | absent  | found    | -          | Delete |
//! | absent  | missing  | -          | None   |
//!
//! In check mode the action is decided and reported but never carried out.

use recon_compare::{Comparator, Mismatch, render_diff};
use recon_normalize::Normalizer;
use recon_tree::ConfigTree;
use serde::{Deserialize, Serialize};

use crate::client::ResourceClient;
use crate::Result;

/// Whether the resource should exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    #[default]
    Present,
    Absent,
}

/// What the reconciler did (or would do in check mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconcileAction {
    Create,
    Update,
    Delete,
    None,
}

/// Result of one reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileOutcome {
    pub action: ReconcileAction,
    /// True when the action changes the resource.
    pub changed: bool,
    /// True when the action was only reported, not applied.
    pub check_mode: bool,
    /// The first difference that triggered an update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch: Option<Mismatch>,
    /// Unified diff from observed to desired for updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
    /// Resource state after the call, `None` when it does not exist.
    pub state: Option<ConfigTree>,
}

impl ReconcileOutcome {
    fn unchanged(state: Option<ConfigTree>, check_mode: bool) -> Self {
        Self {
            action: ReconcileAction::None,
            changed: false,
            check_mode,
            mismatch: None,
            diff: None,
            state,
        }
    }
}

/// Drives a [`ResourceClient`] towards a desired state.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    normalizer: Normalizer,
    comparator: Comparator,
    check_mode: bool,
}

impl Reconciler {
    pub fn new(normalizer: Normalizer, comparator: Comparator) -> Self {
        Self {
            normalizer,
            comparator,
            check_mode: false,
        }
    }

    /// Decide and report, but never submit or delete.
    pub fn with_check_mode(mut self, check_mode: bool) -> Self {
        self.check_mode = check_mode;
        self
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    /// Reconcile `client` against `desired`.
    pub fn reconcile<C>(
        &self,
        client: &mut C,
        desired: &ConfigTree,
        presence: Presence,
    ) -> Result<ReconcileOutcome>
    where
        C: ResourceClient + ?Sized,
    {
        let observed = client.fetch()?;

        match (presence, observed) {
            (Presence::Absent, None) => {
                tracing::info!("Resource absent as desired");
                Ok(ReconcileOutcome::unchanged(None, self.check_mode))
            }
            (Presence::Absent, Some(observed)) => {
                let state = if self.check_mode {
                    tracing::info!("[check] Would delete resource");
                    Some(observed)
                } else {
                    tracing::info!("Deleting resource");
                    client.delete()?;
                    None
                };
                Ok(ReconcileOutcome {
                    action: ReconcileAction::Delete,
                    changed: true,
                    check_mode: self.check_mode,
                    mismatch: None,
                    diff: None,
                    state,
                })
            }
            (Presence::Present, None) => {
                let desired = self.normalizer.normalized(desired);
                let state = if self.check_mode {
                    tracing::info!("[check] Would create resource");
                    desired
                } else {
                    tracing::info!("Creating resource");
                    client.submit(&desired)?
                };
                Ok(ReconcileOutcome {
                    action: ReconcileAction::Create,
                    changed: true,
                    check_mode: self.check_mode,
                    mismatch: None,
                    diff: None,
                    state: Some(state),
                })
            }
            (Presence::Present, Some(observed)) => {
                let desired = self.normalizer.normalized(desired);
                let comparison = self.comparator.compare(&desired, &observed);

                if comparison.matched {
                    tracing::info!("Resource already reconciled");
                    return Ok(ReconcileOutcome::unchanged(Some(observed), self.check_mode));
                }

                if let Some(mismatch) = &comparison.mismatch {
                    tracing::info!(path = %mismatch.path, "Resource drifted: {}", mismatch.reason);
                }

                let diff = render_diff(&desired, &observed);
                let state = if self.check_mode {
                    tracing::info!("[check] Would update resource");
                    observed
                } else {
                    tracing::info!("Updating resource");
                    client.submit(&desired)?
                };

                Ok(ReconcileOutcome {
                    action: ReconcileAction::Update,
                    changed: true,
                    check_mode: self.check_mode,
                    mismatch: comparison.mismatch,
                    diff: Some(diff),
                    state: Some(state),
                })
            }
        }
    }
}
