//! Wizard state record and its transitions

use alloy_primitives::ChainId;
use thiserror::Error;

use super::{ProjectDraft, Step};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("projects can only be submitted from the review step (currently on step {})", .0.number())]
    NotOnReviewStep(Step),
    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

/// State owned by a single wizard instance. Dropped when the user leaves the
/// page, so a fresh instance always starts on step 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub step: Step,
    pub is_loading: bool,
    pub is_cross_chain: bool,
    pub destination_chain_id: Option<ChainId>,
    pub draft: ProjectDraft,
    /// Identifies the page visit this state belongs to
    pub mount_id: u64,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: Step::FIRST,
            is_loading: false,
            is_cross_chain: false,
            destination_chain_id: None,
            draft: ProjectDraft::default(),
            mount_id: 0,
        }
    }
}

/// Snapshot handed to the submission handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub draft: ProjectDraft,
    pub source_chain_id: Option<ChainId>,
    /// Set only when cross-chain is enabled and a destination was picked
    pub destination_chain_id: Option<ChainId>,
    /// `mount_id` of the wizard that sent it
    pub mount_id: u64,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move forward one step. Returns false on the last step.
    pub fn advance(&mut self) -> bool {
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move back one step. Returns false on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    pub fn toggle_cross_chain(&mut self) {
        self.is_cross_chain = !self.is_cross_chain;
    }

    pub fn select_destination(&mut self, chain_id: ChainId) {
        self.destination_chain_id = Some(chain_id);
    }

    /// The destination chain, consulted only while cross-chain is on. Chain
    /// id 0 counts as no destination.
    pub fn cross_chain_destination(&self) -> Option<ChainId> {
        if self.is_cross_chain {
            self.destination_chain_id.filter(|id| *id != 0)
        } else {
            None
        }
    }

    pub fn can_submit(&self) -> bool {
        self.step.is_last() && !self.is_loading
    }

    /// Enter the loading state and snapshot what should be submitted.
    pub fn begin_submission(
        &mut self,
        source_chain_id: Option<ChainId>,
    ) -> Result<SubmissionRequest, WizardError> {
        if !self.step.is_last() {
            return Err(WizardError::NotOnReviewStep(self.step));
        }
        if self.is_loading {
            return Err(WizardError::AlreadySubmitting);
        }
        self.is_loading = true;
        Ok(SubmissionRequest {
            draft: self.draft.clone(),
            source_chain_id,
            destination_chain_id: self.cross_chain_destination(),
            mount_id: self.mount_id,
        })
    }

    pub fn finish_submission(&mut self) {
        self.is_loading = false;
    }
}
