//! Submission handler - simulated project posting

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use alloy_primitives::ChainId;
use futures::FutureExt;
use thiserror::Error;

use crate::core::{NotifyLevel, Route};
use crate::domain::project::{ListingError, ProjectListing, SubmissionRequest};
use crate::infrastructure::crosschain::{CrossChainActions, CrossChainProjectRequest};

pub const POSTED_MESSAGE: &str = "Project posted successfully! (Demo Mode)";
pub const FAILED_MESSAGE: &str = "Error posting project. Please try again.";

pub fn cross_chain_message(chain_id: ChainId) -> String {
    format!("Cross-chain project will be created on chain {chain_id}! (Demo Mode)")
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Listing(#[from] ListingError),
    #[error("cross-chain creation failed: {0:#}")]
    CrossChain(anyhow::Error),
    #[error("submission panicked: {0}")]
    Panicked(String),
}

/// What the UI should do once a submission settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub message: String,
    pub level: NotifyLevel,
    /// Set on success only
    pub navigate_to: Option<Route>,
    /// Copied from the request so a reply can be matched to its wizard
    pub mount_id: u64,
}

impl SubmissionOutcome {
    fn posted(message: String, mount_id: u64) -> Self {
        Self {
            message,
            level: NotifyLevel::Info,
            navigate_to: Some(Route::Home),
            mount_id,
        }
    }

    pub fn failed(mount_id: u64) -> Self {
        Self {
            message: FAILED_MESSAGE.to_string(),
            level: NotifyLevel::Error,
            navigate_to: None,
            mount_id,
        }
    }

    pub fn is_success(&self) -> bool {
        self.navigate_to.is_some()
    }
}

pub struct SubmissionHandler {
    cross_chain: Arc<dyn CrossChainActions>,
}

impl SubmissionHandler {
    pub fn new(cross_chain: Arc<dyn CrossChainActions>) -> Self {
        Self { cross_chain }
    }

    /// Post the project and return the confirmation text.
    pub async fn submit(&self, request: &SubmissionRequest) -> Result<String, SubmitError> {
        let listing = ProjectListing::from_draft(&request.draft, chrono::Utc::now())?;

        match request.destination_chain_id {
            Some(destination_chain_id) => {
                let receipt = self
                    .cross_chain
                    .create_cross_chain_project(CrossChainProjectRequest {
                        listing,
                        source_chain_id: request.source_chain_id,
                        destination_chain_id,
                    })
                    .await
                    .map_err(SubmitError::CrossChain)?;
                Ok(cross_chain_message(receipt.destination_chain_id))
            }
            None => {
                tracing::info!(
                    title = %listing.title,
                    budget_wei = ?listing.budget_wei,
                    deadline = %listing.deadline,
                    "demo project posted"
                );
                Ok(POSTED_MESSAGE.to_string())
            }
        }
    }

    /// Run a submission to completion. Errors and panics are logged and
    /// turned into the generic failure outcome; nothing escapes.
    pub async fn run(&self, request: SubmissionRequest) -> SubmissionOutcome {
        let mount_id = request.mount_id;
        let result = AssertUnwindSafe(self.submit(&request))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(SubmitError::Panicked(panic_message(panic.as_ref()))));

        match result {
            Ok(message) => SubmissionOutcome::posted(message, mount_id),
            Err(err) => {
                tracing::error!(error = %err, "Error posting project");
                SubmissionOutcome::failed(mount_id)
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::ProjectDraft;
    use crate::infrastructure::crosschain::{CrossChainReceipt, DemoCrossChain};

    struct FailingCrossChain;

    #[async_trait::async_trait]
    impl CrossChainActions for FailingCrossChain {
        async fn create_cross_chain_project(
            &self,
            _request: CrossChainProjectRequest,
        ) -> anyhow::Result<CrossChainReceipt> {
            anyhow::bail!("bridge unavailable")
        }

        fn is_loading(&self) -> bool {
            false
        }
    }

    struct PanickingCrossChain;

    #[async_trait::async_trait]
    impl CrossChainActions for PanickingCrossChain {
        async fn create_cross_chain_project(
            &self,
            _request: CrossChainProjectRequest,
        ) -> anyhow::Result<CrossChainReceipt> {
            panic!("relayer exploded")
        }

        fn is_loading(&self) -> bool {
            false
        }
    }

    fn request(destination: Option<ChainId>) -> SubmissionRequest {
        SubmissionRequest {
            draft: ProjectDraft::default(),
            source_chain_id: Some(43113),
            destination_chain_id: destination,
            mount_id: 0,
        }
    }

    fn demo_handler() -> SubmissionHandler {
        SubmissionHandler::new(Arc::new(DemoCrossChain::new()))
    }

    #[tokio::test]
    async fn test_cross_chain_submission_mentions_destination() {
        let outcome = demo_handler().run(request(Some(5))).await;
        assert!(outcome.message.contains('5'));
        assert_eq!(outcome.message, cross_chain_message(5));
        assert_eq!(outcome.navigate_to, Some(Route::Home));
    }

    #[tokio::test]
    async fn test_plain_submission_uses_generic_message() {
        let outcome = demo_handler().run(request(None)).await;
        assert_eq!(outcome.message, POSTED_MESSAGE);
        assert_eq!(outcome.level, NotifyLevel::Info);
        assert_eq!(outcome.navigate_to.map(|r| r.path()), Some("/"));
    }

    #[tokio::test]
    async fn test_provider_error_becomes_failure_without_navigation() {
        let handler = SubmissionHandler::new(Arc::new(FailingCrossChain));
        let outcome = handler.run(request(Some(43114))).await;
        assert_eq!(outcome.message, FAILED_MESSAGE);
        assert_eq!(outcome.level, NotifyLevel::Error);
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn test_panic_is_contained() {
        let handler = SubmissionHandler::new(Arc::new(PanickingCrossChain));
        let outcome = handler.run(request(Some(43114))).await;
        assert_eq!(outcome.message, FAILED_MESSAGE);
        assert_eq!(outcome.navigate_to, None);
    }

    #[tokio::test]
    async fn test_malformed_budget_fails_both_branches() {
        for destination in [None, Some(43114)] {
            let mut req = request(destination);
            req.draft.budget = "1.2.3".into();
            let err = demo_handler().submit(&req).await.unwrap_err();
            assert!(matches!(err, SubmitError::Listing(_)));
            assert_eq!(demo_handler().run(req).await.message, FAILED_MESSAGE);
        }
    }
}
