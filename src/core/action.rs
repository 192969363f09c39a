//! Actions that modules can return to communicate with the app

use alloy_primitives::ChainId;

use super::Route;
use crate::domain::project::SubmissionRequest;

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Navigate to a route
    Navigate(Route),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Hand a wizard snapshot to the submission handler
    Submit(SubmissionRequest),

    /// A chain was picked in the chain selector
    SelectChain(ChainId),

    /// Close current overlay/popup
    CloseOverlay,

    /// Show the key binding help
    OpenHelp,

    /// Look up the current chain again
    DetectNetwork,

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
