//! Data shown on the review step

use alloy_primitives::ChainId;

use super::{Choice, WizardState};

const DEMO_TITLE: &str = "Build a mobile app";
const DEMO_BUDGET: &str = "5,000 USDT";

pub const CHECKLIST: [&str; 3] = [
    "Double-check that milestones match the expected deliverables.",
    "Escrow releases once each milestone is approved by your team.",
    "Payments settle in USDT on Avalanche with transparent fees.",
];

pub const DISCLAIMER: &str =
    "By posting this project, you agree that this is a demo and no real project will be created.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneStatus {
    Approved,
    PendingReview,
}

impl MilestoneStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MilestoneStatus::Approved => "Approved",
            MilestoneStatus::PendingReview => "Pending review",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub name: &'static str,
    pub eta_days: u32,
    pub status: MilestoneStatus,
}

pub const MILESTONES: [Milestone; 2] = [
    Milestone {
        name: "Discovery & wireframes",
        eta_days: 5,
        status: MilestoneStatus::Approved,
    },
    Milestone {
        name: "Smart contract handoff",
        eta_days: 7,
        status: MilestoneStatus::PendingReview,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub budget: String,
    pub budget_note: String,
    pub details: Vec<(&'static str, String)>,
    pub cross_chain_destination: Option<ChainId>,
}

impl ReviewSummary {
    /// Summarize the entered values. Empty text fields fall back to the demo
    /// listing so the page never shows blanks.
    pub fn from_state(state: &WizardState) -> Self {
        let draft = &state.draft;
        let title = non_empty(&draft.title).unwrap_or(DEMO_TITLE).to_string();
        let budget = non_empty(&draft.budget)
            .map(|amount| format!("{amount} AVAX"))
            .unwrap_or_else(|| DEMO_BUDGET.to_string());
        let skills = draft.skill_list();
        let skills = if skills.is_empty() {
            "Not specified".to_string()
        } else {
            skills.join(", ")
        };

        Self {
            budget,
            budget_note: format!("{} · Split across 3 milestones", draft.budget_type.label()),
            details: vec![
                ("Title", title),
                ("Category", draft.category.label().to_string()),
                ("Duration", draft.duration.label().to_string()),
                ("Experience", draft.experience.label().to_string()),
                ("Skills", skills),
            ],
            cross_chain_destination: state.cross_chain_destination(),
        }
    }

    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|(key, _)| *key == label)
            .map(|(_, value)| value.as_str())
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::{Category, ProjectDuration};

    #[test]
    fn test_review_uses_entered_values() {
        let mut state = WizardState::new();
        state.draft.title = "Indexer for escrow events".into();
        state.draft.category = Category::Design;
        state.draft.duration = ProjectDuration::ThreeToSixMonths;
        state.draft.budget = "12.5".into();
        state.draft.skills = "Rust, Solidity".into();

        let summary = ReviewSummary::from_state(&state);
        assert_eq!(summary.detail("Title"), Some("Indexer for escrow events"));
        assert_eq!(summary.detail("Category"), Some("Design"));
        assert_eq!(summary.detail("Duration"), Some("3-6 months"));
        assert_eq!(summary.detail("Skills"), Some("Rust, Solidity"));
        assert_eq!(summary.budget, "12.5 AVAX");
    }

    #[test]
    fn test_review_falls_back_to_demo_listing() {
        let summary = ReviewSummary::from_state(&WizardState::new());
        assert_eq!(summary.detail("Title"), Some(DEMO_TITLE));
        assert_eq!(summary.budget, DEMO_BUDGET);
        assert_eq!(summary.detail("Skills"), Some("Not specified"));
        assert_eq!(summary.cross_chain_destination, None);
    }

    #[test]
    fn test_cross_chain_notice_needs_toggle_and_destination() {
        let mut state = WizardState::new();
        state.destination_chain_id = Some(43113);
        assert_eq!(ReviewSummary::from_state(&state).cross_chain_destination, None);
        state.is_cross_chain = true;
        assert_eq!(
            ReviewSummary::from_state(&state).cross_chain_destination,
            Some(43113)
        );
    }
}
