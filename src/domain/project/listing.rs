//! Listing payload assembled from the draft at submission time

use alloy_primitives::utils::parse_ether;
use alloy_primitives::U256;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use thiserror::Error;

use super::{BudgetType, Category, ExperienceLevel, ProjectDraft, ProjectDuration};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("invalid budget {input:?}: {reason}")]
    InvalidBudget { input: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectListing {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub skills: Vec<String>,
    pub experience: ExperienceLevel,
    /// Budget in wei (18 decimals), absent when left blank
    pub budget_wei: Option<U256>,
    pub budget_type: BudgetType,
    pub duration: ProjectDuration,
    pub deadline: DateTime<Utc>,
}

impl ProjectListing {
    pub fn from_draft(draft: &ProjectDraft, now: DateTime<Utc>) -> Result<Self, ListingError> {
        let budget = draft.budget.trim();
        let budget_wei = if budget.is_empty() {
            None
        } else {
            let wei = parse_ether(budget).map_err(|err| ListingError::InvalidBudget {
                input: budget.to_string(),
                reason: err.to_string(),
            })?;
            Some(wei)
        };

        Ok(Self {
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            category: draft.category,
            skills: draft.skill_list(),
            experience: draft.experience,
            budget_wei,
            budget_type: draft.budget_type,
            duration: draft.duration,
            deadline: now + Duration::days(draft.duration.max_days()),
        })
    }
}
