//! The project being posted: steps, field values, wizard state

mod draft;
mod listing;
mod review;
mod step;
mod wizard;

pub use draft::{
    accepts_budget_char, BudgetType, Category, Choice, ExperienceLevel, ProjectDraft,
    ProjectDuration, MAX_BUDGET_LEN,
};
pub use listing::{ListingError, ProjectListing};
pub use review::{Milestone, MilestoneStatus, ReviewSummary, CHECKLIST, DISCLAIMER, MILESTONES};
pub use step::Step;
pub use wizard::{SubmissionRequest, WizardError, WizardState};
