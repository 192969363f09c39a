//! Controlled field bindings for the project being posted

use serde::Serialize;

/// A fixed set of options a choice field cycles through.
pub trait Choice: Copy + Eq + Sized + 'static {
    const OPTIONS: &'static [Self];

    fn label(&self) -> &'static str;

    fn cycle(&self, forward: bool) -> Self {
        let len = Self::OPTIONS.len();
        let idx = Self::OPTIONS.iter().position(|opt| opt == self).unwrap_or(0);
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        Self::OPTIONS[next]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Category {
    #[default]
    WebDevelopment,
    MobileDevelopment,
    Design,
    Writing,
    Other,
}

impl Choice for Category {
    const OPTIONS: &'static [Self] = &[
        Category::WebDevelopment,
        Category::MobileDevelopment,
        Category::Design,
        Category::Writing,
        Category::Other,
    ];

    fn label(&self) -> &'static str {
        match self {
            Category::WebDevelopment => "Web Development",
            Category::MobileDevelopment => "Mobile Development",
            Category::Design => "Design",
            Category::Writing => "Writing",
            Category::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ExperienceLevel {
    #[default]
    Entry,
    Intermediate,
    Expert,
}

impl Choice for ExperienceLevel {
    const OPTIONS: &'static [Self] = &[
        ExperienceLevel::Entry,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Expert,
    ];

    fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry Level",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BudgetType {
    #[default]
    Fixed,
    Hourly,
}

impl Choice for BudgetType {
    const OPTIONS: &'static [Self] = &[BudgetType::Fixed, BudgetType::Hourly];

    fn label(&self) -> &'static str {
        match self {
            BudgetType::Fixed => "Fixed Price",
            BudgetType::Hourly => "Hourly Rate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ProjectDuration {
    #[default]
    UnderOneMonth,
    OneToThreeMonths,
    ThreeToSixMonths,
    OverSixMonths,
}

impl ProjectDuration {
    /// Upper bound of the range in days, used to derive a deadline
    pub fn max_days(&self) -> i64 {
        match self {
            ProjectDuration::UnderOneMonth => 30,
            ProjectDuration::OneToThreeMonths => 90,
            ProjectDuration::ThreeToSixMonths => 180,
            ProjectDuration::OverSixMonths => 365,
        }
    }
}

impl Choice for ProjectDuration {
    const OPTIONS: &'static [Self] = &[
        ProjectDuration::UnderOneMonth,
        ProjectDuration::OneToThreeMonths,
        ProjectDuration::ThreeToSixMonths,
        ProjectDuration::OverSixMonths,
    ];

    fn label(&self) -> &'static str {
        match self {
            ProjectDuration::UnderOneMonth => "Less than 1 month",
            ProjectDuration::OneToThreeMonths => "1-3 months",
            ProjectDuration::ThreeToSixMonths => "3-6 months",
            ProjectDuration::OverSixMonths => "More than 6 months",
        }
    }
}

/// Everything the user typed or picked in steps 1-3.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub skills: String,
    pub experience: ExperienceLevel,
    pub budget: String,
    pub budget_type: BudgetType,
    pub duration: ProjectDuration,
}

impl ProjectDraft {
    /// Comma separated skills, trimmed, empties dropped
    pub fn skill_list(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Longest budget the field takes. Whole ether amounts of this length stay
/// far below `U256::MAX` once scaled to wei.
pub const MAX_BUDGET_LEN: usize = 24;

/// Accept a keystroke into the budget field: digits and a single '.', up to
/// `MAX_BUDGET_LEN` characters
pub fn accepts_budget_char(current: &str, ch: char) -> bool {
    if current.len() >= MAX_BUDGET_LEN {
        return false;
    }
    ch.is_ascii_digit() || (ch == '.' && !current.contains('.'))
}
