//! Wizard steps

/// One page of the post-project wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Details,
    Skills,
    Budget,
    Review,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Details, Step::Skills, Step::Budget, Step::Review];

    pub const FIRST: Step = Step::Details;
    pub const LAST: Step = Step::Review;

    /// 1-based position shown in the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            Step::Details => 1,
            Step::Skills => 2,
            Step::Budget => 3,
            Step::Review => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Step> {
        match number {
            1 => Some(Step::Details),
            2 => Some(Step::Skills),
            3 => Some(Step::Budget),
            4 => Some(Step::Review),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Details => "Project Details",
            Step::Skills => "Skills Required",
            Step::Budget => "Budget & Timeline",
            Step::Review => "Review & Submit",
        }
    }

    pub fn next(&self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn prev(&self) -> Option<Step> {
        self.number().checked_sub(1).and_then(Step::from_number)
    }

    pub fn is_first(&self) -> bool {
        *self == Step::FIRST
    }

    pub fn is_last(&self) -> bool {
        *self == Step::LAST
    }
}
