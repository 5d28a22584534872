/// Wizard step definitions
///
/// The four selecting steps of the booking flow. Confirmation is not a step;
/// it is the terminal flag on `WizardState`.

/// Booking step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum WizardStep {
    /// Pick a wellness service
    #[default]
    Service,

    /// Pick a date (and optionally a time)
    Date,

    /// Pick a specialist
    Specialist,

    /// Review and confirm
    Review,
}

impl WizardStep {
    /// Get step title
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Service => "Choose Your Path",
            WizardStep::Date => "Select a Date",
            WizardStep::Specialist => "Choose Your Specialist",
            WizardStep::Review => "Booking Summary",
        }
    }

    /// Short label for the progress tracker
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Service => "Path",
            WizardStep::Date => "Date",
            WizardStep::Specialist => "Guide",
            WizardStep::Review => "Review",
        }
    }

    /// Get step index (0-based)
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Service => 0,
            WizardStep::Date => 1,
            WizardStep::Specialist => 2,
            WizardStep::Review => 3,
        }
    }

    /// Get the step at a 0-based index
    pub fn from_index(index: usize) -> Option<WizardStep> {
        Self::all_steps().get(index).copied()
    }

    /// Get total number of steps
    pub fn total_steps() -> usize {
        4
    }

    /// Check if this is the first step
    pub fn is_first(&self) -> bool {
        matches!(self, WizardStep::Service)
    }

    /// Check if this is the last step
    pub fn is_last(&self) -> bool {
        matches!(self, WizardStep::Review)
    }

    /// Get next step
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Service => Some(WizardStep::Date),
            WizardStep::Date => Some(WizardStep::Specialist),
            WizardStep::Specialist => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    /// Get all steps in order
    pub fn all_steps() -> [WizardStep; 4] {
        [
            WizardStep::Service,
            WizardStep::Date,
            WizardStep::Specialist,
            WizardStep::Review,
        ]
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which way the last transition moved; only the frontend cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    /// Signed form: -1, 0 or +1
    pub fn sign(&self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }
}
