//! Shared simulation lifecycle types

/// Lifecycle phase of a mounted simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimPhase {
    /// View unfocused or document hidden; nothing is stepped
    #[default]
    Idle,
    /// Stepping normally
    Running,
    /// The last tick hit a loss condition and the state was reset
    Terminal,
}

/// What a single tick produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    /// Loss condition reached; state already reset to initial values
    Terminal,
}

impl StepOutcome {
    pub fn is_terminal(self) -> bool {
        self == StepOutcome::Terminal
    }

    /// Phase the owning runner enters after this outcome
    pub fn phase(self) -> SimPhase {
        match self {
            StepOutcome::Continue => SimPhase::Running,
            StepOutcome::Terminal => SimPhase::Terminal,
        }
    }
}
