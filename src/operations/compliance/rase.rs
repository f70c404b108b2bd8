//! RASE rule evaluation.
//!
//! Regulatory clauses are split into Applicability, Selection, Exception and
//! Requirement statements. A rule passes as soon as it does not apply, is
//! not selected, is excepted, or has all of its requirements met.

/// Boolean results of the four statement kinds of one rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaseCheck {
    pub applicability: Vec<bool>,
    pub selection: Vec<bool>,
    pub exception: Vec<bool>,
    pub requirement: Vec<bool>,
}

impl RaseCheck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn applies(mut self, holds: bool) -> Self {
        self.applicability.push(holds);
        self
    }

    #[must_use]
    pub fn selects(mut self, holds: bool) -> Self {
        self.selection.push(holds);
        self
    }

    #[must_use]
    pub fn except(mut self, holds: bool) -> Self {
        self.exception.push(holds);
        self
    }

    #[must_use]
    pub fn requires(mut self, holds: bool) -> Self {
        self.requirement.push(holds);
        self
    }

    /// Passes when any applicability statement fails (the rule does not
    /// apply).
    #[must_use]
    pub fn applicability_passes(&self) -> bool {
        self.applicability.iter().any(|a| !a)
    }

    /// Passes when no selection statement holds.
    #[must_use]
    pub fn selection_passes(&self) -> bool {
        !self.selection.iter().any(|s| *s)
    }

    /// Passes when any exception holds.
    #[must_use]
    pub fn exception_passes(&self) -> bool {
        self.exception.iter().any(|e| *e)
    }

    /// Passes when every requirement holds.
    #[must_use]
    pub fn requirement_passes(&self) -> bool {
        self.requirement.iter().all(|r| *r)
    }

    /// Evaluates the whole rule.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.applicability_passes()
            || self.selection_passes()
            || self.exception_passes()
            || self.requirement_passes()
    }
}
