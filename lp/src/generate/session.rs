//! Submission state ownership
//!
//! The controller is the single writer of the generated text. Each call to
//! [`SubmissionController::begin`] starts a new generation; outcomes tagged
//! with an older token are discarded, so a superseded in-flight stream can
//! never corrupt the accumulator.

use super::outcome::RequestOutcome;

/// Identifies one submission's generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionToken(u64);

/// Result of applying an outcome to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Outcome belonged to the current generation and was recorded
    Accepted,

    /// Outcome arrived for a superseded generation and was dropped
    Stale,
}

/// Owns the outcome state machine and the accumulating plan text
#[derive(Debug, Default)]
pub struct SubmissionController {
    generation: u64,
    state: Option<RequestOutcome>,
    text: String,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new submission, resetting the accumulator
    ///
    /// Any outcome applied with a previously issued token becomes stale.
    pub fn begin(&mut self) -> SubmissionToken {
        self.generation += 1;
        self.text.clear();
        self.state = Some(RequestOutcome::Pending);
        SubmissionToken(self.generation)
    }

    /// Record an outcome for the submission identified by `token`
    pub fn apply(&mut self, token: SubmissionToken, outcome: RequestOutcome) -> Applied {
        if token.0 != self.generation {
            return Applied::Stale;
        }
        if let RequestOutcome::Chunk(text) = &outcome {
            self.text.push_str(text);
        }
        self.state = Some(outcome);
        Applied::Accepted
    }

    /// Latest recorded outcome, if a submission has started
    pub fn state(&self) -> Option<&RequestOutcome> {
        self.state.as_ref()
    }

    /// Concatenation of all chunks accepted for the current generation
    pub fn text(&self) -> &str {
        &self.text
    }
}
