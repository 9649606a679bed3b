use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptResultError {
    #[error("score ({score}) exceeds total ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },
}

/// Score for one pass through a question set.
///
/// `score <= total` holds for the lifetime of the value: it starts at zero,
/// and [`AttemptResult::record_correct`] never pushes it past `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptResult {
    score: u32,
    total: u32,
}

impl AttemptResult {
    /// Fresh zero score for an attempt over `total` questions.
    #[must_use]
    pub fn new(total: u32) -> Self {
        Self { score: 0, total }
    }

    /// Rehydrate a result from externally supplied counts.
    ///
    /// # Errors
    ///
    /// Returns `AttemptResultError::ScoreExceedsTotal` if `score > total`.
    pub fn from_parts(score: u32, total: u32) -> Result<Self, AttemptResultError> {
        if score > total {
            return Err(AttemptResultError::ScoreExceedsTotal { score, total });
        }
        Ok(Self { score, total })
    }

    /// Count one correct answer. Saturates at `total`.
    pub fn record_correct(&mut self) {
        if self.score < self.total {
            self.score += 1;
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }
}

impl fmt::Display for AttemptResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}

/// How an attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Every question was presented and answered before the deadline.
    Completed,
    /// The deadline fired with questions still outstanding.
    TimedOut,
}

/// Result and outcome of a single attempt, produced once when it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptReport {
    pub result: AttemptResult,
    pub outcome: AttemptOutcome,
}

impl AttemptReport {
    #[must_use]
    pub fn timed_out(&self) -> bool {
        matches!(self.outcome, AttemptOutcome::TimedOut)
    }
}
