use std::io::Write;
use std::time::Duration;

use log::info;
use tokio::sync::mpsc;
use tokio::time::sleep;

use quiz_core::model::{AttemptOutcome, AttemptReport, AttemptResult, QuestionSet};

use crate::error::AttemptError;

/// One timed pass over a question set.
///
/// A single deadline covers the whole attempt; time spent on one question is
/// gone for the next. Each question races the incoming answer line against
/// that deadline, so a slow answer can only lose to the clock, never block
/// it.
pub struct QuizAttempt {
    questions: QuestionSet,
    limit: Duration,
}

impl QuizAttempt {
    #[must_use]
    pub fn new(questions: QuestionSet, limit: Duration) -> Self {
        Self { questions, limit }
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// Run the attempt to its end: all questions answered, or the deadline.
    ///
    /// Prompts are written to `out` as `"<prompt>: "` and answers are taken
    /// from `answers`, one line per question. Answer comparison is
    /// whitespace-trimmed and case-insensitive. A timed-out attempt is a
    /// normal report carrying the score accumulated so far against the full
    /// set size; no further prompts are written once the deadline fires.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::InputClosed` if `answers` closes with
    /// questions still outstanding, `AttemptError::Io` if a prompt cannot
    /// be written.
    pub async fn run(
        &self,
        answers: &mut mpsc::Receiver<String>,
        out: &mut impl Write,
    ) -> Result<AttemptReport, AttemptError> {
        let total = u32::try_from(self.questions.len())
            .map_err(|_| AttemptError::TooManyQuestions {
                len: self.questions.len(),
            })?;
        let mut result = AttemptResult::new(total);

        if self.questions.is_empty() {
            return Ok(AttemptReport {
                result,
                outcome: AttemptOutcome::Completed,
            });
        }

        // One clock for the entire attempt, never reset between questions.
        let deadline = sleep(self.limit);
        tokio::pin!(deadline);

        for pair in &self.questions {
            write!(out, "{}: ", pair.prompt())?;
            out.flush()?;

            tokio::select! {
                () = &mut deadline => {
                    info!("attempt timed out at {result}");
                    return Ok(AttemptReport {
                        result,
                        outcome: AttemptOutcome::TimedOut,
                    });
                }
                line = answers.recv() => {
                    let line = line.ok_or(AttemptError::InputClosed)?;
                    if pair.matches(&line) {
                        result.record_correct();
                    }
                }
            }
        }

        info!("attempt completed at {result}");
        Ok(AttemptReport {
            result,
            outcome: AttemptOutcome::Completed,
        })
    }
}
