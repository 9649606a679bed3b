use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use quiz_core::model::{AttemptReport, QuestionSet};
use storage::ScoreSink;

use crate::attempt::QuizAttempt;
use crate::error::SessionError;

/// Drives one or more attempts over the same question set.
///
/// Question order is fixed when the session starts; a retried attempt sees
/// the same order as the first one. All line input — answers and the retry
/// prompt alike — comes from the one receiver handed to [`QuizSession::run`],
/// so a line typed after a timeout is consumed by whatever asks next.
pub struct QuizSession {
    limit: Duration,
    sink: Option<Arc<dyn ScoreSink>>,
    retry: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            sink: None,
            retry: false,
        }
    }

    /// Append each attempt's score to the given sink.
    #[must_use]
    pub fn with_score_sink(mut self, sink: Arc<dyn ScoreSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Offer a retry prompt after each completed attempt.
    #[must_use]
    pub fn with_retry(mut self, retry: bool) -> Self {
        self.retry = retry;
        self
    }

    /// Run attempts until the user declines a retry, an attempt times out,
    /// or input runs out at the retry prompt. Returns the last report.
    ///
    /// Every attempt's score is printed and, when a sink is configured,
    /// persisted — including a timed-out attempt's partial score. A timeout
    /// ends the session without offering a retry.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` for attempt failures, sink append failures,
    /// and output write failures.
    pub async fn run(
        &self,
        questions: QuestionSet,
        answers: &mut mpsc::Receiver<String>,
        out: &mut impl Write,
    ) -> Result<AttemptReport, SessionError> {
        let attempt = QuizAttempt::new(questions, self.limit);

        loop {
            let report = attempt.run(answers, out).await?;

            if report.timed_out() {
                writeln!(out, "\nTime out!")?;
            }
            writeln!(out, "Your Score: {}", report.result)?;
            if let Some(sink) = &self.sink {
                sink.append(&report.result).await?;
            }

            if report.timed_out() || !self.retry {
                return Ok(report);
            }

            writeln!(out, "Do you want to retry? (yes/no)")?;
            out.flush()?;
            match answers.recv().await {
                Some(line) if line.trim().eq_ignore_ascii_case("yes") => {}
                // Anything else — "no", empty input, closed stdin — ends
                // the session.
                _ => return Ok(report),
            }
        }
    }
}
