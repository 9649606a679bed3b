mod attempt;
mod question;

pub use attempt::{AttemptOutcome, AttemptReport, AttemptResult, AttemptResultError};
pub use question::{QuestionPair, QuestionSet};
