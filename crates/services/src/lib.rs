#![forbid(unsafe_code)]

pub mod attempt;
pub mod error;
pub mod loader;
pub mod reader;
pub mod sequencer;
pub mod session;

pub use attempt::QuizAttempt;
pub use error::{AttemptError, LoadError, SessionError};
pub use loader::load_questions;
pub use reader::spawn_line_reader;
pub use sequencer::shuffle_questions;
pub use session::QuizSession;
