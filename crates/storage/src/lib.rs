#![forbid(unsafe_code)]

pub mod sink;

pub use sink::{FileScoreSink, InMemoryScoreSink, ScoreSink, StorageError};
