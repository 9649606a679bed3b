use csv::ReaderBuilder;
use log::debug;
use std::io::Read;

use quiz_core::model::{QuestionPair, QuestionSet};

use crate::error::LoadError;

/// Decode a two-column CSV stream into a question set.
///
/// No header row; standard quoting rules. Either the whole input decodes or
/// nothing does: the first record without exactly two fields fails the load
/// with `LoadError::Format`, and a quoting or I/O failure fails it with
/// `LoadError::Read`. Record order is preserved.
///
/// # Errors
///
/// Returns `LoadError` as described above.
pub fn load_questions(input: impl Read) -> Result<QuestionSet, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut pairs = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != 2 {
            return Err(LoadError::Format {
                record: index + 1,
                fields: record.len(),
            });
        }
        // Positional headerless decode straight into the domain type.
        let pair: QuestionPair = record.deserialize(None)?;
        pairs.push(pair);
    }

    debug!("loaded {} questions", pairs.len());
    Ok(QuestionSet::from(pairs))
}
