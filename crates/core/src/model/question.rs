use serde::Deserialize;
use std::slice;

/// A single prompt/expected-answer pair loaded from the question file.
///
/// Field order matters to `Deserialize`: records decode positionally, prompt
/// first, answer second.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionPair {
    prompt: String,
    answer: String,
}

impl QuestionPair {
    #[must_use]
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// The text shown to the user.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The expected answer, exactly as loaded.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Compare a typed line against the expected answer.
    ///
    /// Both sides are trimmed of leading/trailing whitespace and compared
    /// case-insensitively; anything short of an exact match after that
    /// normalization is wrong.
    #[must_use]
    pub fn matches(&self, typed: &str) -> bool {
        normalize(typed) == normalize(&self.answer)
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Ordered collection of questions; insertion order is presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet(Vec<QuestionPair>);

impl QuestionSet {
    #[must_use]
    pub fn new(pairs: Vec<QuestionPair>) -> Self {
        Self(pairs)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, QuestionPair> {
        self.0.iter()
    }

    /// Mutable view over the pairs, for reordering.
    pub fn as_mut_slice(&mut self) -> &mut [QuestionPair] {
        &mut self.0
    }
}

impl From<Vec<QuestionPair>> for QuestionSet {
    fn from(pairs: Vec<QuestionPair>) -> Self {
        Self(pairs)
    }
}

impl IntoIterator for QuestionSet {
    type Item = QuestionPair;
    type IntoIter = std::vec::IntoIter<QuestionPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a QuestionPair;
    type IntoIter = slice::Iter<'a, QuestionPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
