//! Trace assembly: per-sentence records and the full result set.
//!
//! [`trace`] runs the whole pipeline over a text: split into sentences,
//! tokenize each sentence, encode its words with a fresh chain, and collect
//! the results in input order. Nothing is filtered, sorted or deduplicated;
//! a sentence without any word tokens still gets a record.

use crate::encoder::{WordResult, encode_sentence};
use crate::error::TraceError;
use crate::tokenizer::{split_sentences, words};
use std::fmt;
use tracing::debug;

/// The trace of one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord {
    /// The sentence text as it appeared in the input.
    pub sentence: String,
    /// One result per word token, in order.
    pub words: Vec<WordResult>,
}

impl SentenceRecord {
    /// Input descriptors, e.g. `Pos:0, Hash:105`.
    pub fn inputs(&self) -> Vec<String> {
        self.words.iter().map(WordResult::input_descriptor).collect()
    }

    /// Output values.
    pub fn outputs(&self) -> Vec<i64> {
        self.words.iter().map(|w| w.output).collect()
    }

    /// Logic strings.
    pub fn logic(&self) -> Vec<String> {
        self.words.iter().map(WordResult::logic).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for SentenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sentence: {}", self.sentence)?;

        write!(f, "Inputs: [")?;
        for (idx, input) in self.inputs().iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{input}'")?;
        }
        writeln!(f, "]")?;

        write!(f, "Outputs: [")?;
        for (idx, output) in self.outputs().iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{output}")?;
        }
        writeln!(f, "]")?;

        writeln!(f, "Algebraic Logic:")?;
        for word in &self.words {
            writeln!(f, "  {word}")?;
        }
        Ok(())
    }
}

/// The ordered trace of a whole input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub sentences: Vec<SentenceRecord>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SentenceRecord> {
        self.sentences.iter()
    }

    /// Total number of encoded words across all sentences.
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(|s| s.words.len()).sum()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a SentenceRecord;
    type IntoIter = std::slice::Iter<'a, SentenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Processed Results (Algebraic Logic with Input/Output):")?;
        for record in &self.sentences {
            writeln!(f)?;
            write!(f, "{record}")?;
        }
        Ok(())
    }
}

/// Build a sentence record from its text and index.
pub fn trace_sentence(sentence_index: usize, sentence: &str) -> SentenceRecord {
    let tokens = words(sentence);
    let results = encode_sentence(sentence_index, tokens.as_slice());
    debug!(sentence_index, words = results.len(), "traced sentence");
    SentenceRecord {
        sentence: sentence.to_string(),
        words: results,
    }
}

/// Run the full pipeline over `text`.
///
/// Returns [`TraceError::EmptyInput`] for empty or whitespace-only text
/// without doing any work.
pub fn trace(text: &str) -> Result<ResultSet, TraceError> {
    if text.trim().is_empty() {
        return Err(TraceError::EmptyInput);
    }

    let sentences = split_sentences(text)
        .into_iter()
        .enumerate()
        .map(|(idx, sentence)| trace_sentence(idx, sentence))
        .collect();

    Ok(ResultSet { sentences })
}
