//! Per-word encoding.
//!
//! Each word is reduced to a small numeric tuple:
//!
//! ```text
//! position  = sentence_index * word_count + word_index
//! hash      = sum(code points) mod 2^16
//! retrieved = hash ^ chain          (chain starts at 0 in every sentence)
//! output    = op(position, retrieved)
//! ```
//!
//! The chain is passed in and returned explicitly, so [`encode_word`] is a
//! pure function and a sentence is encoded by folding over its words.

use crate::op_code::OpCode;
use std::fmt;

/// Word-defined hash: the sum of the word's code points modulo 65536.
///
/// Independent of character order, so anagrams share a hash.
pub fn word_hash(word: &str) -> u16 {
    let sum = word.chars().map(|ch| u64::from(u32::from(ch))).sum::<u64>();
    (sum % 65536) as u16
}

/// Positional value of a word.
///
/// Uses the word count of the word's own sentence, so values are not globally
/// monotonic when sentences differ in length.
pub fn position_value(sentence_index: usize, word_count: usize, word_index: usize) -> u64 {
    (sentence_index as u64)
        .wrapping_mul(word_count as u64)
        .wrapping_add(word_index as u64)
}

/// Where a word sits in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSlot {
    pub sentence_index: usize,
    pub word_index: usize,
    /// Number of words in the enclosing sentence.
    pub word_count: usize,
}

/// The encoded trace of one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordResult {
    /// The lowercase token.
    pub word: String,
    pub position: u64,
    pub hash: u16,
    /// The hash XOR-chained with the previous word of the sentence.
    pub retrieved: u16,
    pub op_code: OpCode,
    pub output: i64,
}

impl WordResult {
    /// Input descriptor, e.g. `Pos:1, Hash:317`.
    pub fn input_descriptor(&self) -> String {
        format!("Pos:{}, Hash:{}", self.position, self.hash)
    }

    /// Human-readable rendering, e.g. `SEE (Op 0x5) : 1 ⊕ 317 → 341`.
    pub fn logic(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WordResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Op {}) : {} ⊕ {} → {}",
            self.word.to_uppercase(),
            self.op_code,
            self.position,
            self.hash,
            self.output
        )
    }
}

/// Encode one word given the chain state left by the previous word.
///
/// Returns the result and the chain state for the next word, which is the
/// word's retrieved value.
pub fn encode_word(slot: WordSlot, word: &str, chain: u16) -> (WordResult, u16) {
    let position = position_value(slot.sentence_index, slot.word_count, slot.word_index);
    let hash = word_hash(word);
    let retrieved = hash ^ chain;
    let op_code = OpCode::for_word(word);
    let output = op_code.apply(position, retrieved);

    let result = WordResult {
        word: word.to_string(),
        position,
        hash,
        retrieved,
        op_code,
        output,
    };
    (result, retrieved)
}

/// Encode all words of one sentence, threading the chain from 0.
pub fn encode_sentence<S: AsRef<str>>(sentence_index: usize, words: &[S]) -> Vec<WordResult> {
    let word_count = words.len();
    words
        .iter()
        .enumerate()
        .scan(0u16, |chain, (word_index, word)| {
            let slot = WordSlot {
                sentence_index,
                word_index,
                word_count,
            };
            let (result, next) = encode_word(slot, word.as_ref(), *chain);
            *chain = next;
            Some(result)
        })
        .collect()
}
