//! # synthreason-trace
//!
//! Tokenizes free text into sentences and words and derives a deterministic
//! numeric trace for every word.
//!
//! ## Pipeline
//!
//! ```text
//! text → sentences → lowercase words → (position, hash, retrieved, op, output)
//!      → sentence records → result set
//! ```
//!
//! - **Position**: `sentence_index * words_in_sentence + word_index`
//! - **Hash**: sum of the word's code points, modulo 2^16
//! - **Retrieved**: the hash XOR the previous word's retrieved value; the chain
//!   restarts at 0 in every sentence
//! - **Op code**: chosen by a pronoun table (`i`, `you`, `he`, `she`, `it`,
//!   `they`); any other word uses XOR
//! - **Output**: the op code applied to position and retrieved value
//!
//! ## Example
//!
//! ```
//! use synthreason_trace::trace;
//!
//! let result = trace("I see it.").unwrap();
//! let record = &result.sentences[0];
//!
//! assert_eq!(record.outputs(), vec![105, 341, 395]);
//! assert_eq!(record.logic()[0], "I (Op 0x1) : 0 ⊕ 105 → 105");
//! ```

pub mod encoder;
pub mod error;
pub mod input;
pub mod op_code;
pub mod tokenizer;
pub mod trace;

pub use encoder::WordResult;
pub use error::TraceError;
pub use op_code::OpCode;
pub use trace::{ResultSet, SentenceRecord, trace};
