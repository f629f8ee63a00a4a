#![warn(missing_docs)]

//! # Synthreason CLI
//!
//! Command line front end for [`synthreason_trace`]. Reads text from a file
//! or from standard input, traces it and prints every sentence record.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin synthreason -- notes.txt
//! ```
//!
//! Without a path the tool prompts for a single line of text:
//!
//! ```bash
//! cargo run --bin synthreason
//! ```
//!
//! Logging goes to stderr. Use `-v`/`-vv` or `RUST_LOG` to raise the level.

mod cli;
pub use cli::*;
