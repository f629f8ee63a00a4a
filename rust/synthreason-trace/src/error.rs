//! Error types for the trace pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("no input text provided")]
    EmptyInput,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
