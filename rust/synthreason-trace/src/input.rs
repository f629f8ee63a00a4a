//! Input acquisition.
//!
//! Text is read either from a named file or from standard input. A file that
//! cannot be read is not an error: the reader falls back to standard input and
//! says so on the prompt stream.
//!
//! The functions here take the input and prompt streams as parameters so the
//! binary can hand in the real stdin/stdout while tests use in-memory buffers.

use crate::error::TraceError;
use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Shown when no path was given and text is read interactively.
pub const INTERACTIVE_PROMPT: &str = "Enter text (end with Ctrl+D or Ctrl+Z):";
/// Prefix printed before the interactive line.
pub const LINE_PROMPT: &str = "User:";
/// Shown when the named file cannot be read.
pub const FALLBACK_NOTICE: &str = "File not found. Using stdin instead.";

/// Where the text was ultimately read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    /// Standard input after the named file could not be read.
    Fallback(PathBuf),
    Interactive,
}

/// Raw text handed to the pipeline.
#[derive(Debug, Clone)]
pub struct Input {
    pub text: String,
    pub source: Source,
}

impl Input {
    pub fn new(text: impl Into<String>, source: Source) -> Self {
        Input {
            text: text.into(),
            source,
        }
    }

    /// `true` for empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Read input from `path` if given, otherwise interactively.
///
/// With a path, the whole file is read; on failure the notice is written to
/// `prompt` and all of `stdin` is read instead. Without a path, the prompts are
/// written and a single line is read from `stdin`.
pub fn acquire<R: BufRead, W: Write>(
    path: Option<&Path>,
    stdin: &mut R,
    prompt: &mut W,
) -> Result<Input, TraceError> {
    match path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => Ok(Input::new(text, Source::File(path.to_path_buf()))),
            Err(error) => {
                warn!(path = %path.display(), %error, "cannot read input file, falling back to stdin");
                writeln!(prompt, "{FALLBACK_NOTICE}")?;
                let mut text = String::new();
                stdin.read_to_string(&mut text)?;
                Ok(Input::new(text, Source::Fallback(path.to_path_buf())))
            }
        },
        None => {
            writeln!(prompt, "{INTERACTIVE_PROMPT}")?;
            write!(prompt, "{LINE_PROMPT}")?;
            prompt.flush()?;
            read_line(stdin).map(|text| Input::new(text, Source::Interactive))
        }
    }
}

/// Read one line without its terminator.
fn read_line<R: BufRead>(stdin: &mut R) -> Result<String, TraceError> {
    let mut line = String::new();
    stdin.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn interactive_reads_one_line() {
        let mut stdin = Cursor::new("I see it.\nignored\n");
        let mut prompt = Vec::new();
        let input = acquire(None, &mut stdin, &mut prompt).unwrap();

        assert_eq!(input.text, "I see it.");
        assert_eq!(input.source, Source::Interactive);
        assert_eq!(
            String::from_utf8(prompt).unwrap(),
            format!("{INTERACTIVE_PROMPT}\n{LINE_PROMPT}")
        );
    }

    #[test]
    fn interactive_strips_crlf() {
        let mut stdin = Cursor::new("hello\r\n");
        let input = acquire(None, &mut stdin, &mut Vec::new()).unwrap();
        assert_eq!(input.text, "hello");
    }

    #[test]
    fn interactive_eof_is_blank() {
        let mut stdin = Cursor::new("");
        let input = acquire(None, &mut stdin, &mut Vec::new()).unwrap();
        assert!(input.is_blank());
    }

    #[test]
    fn missing_file_falls_back_to_stdin() {
        let missing = Path::new("/definitely/not/here.txt");
        let mut stdin = Cursor::new("first line\nsecond line\n");
        let mut prompt = Vec::new();
        let input = acquire(Some(missing), &mut stdin, &mut prompt).unwrap();

        assert_eq!(input.text, "first line\nsecond line\n");
        assert_eq!(input.source, Source::Fallback(missing.to_path_buf()));
        assert_eq!(
            String::from_utf8(prompt).unwrap(),
            format!("{FALLBACK_NOTICE}\n")
        );
    }
}
