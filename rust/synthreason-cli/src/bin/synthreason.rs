use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use synthreason_cli::{SynthreasonCli, init_logging};
use synthreason_trace::{TraceError, input, trace};
use tracing::info;

pub fn main() -> Result<()> {
    let cli = SynthreasonCli::parse();
    init_logging(cli.log_level())?;

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let input = input::acquire(cli.path.as_deref(), &mut stdin, &mut stdout)?;
    info!(source = ?input.source, bytes = input.text.len(), "read input");

    let result = match trace(&input.text) {
        Ok(result) => result,
        Err(TraceError::EmptyInput) => {
            writeln!(stdout, "No input text provided.")?;
            return Ok(());
        }
        Err(error) => return Err(error.into()),
    };

    info!(
        sentences = result.len(),
        words = result.word_count(),
        "traced input"
    );
    write!(stdout, "{result}")?;
    stdout.flush()?;
    Ok(())
}
