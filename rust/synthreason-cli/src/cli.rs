use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "synthreason")]
#[command(bin_name = "synthreason")]
#[command(about = "Trace every word of a text through positional, hash and op-code encoding", long_about = None)]
pub struct SynthreasonCli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// File to read text from. Falls back to stdin if it cannot be read.
    pub path: Option<PathBuf>,
}

impl SynthreasonCli {
    /// Log level selected by the verbosity flag.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Output goes to stderr so the
/// trace on stdout is unaffected.
pub fn init_logging(level: Level) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
