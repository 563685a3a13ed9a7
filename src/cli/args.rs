use clap::{ArgAction, Parser};
use includer::{Config, LineEndings, SearchPaths};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "includer",
    version,
    about = "Flattens a source file by recursively inlining its #include directives"
)]
pub struct Cli {
    /// Source file to flatten
    pub input: PathBuf,

    /// Where the flattened text is written (truncated first)
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Directory searched for includes, in the order given (repeatable)
    #[arg(short = 'I', long = "include-dir", value_name = "DIR")]
    pub include_dirs: Vec<PathBuf>,

    /// Drop a trailing carriage return from every copied line
    #[arg(long)]
    pub strip_cr: bool,

    /// Increases logging verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> Config {
        let line_endings =
            if self.strip_cr { LineEndings::StripCarriageReturn } else { LineEndings::Retain };
        Config::new(SearchPaths::new(self.include_dirs.iter().cloned()))
            .with_line_endings(line_endings)
    }
}
