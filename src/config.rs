//! Configuration and CLI arguments

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One block per sentence, one line per word and edge
    #[default]
    Text,
    /// Pretty-printed JSON array of sentences
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "lexis",
    version,
    about = "Tags English words and classifies sentence types",
    after_help = "EXAMPLES:\n    lexis \"Are you hungry? Produce food.\"\n    lexis --format json --input notes.txt\n    lexis --save-dictionary -d words.ron"
)]
pub struct Config {
    /// Text to analyze; --input or stdin is read when absent
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Dictionary snapshot (built-in vocabulary when the file is missing)
    #[arg(short = 'd', long = "dictionary", value_name = "PATH", default_value = "data/dictionary.ron")]
    pub dictionary_path: PathBuf,

    /// Input file
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the active dictionary to the snapshot path and exit
    #[arg(long)]
    pub save_dictionary: bool,

    /// Use the built-in vocabulary when the snapshot cannot be decoded
    #[arg(long)]
    pub fallback_to_builtin: bool,

    /// Analyze sentences on all cores
    #[arg(short = 'j', long)]
    pub parallel: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: None,
            dictionary_path: PathBuf::from("data/dictionary.ron"),
            input_file: None,
            output_file: None,
            format: OutputFormat::Text,
            save_dictionary: false,
            fallback_to_builtin: false,
            parallel: false,
            verbose: 0,
        }
    }
}

impl Config {
    /// Parses the command line. The first item is the program name.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Default tracing filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
