//! Command-line interface for qsettings-decoder.
//!
//! Parses arguments, picks exactly one action, and maps outcomes to exit
//! codes. Decode faults never change the exit code unless `--strict` is set.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::builder::RangedU64ValueParser;
use clap::{CommandFactory, Parser};
use log::info;
use thiserror::Error;

use crate::qsettings::store::SettingsFile;
use crate::qsettings::{DEFAULT_MAX_DEPTH, DecodeOptions, decode_state_with};

/// Exit status for usage and lookup failures.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for a truncated decode under `--strict`.
pub const EXIT_TRUNCATED: i32 = 2;
/// Largest `--max-depth` accepted; deeper recursion risks the stack.
pub const MAX_DEPTH_LIMIT: u64 = 1024;

/// qsettings-decoder - Utility for printing qsettings in human readable format
#[derive(Parser, Debug)]
#[command(name = "qsettings-decoder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file.
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Get single value with specified key
    #[arg(short = 'g', long = "get-value", value_name = "key")]
    pub get_value: Option<String>,

    /// Decode the input as a saved window state blob and print it as JSON
    #[arg(short = 'd', long = "decode-state")]
    pub decode_state: bool,

    /// Deepest dock nesting accepted while decoding window state
    #[arg(
        long,
        value_name = "LEVELS",
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_DEPTH_LIMIT)
    )]
    pub max_depth: usize,

    /// Exit with status 2 when window state decoding stops early
    #[arg(long)]
    pub strict: bool,
}

/// The single action selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GetValue(String),
    DecodeState,
}

/// Reasons the command line cannot be acted on.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("Input not specified")]
    MissingInput,

    #[error("Input file '{}' does not exist.", .0.display())]
    MissingFile(PathBuf),

    #[error("Can't specify multiple actions.")]
    MultipleActions,

    #[error("No action specified")]
    NoAction,
}

impl Cli {
    /// Validates the arguments and returns the input path and action.
    pub fn plan(&self) -> Result<(&Path, Action), UsageError> {
        let source = self.source.as_deref().ok_or(UsageError::MissingInput)?;

        let action = match (&self.get_value, self.decode_state) {
            (Some(_), true) => return Err(UsageError::MultipleActions),
            (Some(key), false) => Action::GetValue(key.clone()),
            (None, true) => Action::DecodeState,
            (None, false) => return Err(UsageError::NoAction),
        };

        if !source.is_file() {
            return Err(UsageError::MissingFile(source.to_path_buf()));
        }
        Ok((source, action))
    }

    fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            max_depth: self.max_depth,
        }
    }
}

/// Parses the process arguments.
///
/// Argument errors exit with [`EXIT_FAILURE`] so they stay distinct from
/// [`EXIT_TRUNCATED`]; `--help` and `--version` exit with 0.
pub fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { EXIT_FAILURE } else { 0 };
            // Nothing else is left to report if printing fails.
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

/// Runs the selected action and returns the process exit code.
pub fn run(cli: &Cli) -> i32 {
    let (source, action) = match cli.plan() {
        Ok(plan) => plan,
        Err(UsageError::NoAction) => {
            // Help goes to stdout; a failed write leaves nothing else to report.
            let _ = Cli::command().print_help();
            return EXIT_FAILURE;
        }
        Err(e) => {
            eprintln!("{}", e);
            return EXIT_FAILURE;
        }
    };

    match action {
        Action::GetValue(key) => get_value(source, &key),
        Action::DecodeState => decode_state(source, cli.decode_options(), cli.strict),
    }
}

fn get_value(source: &Path, key: &str) -> i32 {
    let value = match SettingsFile::open(source).and_then(|settings| settings.lookup(key)) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{}", e);
            return EXIT_FAILURE;
        }
    };

    let mut out = io::stdout().lock();
    if let Err(e) = value.write_to(&mut out).and_then(|_| out.flush()) {
        eprintln!("Failed to write value: {}", e);
        return EXIT_FAILURE;
    }
    0
}

fn decode_state(source: &Path, options: DecodeOptions, strict: bool) -> i32 {
    let data = match fs::read(source) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to read '{}': {}", source.display(), e);
            return EXIT_FAILURE;
        }
    };

    let document = decode_state_with(&data, options);
    for diagnostic in &document.diagnostics {
        eprintln!("warning: offset {:#x}: {}", diagnostic.offset, diagnostic.message);
    }

    match document.to_json_pretty() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to render document: {}", e);
            return EXIT_FAILURE;
        }
    }

    info!(
        "Decoded {} items from '{}' (truncated={})",
        document.items.len(),
        source.display(),
        document.truncated
    );
    if strict && document.truncated {
        EXIT_TRUNCATED
    } else {
        0
    }
}
