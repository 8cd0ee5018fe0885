//! Command-line handling for the fixture generator.
//!
//! Parsing is separated from execution so both can be driven from tests
//! without spawning a process.

use std::ffi::OsString;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use clap::error::ErrorKind;
use tracing::info;

use crate::error::CliError;
use crate::generator::{DEFAULT_USER_COUNT, GeneratorConfig, fixture_rng, generate_users};
use crate::record::FixtureDocument;
use crate::writer::write_document;

/// Default destination for the generated document.
pub const DEFAULT_OUTPUT_PATH: &str = "data/sample.json";

const PROGRAM_NAME: &str = "user-fixtures";

/// `user-fixtures` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "user-fixtures",
    about = "Create random user information and save it to a JSON file",
    version
)]
struct CliArgs {
    /// Number of users to generate.
    #[arg(short = 'n', value_name = "COUNT", default_value_t = DEFAULT_USER_COUNT)]
    count: usize,
    /// Output file for the JSON document.
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    output: Utf8PathBuf,
    /// Seed for reproducible output. Seeds from the OS when omitted.
    #[arg(long = "seed", value_name = "SEED")]
    seed: Option<u64>,
}

/// Result of parsing command-line arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Arguments were valid; run with these options.
    Options(FixtureOptions),
    /// Help or version output was requested.
    Help(String),
}

/// Resolved options for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureOptions {
    count: usize,
    output: Utf8PathBuf,
    seed: Option<u64>,
    config: GeneratorConfig,
}

impl FixtureOptions {
    /// Creates options with the default generator configuration.
    #[must_use]
    pub fn new(count: usize, output: impl Into<Utf8PathBuf>, seed: Option<u64>) -> Self {
        Self {
            count,
            output: output.into(),
            seed,
            config: GeneratorConfig::default(),
        }
    }

    /// Replaces the generator configuration.
    #[must_use]
    pub const fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the number of users to generate.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the output file path.
    #[must_use]
    pub fn output(&self) -> &Utf8Path {
        &self.output
    }

    /// Returns the RNG seed, if one was given.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the generator configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Path the document was written to.
    pub output: Utf8PathBuf,
    /// Number of users written.
    pub user_count: usize,
}

/// Parses command-line arguments, excluding the program name.
///
/// # Errors
///
/// Returns [`CliError::Usage`] with the rendered usage message when the
/// arguments are malformed.
///
/// # Example
///
/// ```
/// use user_fixtures::cli::{ParseOutcome, parse_args};
///
/// let ParseOutcome::Options(options) = parse_args(["-n", "5"]).expect("valid arguments") else {
///     panic!("expected options");
/// };
///
/// assert_eq!(options.count(), 5);
/// assert_eq!(options.output().as_str(), "data/sample.json");
/// ```
pub fn parse_args<I, T>(args: I) -> Result<ParseOutcome, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = std::iter::once(OsString::from(PROGRAM_NAME)).chain(args.into_iter().map(Into::into));

    match CliArgs::try_parse_from(argv) {
        Ok(parsed) => Ok(ParseOutcome::Options(FixtureOptions::new(
            parsed.count,
            parsed.output,
            parsed.seed,
        ))),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(ParseOutcome::Help(err.render().to_string()))
        }
        Err(err) => Err(CliError::Usage {
            message: err.render().to_string(),
        }),
    }
}

/// Generates the configured batch and writes it to the output path.
///
/// # Errors
///
/// Returns [`CliError::Generation`] if the batch cannot be generated and
/// [`CliError::Write`] if the document cannot be written. Nothing is written
/// when generation fails.
pub fn run(options: &FixtureOptions) -> Result<RunSummary, CliError> {
    let mut rng = fixture_rng(options.seed());
    let users = generate_users(&mut rng, options.count(), options.config())?;
    let document = FixtureDocument::new(users);

    write_document(options.output(), &document)?;
    info!(
        path = %options.output(),
        user_count = document.users.len(),
        seeded = options.seed().is_some(),
        "fixture document written"
    );

    Ok(RunSummary {
        output: options.output().to_path_buf(),
        user_count: document.users.len(),
    })
}

/// Formats the line printed after a successful run.
#[must_use]
pub fn success_message(summary: &RunSummary) -> String {
    let noun = if summary.user_count == 1 { "user" } else { "users" };
    format!("Wrote {} {noun} to {}", summary.user_count, summary.output)
}
