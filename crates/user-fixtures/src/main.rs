//! CLI entry point for the user fixture generator.
//!
//! # Examples
//! ```sh
//! cargo run -p user-fixtures -- -n 500 --output data/sample.json --seed 42
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), forbid(clippy::expect_used))]

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use user_fixtures::cli::{ParseOutcome, parse_args, run, success_message};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let options = match parse_args(env::args_os().skip(1)) {
        Ok(ParseOutcome::Options(options)) => options,
        Ok(ParseOutcome::Help(text)) => return emit(io::stdout().lock(), &text, ExitCode::SUCCESS),
        Err(err) => return emit(io::stderr().lock(), &err.to_string(), ExitCode::FAILURE),
    };

    match run(&options) {
        Ok(summary) => emit(
            io::stdout().lock(),
            &success_message(&summary),
            ExitCode::SUCCESS,
        ),
        Err(err) => emit(io::stderr().lock(), &format!("error: {err}"), ExitCode::FAILURE),
    }
}

fn emit(mut out: impl Write, text: &str, code: ExitCode) -> ExitCode {
    match writeln!(out, "{}", text.trim_end()) {
        Ok(()) => code,
        Err(_) => ExitCode::FAILURE,
    }
}
