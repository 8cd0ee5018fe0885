//! Random user fixture generation.
//!
//! This crate produces batches of synthetic users, each with a random
//! lowercase name and a random birthday, and writes them with static
//! metadata to a single JSON document for use as sample input elsewhere.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Fixed-length lowercase name sampling
//! - Uniform birthday sampling within an inclusive date window
//! - Batch generation with whole-batch regeneration on any name collision,
//!   bounded by a maximum number of attempts
//! - Deterministic output from an explicit seed
//! - Four-space indented JSON output written by replace-on-rename
//!
//! # Example
//!
//! ```
//! use user_fixtures::{FixtureDocument, GeneratorConfig, fixture_rng, generate_users, render_document};
//!
//! let mut rng = fixture_rng(Some(42));
//! let users = generate_users(&mut rng, 3, &GeneratorConfig::default()).expect("generation succeeds");
//! let json = render_document(&FixtureDocument::new(users)).expect("rendering succeeds");
//!
//! assert!(json.contains("\"author\": \"nao2c4\""));
//! ```

mod atomic_io;
pub mod cli;
mod date;
mod error;
mod generator;
mod name;
mod record;
mod writer;

pub use date::{DEFAULT_DAYS_RANGE, DateWindow, random_date};
pub use error::{CliError, GenerationError, WriteError};
pub use generator::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_USER_COUNT, GeneratorConfig, fixture_rng, generate_users,
};
pub use name::{DEFAULT_NAME_LENGTH, is_valid_name, name_space_size, random_name};
pub use record::{DOCUMENT_AUTHOR, DOCUMENT_VERSION, FixtureDocument, Metadata, UserRecord};
pub use writer::{read_document, render_document, write_document};
