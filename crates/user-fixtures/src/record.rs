//! Fixture document types.
//!
//! This module defines the records produced by generation and the document
//! that wraps them for output. Field order in these structs is the key order
//! of the written JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Version written into every fixture document.
pub const DOCUMENT_VERSION: &str = "1.0.0";

/// Author written into every fixture document.
pub const DOCUMENT_AUTHOR: &str = "nao2c4";

/// A generated user record.
///
/// The birthday serializes as `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use user_fixtures::UserRecord;
///
/// let user = UserRecord {
///     name: "qwertyuiop".to_owned(),
///     birthday: NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid date"),
/// };
///
/// let json = serde_json::to_string(&user).expect("serialize");
/// assert_eq!(json, r#"{"name":"qwertyuiop","birthday":"1970-01-01"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    /// Lowercase ASCII name, unique within its batch.
    pub name: String,
    /// Date of birth.
    pub birthday: NaiveDate,
}

/// Static descriptor written alongside the users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document format version.
    pub version: String,
    /// Generator identity.
    pub author: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION.to_owned(),
            author: DOCUMENT_AUTHOR.to_owned(),
        }
    }
}

/// Root object of a fixture file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureDocument {
    /// Document descriptor.
    pub metadata: Metadata,
    /// Users in generation order.
    pub users: Vec<UserRecord>,
}

impl FixtureDocument {
    /// Wraps a generated batch with the default metadata.
    #[must_use]
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            metadata: Metadata::default(),
            users,
        }
    }
}
