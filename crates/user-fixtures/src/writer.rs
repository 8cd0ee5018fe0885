//! JSON rendering and file output for fixture documents.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::atomic_io::write_atomic;
use crate::error::WriteError;
use crate::record::FixtureDocument;

/// Indentation used for every nesting level of the written JSON.
const INDENT: &[u8] = b"    ";

/// Renders `document` as pretty-printed JSON with four-space indentation.
///
/// # Errors
///
/// Returns [`WriteError::Serialize`] if the document cannot be rendered.
///
/// # Example
///
/// ```
/// use user_fixtures::{FixtureDocument, render_document};
///
/// let json = render_document(&FixtureDocument::new(Vec::new())).expect("rendered");
///
/// assert!(json.starts_with("{\n    \"metadata\": {\n        \"version\": \"1.0.0\""));
/// assert!(json.ends_with("\"users\": []\n}"));
/// ```
pub fn render_document(document: &FixtureDocument) -> Result<String, WriteError> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    document
        .serialize(&mut serializer)
        .map_err(|err| WriteError::Serialize {
            message: err.to_string(),
        })?;

    String::from_utf8(buffer).map_err(|err| WriteError::Serialize {
        message: err.to_string(),
    })
}

/// Writes `document` to `path`, creating or replacing the file.
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns [`WriteError`] if the document cannot be rendered, the path does
/// not name a file, or the filesystem rejects the write.
pub fn write_document(path: &Utf8Path, document: &FixtureDocument) -> Result<(), WriteError> {
    let rendered = render_document(document)?;
    let (dir, file_name) = open_parent(path)?;
    write_atomic(&dir, file_name, path, &rendered)
}

/// Reads a fixture document previously written to `path`.
///
/// # Errors
///
/// Returns [`WriteError::Io`] if the file cannot be read and
/// [`WriteError::Parse`] if it does not hold a fixture document.
pub fn read_document(path: &Utf8Path) -> Result<FixtureDocument, WriteError> {
    let (dir, file_name) = open_parent(path)?;
    let contents = dir
        .read_to_string(file_name)
        .map_err(|err| WriteError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    serde_json::from_str(&contents).map_err(|err| WriteError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn open_parent(path: &Utf8Path) -> Result<(Dir, &Utf8Path), WriteError> {
    let file_name = path.file_name().ok_or_else(|| WriteError::InvalidPath {
        path: path.to_path_buf(),
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        WriteError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    Ok((dir, Utf8Path::new(file_name)))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::record::UserRecord;

    fn document_with(names: &[&str]) -> FixtureDocument {
        let birthday = NaiveDate::from_ymd_opt(1950, 3, 14).expect("valid date");
        FixtureDocument::new(
            names
                .iter()
                .map(|name| UserRecord {
                    name: (*name).to_owned(),
                    birthday,
                })
                .collect(),
        )
    }

    #[test]
    fn renders_with_four_space_indentation() {
        let rendered = render_document(&document_with(&["abcdefghij"])).expect("rendered");
        let expected = concat!(
            "{\n",
            "    \"metadata\": {\n",
            "        \"version\": \"1.0.0\",\n",
            "        \"author\": \"nao2c4\"\n",
            "    },\n",
            "    \"users\": [\n",
            "        {\n",
            "            \"name\": \"abcdefghij\",\n",
            "            \"birthday\": \"1950-03-14\"\n",
            "        }\n",
            "    ]\n",
            "}",
        );

        assert_eq!(rendered, expected);
    }

    #[test]
    fn renders_empty_batch_as_empty_array() {
        let rendered = render_document(&document_with(&[])).expect("rendered");
        let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");

        assert_eq!(parsed["users"], serde_json::json!([]));
    }

    #[test]
    fn rejects_paths_without_a_file_name() {
        let result = write_document(Utf8Path::new("data/.."), &document_with(&[]));

        assert_eq!(
            result,
            Err(WriteError::InvalidPath {
                path: "data/..".into(),
            })
        );
    }

    #[test]
    fn reports_missing_parent_directory() {
        let path = Utf8Path::new("target/user-fixtures-missing-parent/nested/sample.json");
        let result = write_document(path, &document_with(&["abcdefghij"]));

        assert!(
            matches!(&result, Err(WriteError::Io { path: reported, .. }) if reported == path),
            "unexpected result: {result:?}"
        );
    }
}
