use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::errors::{CountryCodeError, Result};

/// Column holding the country display name.
pub const NAME_FIELD: usize = 0;
/// Column holding the ISO alpha-3 code.
pub const CODE_FIELD: usize = 2;

/// A single tab, or a run of two or more ASCII whitespace characters.
static DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t|(?-u:\s){2,}").expect("delimiter pattern is valid"));

/// One parsed row: a trimmed country name and its uppercase alpha-3 code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    pub name: String,
    pub code: String,
}

impl Record {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// Split an already-trimmed line into raw fields.
///
/// Adjacent tabs produce empty fields: `"Canada\t\tCAN"` gives
/// `["Canada", "", "CAN"]`.
pub fn split_fields(line: &str) -> Vec<&str> {
    DELIMITER.split(line).collect()
}

/// Parse one data line. `line_no` is the 1-based position in the source and
/// is only used for error reporting.
///
/// Returns `Ok(None)` for lines that are blank after trimming.
pub fn parse_line(line_no: usize, raw: &str) -> Result<Option<Record>> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields = split_fields(line);
    if fields.len() <= CODE_FIELD {
        return Err(CountryCodeError::MalformedRow {
            line: line_no,
            fields: fields.len(),
        });
    }

    let name = fields[NAME_FIELD].trim();
    let code = fields[CODE_FIELD].trim().to_uppercase();
    if code.chars().count() != 3 {
        return Err(CountryCodeError::InvalidCode { line: line_no, code });
    }

    Ok(Some(Record::new(name, code)))
}
