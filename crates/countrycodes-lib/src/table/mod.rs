//! Bidirectional country name / ISO alpha-3 code table.
//!
//! A `CodeTable` is built once from a header line followed by delimited rows
//! and is read-only afterwards, so a shared reference can be handed to any
//! number of threads.

pub mod parser;

use std::collections::HashMap;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::errors::{CountryCodeError, Result};
use crate::resource::{BundledResources, ResourceLoader, DEFAULT_RESOURCE};

pub use parser::Record;

/// What to do when a name or code appears on more than one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Later rows replace earlier ones.
    #[default]
    Overwrite,
    /// A repeated name or code fails construction.
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = CountryCodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(DuplicatePolicy::Overwrite),
            "reject" => Ok(DuplicatePolicy::Reject),
            other => Err(CountryCodeError::Config(format!(
                "unknown duplicate policy {other:?} (expected \"overwrite\" or \"reject\")"
            ))),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::Overwrite => write!(f, "overwrite"),
            DuplicatePolicy::Reject => write!(f, "reject"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub duplicates: DuplicatePolicy,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            duplicates: DuplicatePolicy::Reject,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    name_to_code: HashMap<String, String>,
    code_to_name: HashMap<String, String>,
}

impl CodeTable {
    /// Load the table shipped with the library.
    pub fn bundled() -> Result<Self> {
        Self::from_resource(&BundledResources, DEFAULT_RESOURCE)
    }

    /// Load the named resource with default parse options.
    pub fn from_resource(loader: &dyn ResourceLoader, name: &str) -> Result<Self> {
        Self::load(loader, name, ParseOptions::default())
    }

    pub fn load(loader: &dyn ResourceLoader, name: &str, options: ParseOptions) -> Result<Self> {
        let reader = loader.open(name)?;
        let table = Self::from_reader(reader, options)?;
        tracing::debug!(
            resource = name,
            source = %loader.describe(),
            countries = table.num_countries(),
            "Loaded country code table"
        );
        Ok(table)
    }

    /// Build a table from a reader. The first line is a header and is skipped.
    pub fn from_reader<R: BufRead>(reader: R, options: ParseOptions) -> Result<Self> {
        let mut table = Self::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if idx == 0 {
                continue;
            }
            table.push_line(idx + 1, &line, options.duplicates)?;
        }
        Ok(table)
    }

    /// Build a table from in-memory lines. The first line is a header and is skipped.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_lines_with(lines, ParseOptions::default())
    }

    pub fn from_lines_with<I, S>(lines: I, options: ParseOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for (idx, line) in lines.into_iter().enumerate().skip(1) {
            table.push_line(idx + 1, line.as_ref(), options.duplicates)?;
        }
        Ok(table)
    }

    fn push_line(&mut self, line_no: usize, line: &str, policy: DuplicatePolicy) -> Result<()> {
        match parser::parse_line(line_no, line)? {
            Some(record) => self.insert(line_no, record, policy),
            None => Ok(()),
        }
    }

    fn insert(&mut self, line_no: usize, record: Record, policy: DuplicatePolicy) -> Result<()> {
        if policy == DuplicatePolicy::Reject {
            if self.name_to_code.contains_key(&record.name) {
                return Err(CountryCodeError::DuplicateName {
                    line: line_no,
                    name: record.name,
                });
            }
            if self.code_to_name.contains_key(&record.code) {
                return Err(CountryCodeError::DuplicateCode {
                    line: line_no,
                    code: record.code,
                });
            }
        }

        if let Some(previous) = self
            .name_to_code
            .insert(record.name.clone(), record.code.clone())
        {
            tracing::warn!(line = line_no, name = %record.name, %previous, "Duplicate country name, keeping last code");
        }
        if let Some(previous) = self.code_to_name.insert(record.code.clone(), record.name) {
            tracing::warn!(line = line_no, code = %record.code, %previous, "Duplicate country code, keeping last name");
        }
        Ok(())
    }

    /// Country name for an alpha-3 code, matched case-insensitively.
    pub fn from_country_code(&self, code: &str) -> Option<&str> {
        self.code_to_name
            .get(&code.to_uppercase())
            .map(String::as_str)
    }

    /// Alpha-3 code for a country name. Surrounding whitespace is ignored; case is not.
    pub fn from_country(&self, name: &str) -> Option<&str> {
        self.name_to_code.get(name.trim()).map(String::as_str)
    }

    /// Number of distinct country names in the table.
    pub fn num_countries(&self) -> usize {
        self.name_to_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_code.is_empty()
    }

    /// Every name/code pair, sorted by name.
    pub fn records(&self) -> Vec<Record> {
        let mut records: Vec<Record> = self
            .name_to_code
            .iter()
            .map(|(name, code)| Record::new(name.as_str(), code.as_str()))
            .collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }
}
