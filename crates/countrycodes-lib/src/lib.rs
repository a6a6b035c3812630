// countrycodes-lib: country name / ISO alpha-3 code table and the CLI built on it

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod json;
pub mod logger;
pub mod output;
pub mod resource;
pub mod table;

pub use errors::{CountryCodeError, Result};
pub use table::{CodeTable, DuplicatePolicy, ParseOptions, Record};
