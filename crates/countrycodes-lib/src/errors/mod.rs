use thiserror::Error;

#[derive(Error, Debug)]
pub enum CountryCodeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Invalid resource name: {0:?}")]
    InvalidResourceName(String),

    #[error("Malformed row at line {line}: expected at least 3 fields, found {fields}")]
    MalformedRow { line: usize, fields: usize },

    #[error("Invalid alpha-3 code at line {line}: {code:?}")]
    InvalidCode { line: usize, code: String },

    #[error("Duplicate country name at line {line}: {name}")]
    DuplicateName { line: usize, name: String },

    #[error("Duplicate country code at line {line}: {code}")]
    DuplicateCode { line: usize, code: String },

    #[error("Command error: {0}")]
    Command(String),
}

pub type Result<T> = std::result::Result<T, CountryCodeError>;

impl CountryCodeError {
    /// Whether the error came from the contents of a table rather than from
    /// locating or reading it.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            CountryCodeError::MalformedRow { .. }
                | CountryCodeError::InvalidCode { .. }
                | CountryCodeError::DuplicateName { .. }
                | CountryCodeError::DuplicateCode { .. }
        )
    }
}

/// Logs a fatal error and exits the process with code 1.
///
/// This function never returns (`-> !`). It is intended for unrecoverable
/// errors during initialization, such as a table that fails to load.
pub fn handle_fatal(err: CountryCodeError) -> ! {
    tracing::error!("Fatal error: {}", err);
    std::process::exit(1)
}

/// Maps a `CountryCodeError` to user-friendly CLI output with actionable suggestions.
pub fn handle_command_error(err: &CountryCodeError) {
    use crate::output;

    match err {
        CountryCodeError::ResourceNotFound(name) => {
            output::error(&format!("Resource not found: {}", name));
            output::info(
                "Pass --resource-dir or set COUNTRYCODES_RESOURCE_DIR to the directory holding it.",
            );
        }
        CountryCodeError::InvalidResourceName(name) => {
            output::error(&format!("Invalid resource name: {:?}", name));
            output::info("Resource names are plain file names, without directories.");
        }
        CountryCodeError::DuplicateName { .. } | CountryCodeError::DuplicateCode { .. } => {
            output::error(&format!("Table error: {}", err));
            output::info("Drop --strict and unset COUNTRYCODES_DUPLICATES to keep the last entry.");
        }
        e if e.is_data_error() => {
            output::error(&format!("Table error: {}", e));
            output::info("Rows need a name in column 1 and an alpha-3 code in column 3.");
        }
        CountryCodeError::Io(e) => {
            output::error(&format!("File error: {}", e));
        }
        CountryCodeError::Config(msg) => {
            output::error(&format!("Configuration error: {}", msg));
        }
        CountryCodeError::Command(msg) => {
            output::error(&format!("Error: {}", msg));
        }
        _ => {
            output::error(&format!("{}", err));
        }
    }
}
