use std::fmt;

/// Error types for dirprobe operations
#[derive(Debug)]
pub enum ScanError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Wordlist could not be opened or read
    WordlistRead { path: String, source: std::io::Error },

    /// Configuration error
    Config(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// Config file is not valid TOML
    TomlParsing {
        path: String,
        source: toml::de::Error,
    },

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io(err) => write!(f, "IO error: {err}"),
            ScanError::WordlistRead { path, source } => {
                write!(f, "Could not read wordlist '{path}': {source}")
            }
            ScanError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ScanError::Http(err) => write!(f, "HTTP error: {err}"),
            ScanError::TomlParsing { path, source } => {
                write!(f, "Invalid TOML in config file '{path}': {source}")
            }
            ScanError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io(err) => Some(err),
            ScanError::WordlistRead { source, .. } => Some(source),
            ScanError::Http(err) => Some(err),
            ScanError::TomlParsing { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Io(err)
    }
}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        ScanError::Http(err)
    }
}

/// Type alias for Results using ScanError
pub type Result<T> = std::result::Result<T, ScanError>;
