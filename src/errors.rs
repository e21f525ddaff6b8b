use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while rendering subtitles
#[derive(Debug)]
pub enum KarasubError {
    Config(ConfigError),
    Other(io::Error),
}

/// Configuration specific errors: unresolvable style references, invalid
/// grouping sizes, unparsable colors
#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for KarasubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KarasubError::Config(err) => write!(f, "Configuration error: {}", err),
            KarasubError::Other(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for KarasubError {}
impl Error for ConfigError {}

// Conversion implementations
impl From<io::Error> for KarasubError {
    fn from(err: io::Error) -> Self {
        KarasubError::Other(err)
    }
}

impl From<ConfigError> for KarasubError {
    fn from(err: ConfigError) -> Self {
        KarasubError::Config(err)
    }
}

// Conversion to io::Error for callers that only speak io
impl From<KarasubError> for io::Error {
    fn from(err: KarasubError) -> Self {
        io::Error::other(err)
    }
}

impl From<ConfigError> for io::Error {
    fn from(err: ConfigError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with KarasubError
pub type KarasubResult<T> = Result<T, KarasubError>;
