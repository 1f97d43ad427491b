use std::fmt;
use std::io;

/// Result type for ctap-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while processing a TAP stream
#[derive(Debug)]
pub enum Error {
    /// Reading the next input line failed
    Read(io::Error),

    /// Writing rendered output failed
    Write(io::Error),
}

impl Error {
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Error::Read(_) => false,
            Error::Write(err) => err.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read(err) => write!(f, "Failed to read input: {}", err),
            Error::Write(err) => write!(f, "Failed to write output: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read(err) | Error::Write(err) => Some(err),
        }
    }
}
