//! Custom error types for format plugin operations

use std::fmt;
use std::io;

use crate::format::region::Region;

/// Format-plugin error types
#[derive(Debug)]
pub enum FormatError {
    /// I/O error
    IoError(io::Error),
    /// Mandatory core metadata missing or unparseable
    MalformedFile(String),
    /// Requested region exceeds the declared image extent
    RegionOutOfBounds {
        region: Region,
        width: u32,
        height: u32,
    },
    /// No registered format matched the file signature
    UnknownFormat(String),
    /// Pixel type not representable in the requested output encoding
    UnsupportedPixelType(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::IoError(e) => write!(f, "I/O error: {}", e),
            FormatError::MalformedFile(msg) => write!(f, "Malformed file: {}", msg),
            FormatError::RegionOutOfBounds { region, width, height } => write!(
                f,
                "Region {} exceeds image extent {}x{}",
                region, width, height
            ),
            FormatError::UnknownFormat(path) => write!(f, "No registered format matches: {}", path),
            FormatError::UnsupportedPixelType(msg) => write!(f, "Unsupported pixel type: {}", msg),
            FormatError::GenericError(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<io::Error> for FormatError {
    fn from(error: io::Error) -> Self {
        FormatError::IoError(error)
    }
}

impl From<String> for FormatError {
    fn from(msg: String) -> Self {
        FormatError::GenericError(msg)
    }
}

/// Result type for format plugin operations
pub type FormatResult<T> = Result<T, FormatError>;
