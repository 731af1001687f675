use std::fmt::{ Display, Formatter };

/// Failures around the theme preference. None of them reach the user; the
/// store logs them and keeps its in-memory value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    StorageUnavailable(String),
    Read(String),
    Write(String),
    Document(String),
    InvalidValue(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::StorageUnavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            ThemeError::Read(msg) => write!(f, "Storage Read Error: {}", msg),
            ThemeError::Write(msg) => write!(f, "Storage Write Error: {}", msg),
            ThemeError::Document(msg) => write!(f, "Document Error: {}", msg),
            ThemeError::InvalidValue(value) => write!(f, "Invalid theme value: {:?}", value),
        }
    }
}

impl std::error::Error for ThemeError {}
