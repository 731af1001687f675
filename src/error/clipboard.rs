use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    Unavailable(String),
    Rejected(String),
}

impl Display for ClipboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard Unavailable: {}", msg),
            ClipboardError::Rejected(msg) => write!(f, "Clipboard Write Rejected: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<serde_json::Error> for ClipboardError {
    fn from(error: serde_json::Error) -> Self {
        ClipboardError::Rejected(error.to_string())
    }
}
