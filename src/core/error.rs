use std::fmt;

/// Error type shared by all fallible operations in the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrError {
    pub message: String,
}

impl QrError {
    pub fn error(msg: &str) -> Self {
        QrError {
            message: String::from(msg),
        }
    }
}

impl fmt::Display for QrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.message);
    }
}

impl std::error::Error for QrError {}

impl From<&str> for QrError {
    fn from(msg: &str) -> Self {
        return QrError::error(msg);
    }
}

impl From<String> for QrError {
    fn from(msg: String) -> Self {
        return QrError { message: msg };
    }
}
