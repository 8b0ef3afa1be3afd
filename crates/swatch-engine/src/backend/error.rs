use std::fmt;

/// Failure to set up a backend target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The requested target size is zero or too large to allocate.
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::InvalidSize { width, height } => {
                write!(f, "invalid pixmap size {width}x{height}")
            }
        }
    }
}

impl std::error::Error for BackendError {}
