//! Error taxonomy for content resolution and parsing

use thiserror::Error;

/// Errors produced by the content pipeline
#[derive(Error, Debug)]
pub enum ContentError {
    /// The requested slug or category has no readable backing file
    #[error("content not found: {0}")]
    NotFound(String),

    /// The metadata header is present but cannot be parsed
    #[error("malformed content: {0}")]
    Malformed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContentError {
    /// Whether this error should map to a "not found" outcome at the
    /// rendering boundary
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(ContentError::NotFound("blog/missing".to_string()).is_not_found());
        assert!(!ContentError::Malformed("bad yaml".to_string()).is_not_found());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ContentError = io.into();
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("pipe closed"));
    }
}
