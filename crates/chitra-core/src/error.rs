/// Core error types for the Chitra storyboard library.
use std::path::PathBuf;

/// A specialized Result type for Chitra operations.
pub type ChitraResult<T> = Result<T, ChitraError>;

/// Top-level error type encompassing all Chitra subsystems.
#[derive(Debug, thiserror::Error)]
pub enum ChitraError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("unknown scene: {0}")]
    UnknownScene(String),

    #[error("asset error: {message} ({path:?})")]
    Asset { message: String, path: PathBuf },

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ChitraError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ChitraError::Validation(message.into())
    }

    /// Create an asset error.
    pub fn asset(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        ChitraError::Asset {
            message: message.into(),
            path: path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ChitraError::validation("duplicate mobject id 'ball'");
        assert_eq!(
            err.to_string(),
            "validation error: duplicate mobject id 'ball'"
        );
    }

    #[test]
    fn test_asset_error_display() {
        let err = ChitraError::asset("file not checked", "assets/cow_image.png");
        assert!(err.to_string().contains("file not checked"));
    }

    #[test]
    fn test_unknown_scene_display() {
        let err = ChitraError::UnknownScene("no-such-scene".into());
        assert_eq!(err.to_string(), "unknown scene: no-such-scene");
    }
}
