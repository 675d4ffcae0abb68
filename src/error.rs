//! Error types for tile segregation operations

use thiserror::Error;

/// Result type alias for tile segregation operations
pub type Result<T> = std::result::Result<T, TilesiftError>;

/// Error types for tile segregation operations
#[derive(Error, Debug)]
pub enum TilesiftError {
    /// Input/output errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image format or decoding errors
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// Invalid configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TilesiftError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create file I/O error with operation context
    pub fn file_io_error<P: AsRef<std::path::Path>>(
        operation: &str,
        path: P,
        error: std::io::Error,
    ) -> Self {
        let path_display = path.as_ref().display();
        Self::Io(std::io::Error::new(
            error.kind(),
            format!("Failed to {} '{}': {}", operation, path_display, error),
        ))
    }

    /// Create image loading error with format context
    pub fn image_load_error<P: AsRef<std::path::Path>>(path: P, error: image::ImageError) -> Self {
        let path_display = path.as_ref().display();
        let extension = path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");

        Self::Image(image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "Failed to load image '{}' (format: {}): {}. Supported formats: JPEG, PNG, TIFF, BMP, GIF",
                path_display, extension, error
            ),
        )))
    }

    /// Whether this error is a user-facing misuse of the tool rather than a
    /// runtime fault. The CLI reports these without a failing exit status.
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}
