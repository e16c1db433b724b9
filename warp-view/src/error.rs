//! Error types for image loading in the viewer.

use std::fmt;

/// Errors that can occur while loading a user-selected image.
#[derive(Debug)]
pub enum LoadError {
    /// Failed to read the file from disk.
    Io(std::io::Error),
    /// Failed to decode the file as an image.
    Image(image::ImageError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "Failed to read image file: {}", e),
            LoadError::Image(e) => write!(f, "Failed to decode image: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Image(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<image::ImageError> for LoadError {
    fn from(e: image::ImageError) -> Self {
        LoadError::Image(e)
    }
}
