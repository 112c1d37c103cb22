//! Error types for the output side of the animation
//!
//! Drawing itself never fails; only exporting frames and validating
//! command-line parameters can.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all export operations
#[derive(Debug)]
pub enum AnimationError {
    /// Failed to encode or write an image
    ImageExport {
        /// Output path of the frame or animation
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// A directory or file could not be created
    FileSystem {
        /// Path the operation was applied to
        path: PathBuf,
        /// What was being attempted, e.g. "create file"
        operation: &'static str,
        /// Error reported by the operating system
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Command-line name of the parameter
        parameter: &'static str,
        /// The rejected value as given
        value: String,
        /// Why the value cannot be used
        reason: String,
    },

    /// An export was requested before any frame was captured
    EmptyCapture {
        /// Path the export was aimed at
        path: PathBuf,
    },

    /// Output path has an extension no exporter handles
    UnsupportedOutput {
        /// The offending path
        path: PathBuf,
    },
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Could not encode or write '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "Could not {operation} '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyCapture { path } => {
                write!(f, "No frames captured for '{}'", path.display())
            }
            Self::UnsupportedOutput { path } => {
                write!(
                    f,
                    "Unsupported output '{}': expected a .gif or .png path",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AnimationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for export results
pub type Result<T> = std::result::Result<T, AnimationError>;

/// Build an [`AnimationError::InvalidParameter`]
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AnimationError {
    AnimationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create the parent directory of `path` if it has one
///
/// # Errors
///
/// Returns [`AnimationError::FileSystem`] if the directory cannot be created
pub fn ensure_parent_dir(path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AnimationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
