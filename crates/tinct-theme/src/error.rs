//! Error types for loading theme documents.
//!
//! Theme resolution itself never fails: unknown paths resolve to `None`.
//! Errors only arise at the input boundary, when a document is parsed from
//! YAML/JSON content or read from disk.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur when parsing or loading theme documents.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// YAML or JSON syntax error.
    #[error("failed to parse theme document{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the parser.
        message: String,
    },

    /// The document parsed, but its root is not a mapping.
    #[error("theme document{} must be a mapping, found {found}", location(.path))]
    NotAMapping {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Kind of value found at the root.
        found: &'static str,
    },

    /// The file could not be read.
    #[error("failed to read theme document {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not one of the recognized theme extensions.
    #[error("unsupported theme document extension: {}", .path.display())]
    UnsupportedExtension { path: PathBuf },

    /// `refresh` was called on a document that was not loaded from a file.
    #[error("cannot refresh: theme document has no source file")]
    NoSourcePath,

    /// No theme with the given name is registered.
    #[error("theme not found: {name}")]
    NotFound { name: String },
}

impl ThemeError {
    /// Attaches a source path to parse-level errors that don't carry one yet.
    pub(crate) fn at_path(self, source: &Path) -> Self {
        match self {
            ThemeError::Parse { path: None, message } => ThemeError::Parse {
                path: Some(source.to_path_buf()),
                message,
            },
            ThemeError::NotAMapping { path: None, found } => ThemeError::NotAMapping {
                path: Some(source.to_path_buf()),
                found,
            },
            other => other,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for theme loading operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_without_path() {
        let err = ThemeError::Parse {
            path: None,
            message: "unexpected end of input".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse theme document: unexpected end of input"
        );
    }

    #[test]
    fn test_at_path_fills_missing_path() {
        let err = ThemeError::NotAMapping {
            path: None,
            found: "sequence",
        }
        .at_path(Path::new("themes/dark.yaml"));
        let msg = err.to_string();
        assert!(msg.contains("themes/dark.yaml"));
        assert!(msg.contains("sequence"));
    }

    #[test]
    fn test_at_path_keeps_existing_path() {
        let err = ThemeError::Parse {
            path: Some(PathBuf::from("a.yaml")),
            message: "bad".to_string(),
        }
        .at_path(Path::new("b.yaml"));
        assert!(err.to_string().contains("a.yaml"));
    }

    #[test]
    fn test_load_error_exposes_source() {
        use std::error::Error as _;

        let err = ThemeError::Load {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.yaml"));
    }
}
