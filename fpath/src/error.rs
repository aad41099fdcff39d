//! Error types for the fpath library.
//!
//! Every failure the engine can report has its own variant so that callers
//! (for example a dispatch layer deciding whether to fall back to the host
//! operating system) can tell malformed input apart from a path that cannot
//! be resolved. `thiserror` provides the `Display` and `source` plumbing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::path::PathValue;

/// Result type alias for operations that may fail with an fpath error.
///
/// # Examples
///
/// ```
/// use fpath::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was malformed: an empty required path, or byte and text
    /// paths mixed within one call.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: String,
    },

    /// A path contained an embedded NUL, or a value could not be transcoded
    /// into the encoding the result must carry.
    #[error("encoding violation in {path}: {reason}")]
    EncodingViolation {
        /// The offending path (displayed lossily).
        path: PathValue,
        /// What was wrong with it.
        reason: String,
    },

    /// Symlink resolution came back to a link that was still being resolved.
    #[error("symlink cycle detected at {path}")]
    SymlinkCycle {
        /// The link at which the cycle closed.
        path: PathValue,
    },

    /// Symlink resolution needed more hops than the configured ceiling.
    #[error("resolving {path} exceeded the limit of {limit} symlink hops")]
    ResolutionDepthExceeded {
        /// The link that would have needed one hop too many.
        path: PathValue,
        /// The ceiling in force for the call.
        limit: usize,
    },

    /// A filesystem, cwd, or user-database collaborator failed.
    ///
    /// A component that simply does not exist is never reported this way.
    #[error("filesystem unavailable at {path}: {source}")]
    FilesystemUnavailable {
        /// The path being examined when the collaborator failed.
        path: PathValue,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be read or parsed.
    #[error("configuration file {}: {reason}", path.display())]
    ConfigFile {
        /// The configuration file.
        path: PathBuf,
        /// Why it could not be used.
        reason: String,
    },
}

/// Payload-free discriminant of an [`Error`].
///
/// # Examples
///
/// ```
/// use fpath::{relpath_from, ErrorKind};
///
/// let err = relpath_from("", "/tmp").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::InvalidArgument`].
    InvalidArgument,
    /// See [`Error::EncodingViolation`].
    EncodingViolation,
    /// See [`Error::SymlinkCycle`].
    SymlinkCycle,
    /// See [`Error::ResolutionDepthExceeded`].
    ResolutionDepthExceeded,
    /// See [`Error::FilesystemUnavailable`].
    FilesystemUnavailable,
    /// See [`Error::Validation`] and [`Error::ConfigFile`].
    Configuration,
}

impl Error {
    /// Get the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::EncodingViolation { .. } => ErrorKind::EncodingViolation,
            Self::SymlinkCycle { .. } => ErrorKind::SymlinkCycle,
            Self::ResolutionDepthExceeded { .. } => ErrorKind::ResolutionDepthExceeded,
            Self::FilesystemUnavailable { .. } => ErrorKind::FilesystemUnavailable,
            Self::Validation { .. } | Self::ConfigFile { .. } => ErrorKind::Configuration,
        }
    }

    /// Check if the error was caused by malformed input rather than by the
    /// state of the filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpath::normpath;
    ///
    /// let err = normpath("/tmp/a\0b").unwrap_err();
    /// assert!(err.is_input_error());
    /// ```
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidArgument | ErrorKind::EncodingViolation
        )
    }

    /// Check if error came out of symlink resolution (cycle or depth ceiling).
    #[must_use]
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::SymlinkCycle | ErrorKind::ResolutionDepthExceeded
        )
    }

    pub(crate) fn unavailable(path: &[u8], source: io::Error) -> Self {
        Self::FilesystemUnavailable {
            path: PathValue::Bytes(path.to_vec()),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = Error::InvalidArgument {
            reason: "no path specified".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid argument"));
        assert!(display.contains("no path specified"));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.is_input_error());
    }

    #[test]
    fn test_encoding_violation_displays_lossily() {
        let err = Error::EncodingViolation {
            path: PathValue::Bytes(b"/tmp/\xff".to_vec()),
            reason: "not valid UTF-8".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("/tmp/\u{fffd}"));
        assert!(display.contains("not valid UTF-8"));
    }

    #[test]
    fn test_symlink_cycle_error() {
        let err = Error::SymlinkCycle {
            path: PathValue::from("/a/link"),
        };
        assert!(format!("{err}").contains("/a/link"));
        assert!(err.is_resolution_error());
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_depth_exceeded_error() {
        let err = Error::ResolutionDepthExceeded {
            path: PathValue::from("/chain/l40"),
            limit: 40,
        };
        let display = format!("{err}");
        assert!(display.contains("40"));
        assert!(display.contains("/chain/l40"));
        assert_eq!(err.kind(), ErrorKind::ResolutionDepthExceeded);
    }

    #[test]
    fn test_filesystem_unavailable_keeps_source() {
        use std::error::Error as _;

        let err = Error::unavailable(
            b"/root/secret",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.kind(), ErrorKind::FilesystemUnavailable);
        assert!(err.source().is_some());
        assert!(format!("{err}").contains("/root/secret"));
    }

    #[test]
    fn test_configuration_errors_share_kind() {
        let validation = Error::Validation {
            field: "max_symlink_depth".into(),
            message: "must be greater than 0".into(),
        };
        let file = Error::ConfigFile {
            path: PathBuf::from("/etc/fpath.yaml"),
            reason: "Invalid YAML".into(),
        };
        assert_eq!(validation.kind(), ErrorKind::Configuration);
        assert_eq!(file.kind(), ErrorKind::Configuration);
        assert!(format!("{file}").contains("/etc/fpath.yaml"));
    }
}
