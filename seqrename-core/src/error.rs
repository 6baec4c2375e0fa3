use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures that abort a whole rename run before any file is touched.
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    /// The target directory does not exist
    #[error("directory not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The target path exists but is not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The directory exists but could not be listed (e.g. permission denied)
    #[error("failed to list directory {}: {source}", .path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single file was left untouched. Per-file problems never abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Something already exists at the computed destination
    DuplicateName { target: String },
    /// The OS refused the rename
    PermissionDenied,
    /// The file name is not valid UTF-8 and cannot be split into stem and extension
    InvalidName,
    /// Any other I/O failure while renaming
    Io { message: String },
}

impl SkipReason {
    pub(crate) fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io {
                message: err.to_string(),
            },
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { target } => write!(f, "'{}' already exists", target),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::InvalidName => write!(f, "file name is not valid UTF-8"),
            Self::Io { message } => write!(f, "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_from_permission_error() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(SkipReason::from_io(&err), SkipReason::PermissionDenied);
    }

    #[test]
    fn test_skip_reason_from_other_error_keeps_message() {
        let err = io::Error::new(io::ErrorKind::Other, "disk on fire");
        assert_eq!(
            SkipReason::from_io(&err),
            SkipReason::Io {
                message: "disk on fire".to_string()
            }
        );
    }

    #[test]
    fn test_error_messages() {
        let err = RenameError::NotFound(PathBuf::from("missing"));
        assert_eq!(err.to_string(), "directory not found: missing");

        let err = RenameError::NotADirectory(PathBuf::from("file.txt"));
        assert_eq!(err.to_string(), "not a directory: file.txt");

        let reason = SkipReason::DuplicateName {
            target: "file_0.txt".to_string(),
        };
        assert_eq!(reason.to_string(), "'file_0.txt' already exists");
    }
}
