use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Prefix used when none (or only whitespace) is supplied
pub const DEFAULT_PREFIX: &str = "archivo";

/// A prefix that would make the new name escape the target directory
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid prefix '{0}': it must not contain path separators")]
pub struct InvalidPrefix(pub String);

/// A validated rename request. Construct it once at the boundary and pass it down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRequest {
    directory: PathBuf,
    prefix: String,
    default_prefix: bool,
}

impl RenameRequest {
    /// Build a request, substituting [`DEFAULT_PREFIX`] for an empty or blank prefix.
    ///
    /// Every new name must stay a plain file name inside `directory`, so a
    /// prefix with a path separator is rejected.
    pub fn new(directory: impl Into<PathBuf>, prefix: Option<&str>) -> Result<Self, InvalidPrefix> {
        let (prefix, default_prefix) = match prefix {
            Some(p) if !p.trim().is_empty() => (p.to_string(), false),
            _ => (DEFAULT_PREFIX.to_string(), true),
        };

        if !stays_in_directory(&prefix) {
            return Err(InvalidPrefix(prefix));
        }

        Ok(Self {
            directory: directory.into(),
            prefix,
            default_prefix,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// True when the caller's prefix was blank and replaced by the fallback
    pub fn uses_default_prefix(&self) -> bool {
        self.default_prefix
    }
}

fn stays_in_directory(prefix: &str) -> bool {
    if prefix.contains(['/', '\\', MAIN_SEPARATOR]) {
        return false;
    }

    let sample = format!("{}_0", prefix);
    let mut components = Path::new(&sample).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_given_prefix() {
        let request = RenameRequest::new("photos", Some("holiday")).unwrap();
        assert_eq!(request.prefix(), "holiday");
        assert_eq!(request.directory(), Path::new("photos"));
        assert!(!request.uses_default_prefix());
    }

    #[test]
    fn test_empty_prefix_falls_back() {
        for prefix in [Some(""), Some("   "), None] {
            let request = RenameRequest::new(".", prefix).unwrap();
            assert_eq!(request.prefix(), DEFAULT_PREFIX);
            assert!(request.uses_default_prefix());
        }
    }

    #[test]
    fn test_explicit_default_literal_is_not_a_fallback() {
        let request = RenameRequest::new(".", Some(DEFAULT_PREFIX)).unwrap();
        assert_eq!(request.prefix(), DEFAULT_PREFIX);
        assert!(!request.uses_default_prefix());
    }

    #[test]
    fn test_prefix_is_not_trimmed() {
        // Only blank prefixes are replaced; surrounding spaces are the caller's choice
        let request = RenameRequest::new(".", Some(" trip ")).unwrap();
        assert_eq!(request.prefix(), " trip ");
    }

    #[test]
    fn test_rejects_prefix_with_separators() {
        for prefix in ["sub/x", "../escaped", "a\\b", "/abs", "x/"] {
            assert_eq!(
                RenameRequest::new(".", Some(prefix)),
                Err(InvalidPrefix(prefix.to_string())),
                "prefix {prefix:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_dots_alone_are_a_plain_name() {
        // `.._0` is an ordinary file name, not a parent reference
        let request = RenameRequest::new(".", Some("..")).unwrap();
        assert_eq!(request.prefix(), "..");
    }
}
