use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{RenameError, SkipReason};
use crate::naming::sequential_name;
use crate::request::RenameRequest;

/// One regular file found in the target directory, with its computed destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Position in the directory listing (0-based); the counter used in the new name
    pub index: usize,
    pub original_name: String,
    /// `None` when the original name could not be decoded
    pub computed_new_name: Option<String>,
    /// Set when the entry must be skipped without attempting a rename
    pub conflict: Option<SkipReason>,
    raw_name: OsString,
}

impl FileEntry {
    pub fn source_path(&self, directory: &Path) -> PathBuf {
        directory.join(&self.raw_name)
    }

    pub fn target_path(&self, directory: &Path) -> Option<PathBuf> {
        self.computed_new_name
            .as_ref()
            .map(|name| directory.join(name))
    }

    pub fn is_planned(&self) -> bool {
        self.conflict.is_none()
    }
}

/// The full set of renames computed before anything on disk changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub directory: PathBuf,
    pub prefix: String,
    pub entries: Vec<FileEntry>,
}

impl RenamePlan {
    pub fn planned_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_planned()).count()
    }

    pub fn conflict_count(&self) -> usize {
        self.entries.len() - self.planned_count()
    }
}

/// Result of listing the target directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    /// Regular files, in the order the OS returned them
    pub files: Vec<OsString>,
    /// Everything else (subdirectories, special entries, broken links)
    pub others: Vec<OsString>,
}

/// Validate the directory and list its entries, splitting regular files from the rest.
///
/// The listing order is whatever the filesystem returns; it is not sorted,
/// since sorting would change which file receives which counter.
pub fn list_directory(directory: &Path) -> Result<DirectoryListing, RenameError> {
    match fs::metadata(directory) {
        Ok(meta) if !meta.is_dir() => {
            return Err(RenameError::NotADirectory(directory.to_path_buf()));
        },
        Ok(_) => {},
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(RenameError::NotFound(directory.to_path_buf()));
        },
        Err(source) => {
            return Err(RenameError::ListDirectory {
                path: directory.to_path_buf(),
                source,
            });
        },
    }

    let list_error = |source: io::Error| RenameError::ListDirectory {
        path: directory.to_path_buf(),
        source,
    };

    let mut listing = DirectoryListing {
        files: Vec::new(),
        others: Vec::new(),
    };

    for entry in fs::read_dir(directory).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        // Follow symlinks: a link to a regular file counts as a file
        let is_file = fs::metadata(entry.path()).is_ok_and(|m| m.is_file());
        if is_file {
            listing.files.push(entry.file_name());
        } else {
            listing.others.push(entry.file_name());
        }
    }

    tracing::debug!(
        directory = %directory.display(),
        files = listing.files.len(),
        others = listing.others.len(),
        "listed directory"
    );

    Ok(listing)
}

/// Whether anything (file, directory, or dangling symlink) occupies `path`
pub(crate) fn destination_taken(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Compute every destination name up front and mark entries that cannot be renamed.
///
/// A destination that already exists at planning time (including another
/// original file in the same directory) makes the entry a duplicate. The
/// counter advances by listing position whether or not an entry is skipped.
pub fn plan_renames(request: &RenameRequest, files: Vec<OsString>) -> RenamePlan {
    let directory = request.directory();

    let entries = files
        .into_iter()
        .enumerate()
        .map(|(index, raw_name)| {
            let Some(name) = raw_name.to_str().map(str::to_string) else {
                return FileEntry {
                    index,
                    original_name: raw_name.to_string_lossy().into_owned(),
                    computed_new_name: None,
                    conflict: Some(SkipReason::InvalidName),
                    raw_name,
                };
            };

            let new_name = sequential_name(request.prefix(), index, &name);
            let conflict =
                destination_taken(&directory.join(&new_name)).then(|| SkipReason::DuplicateName {
                    target: new_name.clone(),
                });

            tracing::debug!(index, from = %name, to = %new_name, conflict = conflict.is_some(), "planned rename");

            FileEntry {
                index,
                original_name: name,
                computed_new_name: Some(new_name),
                conflict,
                raw_name,
            }
        })
        .collect();

    RenamePlan {
        directory: directory.to_path_buf(),
        prefix: request.prefix().to_string(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_directory_separates_files_from_dirs() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join("b.md"), "b").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();

        let listing = list_directory(temp_dir.path()).unwrap();

        let mut files: Vec<_> = listing.files.iter().map(|f| f.to_str().unwrap()).collect();
        files.sort_unstable();
        assert_eq!(files, vec!["a.txt", "b.md"]);
        assert_eq!(listing.others, vec![OsString::from("nested")]);
    }

    #[test]
    fn test_list_directory_missing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let err = list_directory(&missing).unwrap_err();
        assert!(matches!(err, RenameError::NotFound(p) if p == missing));
    }

    #[test]
    fn test_list_directory_on_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let err = list_directory(&file).unwrap_err();
        assert!(matches!(err, RenameError::NotADirectory(p) if p == file));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_follow_their_target() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("real.txt"), "x").unwrap();
        std::os::unix::fs::symlink("real.txt", temp_dir.path().join("link.txt")).unwrap();
        std::os::unix::fs::symlink("gone.txt", temp_dir.path().join("broken.txt")).unwrap();

        let listing = list_directory(temp_dir.path()).unwrap();

        assert_eq!(listing.files.len(), 2);
        assert_eq!(listing.others, vec![OsString::from("broken.txt")]);
    }

    #[test]
    fn test_plan_assigns_indices_by_position() {
        let temp_dir = TempDir::new().unwrap();
        let request = RenameRequest::new(temp_dir.path(), Some("pic")).unwrap();

        let plan = plan_renames(
            &request,
            vec!["z.png".into(), "a.jpg".into(), "notes".into()],
        );

        let names: Vec<_> = plan
            .entries
            .iter()
            .map(|e| e.computed_new_name.as_deref().unwrap())
            .collect();
        assert_eq!(names, vec!["pic_0.png", "pic_1.jpg", "pic_2"]);
        assert_eq!(plan.planned_count(), 3);
        assert_eq!(plan.conflict_count(), 0);
    }

    #[test]
    fn test_plan_marks_existing_destination_as_duplicate() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pic_1.jpg"), "taken").unwrap();
        let request = RenameRequest::new(temp_dir.path(), Some("pic")).unwrap();

        let plan = plan_renames(&request, vec!["a.jpg".into(), "b.jpg".into()]);

        assert!(plan.entries[0].is_planned());
        assert_eq!(
            plan.entries[1].conflict,
            Some(SkipReason::DuplicateName {
                target: "pic_1.jpg".to_string()
            })
        );
        // The counter is positional, so the skipped index is not handed to anyone else
        assert_eq!(plan.entries[1].index, 1);
    }

    #[test]
    fn test_plan_uses_request_prefix_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let request = RenameRequest::new(temp_dir.path(), Some("")).unwrap();

        let plan = plan_renames(&request, vec!["a.txt".into()]);

        assert_eq!(plan.prefix, crate::request::DEFAULT_PREFIX);
        assert_eq!(
            plan.entries[0].computed_new_name.as_deref(),
            Some("archivo_0.txt")
        );
    }
}
