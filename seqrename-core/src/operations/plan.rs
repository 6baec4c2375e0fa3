use crate::error::RenameError;
use crate::output::RenameResult;
use crate::plan::{list_directory, plan_renames};
use crate::request::RenameRequest;

/// Plan operation - computes every new name without touching the filesystem
pub fn plan_operation(request: &RenameRequest) -> Result<RenameResult, RenameError> {
    let listing = list_directory(request.directory())?;

    if listing.files.is_empty() {
        return Ok(RenameResult::NoFiles {
            directory: request.directory().to_path_buf(),
            others: listing
                .others
                .iter()
                .map(|name| name.to_string_lossy().into_owned())
                .collect(),
        });
    }

    Ok(RenameResult::Planned(plan_renames(request, listing.files)))
}
