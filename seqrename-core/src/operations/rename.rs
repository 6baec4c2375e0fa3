use std::sync::atomic::AtomicBool;

use crate::apply::{apply_plan, ApplyOptions};
use crate::error::RenameError;
use crate::operations::plan::plan_operation;
use crate::output::RenameResult;
use crate::request::RenameRequest;

#[derive(Debug, Default, Clone, Copy)]
pub struct RenameOptions<'a> {
    /// Compute and report the plan without renaming anything
    pub dry_run: bool,
    /// Shared flag set by the signal handlers
    pub interrupt: Option<&'a AtomicBool>,
}

/// Rename operation - lists the directory, plans every new name, then renames file by file.
///
/// Only directory-level problems are returned as errors. Per-file problems
/// are recorded in the outcome and never abort the run.
pub fn rename_operation(
    request: &RenameRequest,
    options: &RenameOptions,
) -> Result<RenameResult, RenameError> {
    tracing::debug!(
        directory = %request.directory().display(),
        prefix = request.prefix(),
        dry_run = options.dry_run,
        "starting rename"
    );

    let plan = match plan_operation(request)? {
        RenameResult::Planned(plan) => plan,
        other => return Ok(other),
    };

    if options.dry_run {
        return Ok(RenameResult::Planned(plan));
    }

    let outcome = apply_plan(
        &plan,
        &ApplyOptions {
            interrupt: options.interrupt,
        },
    );

    tracing::info!(
        renamed = outcome.renamed_count(),
        skipped = outcome.skipped_count(),
        "rename finished"
    );

    Ok(RenameResult::Applied { plan, outcome })
}
