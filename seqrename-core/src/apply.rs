use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::SkipReason;
use crate::plan::{destination_taken, FileEntry, RenamePlan};

#[derive(Debug, Default, Clone, Copy)]
pub struct ApplyOptions<'a> {
    /// Checked before each rename; once set, the remaining entries are left alone
    pub interrupt: Option<&'a AtomicBool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatus {
    Renamed { new_name: String },
    Skipped(SkipReason),
}

/// What happened to one file, in processing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    pub original_name: String,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameOutcome {
    pub records: Vec<RenameRecord>,
    /// True when the run stopped early because of a signal
    pub interrupted: bool,
}

impl RenameOutcome {
    pub fn renamed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.status, RecordStatus::Renamed { .. }))
            .count()
    }

    /// Skipped files and the reason for each, in processing order
    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.records.iter().filter_map(|r| match &r.status {
            RecordStatus::Skipped(reason) => Some((r.original_name.as_str(), reason)),
            RecordStatus::Renamed { .. } => None,
        })
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }

    fn skip(&mut self, entry: &FileEntry, reason: SkipReason) {
        tracing::warn!(file = %entry.original_name, %reason, "skipped");
        self.records.push(RenameRecord {
            original_name: entry.original_name.clone(),
            status: RecordStatus::Skipped(reason),
        });
    }
}

/// Perform the renames of a plan one by one.
///
/// Each rename is independent and immediately visible. A failure on one file
/// is recorded and the run moves on; nothing already renamed is reverted.
pub fn apply_plan(plan: &RenamePlan, options: &ApplyOptions) -> RenameOutcome {
    let mut outcome = RenameOutcome::default();

    for entry in &plan.entries {
        if options
            .interrupt
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
        {
            tracing::warn!(
                remaining = plan.entries.len() - outcome.records.len(),
                "interrupted, stopping before the remaining files"
            );
            outcome.interrupted = true;
            break;
        }

        if let Some(reason) = &entry.conflict {
            outcome.skip(entry, reason.clone());
            continue;
        }

        let (Some(new_name), Some(to)) = (
            entry.computed_new_name.as_ref(),
            entry.target_path(&plan.directory),
        ) else {
            outcome.skip(entry, SkipReason::InvalidName);
            continue;
        };

        // The directory may have changed since planning
        if destination_taken(&to) {
            outcome.skip(
                entry,
                SkipReason::DuplicateName {
                    target: new_name.clone(),
                },
            );
            continue;
        }

        let from = entry.source_path(&plan.directory);
        match fs::rename(&from, &to) {
            Ok(()) => {
                tracing::info!(from = %entry.original_name, to = %new_name, "renamed");
                outcome.records.push(RenameRecord {
                    original_name: entry.original_name.clone(),
                    status: RecordStatus::Renamed {
                        new_name: new_name.clone(),
                    },
                });
            },
            Err(e) => outcome.skip(entry, SkipReason::from_io(&e)),
        }
    }

    outcome
}
