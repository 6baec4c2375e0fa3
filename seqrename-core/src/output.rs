use crate::apply::{RecordStatus, RenameOutcome};
use crate::error::SkipReason;
use crate::plan::RenamePlan;
use crate::preview::render_table;
use nu_ansi_term::Color;
use std::fmt::Write;
use std::path::PathBuf;

const RULE_WIDTH: usize = 50;

/// Result of a rename or plan operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameResult {
    /// The directory holds no regular files; `others` lists what it does hold
    NoFiles {
        directory: PathBuf,
        others: Vec<String>,
    },
    /// Names were computed but nothing was renamed (plan or dry run)
    Planned(RenamePlan),
    /// Renames were attempted
    Applied {
        plan: RenamePlan,
        outcome: RenameOutcome,
    },
}

impl RenameResult {
    pub fn renamed_count(&self) -> usize {
        match self {
            Self::Applied { outcome, .. } => outcome.renamed_count(),
            Self::NoFiles { .. } | Self::Planned(_) => 0,
        }
    }

    pub fn interrupted(&self) -> bool {
        matches!(self, Self::Applied { outcome, .. } if outcome.interrupted)
    }
}

/// Result of a version command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for rendering results as human-readable text
pub trait OutputFormatter {
    fn format_summary(&self, use_color: bool) -> String;
}

fn marker(symbol: &str, color: Color, use_color: bool) -> String {
    if use_color {
        color.bold().paint(symbol).to_string()
    } else {
        symbol.to_string()
    }
}

fn skip_marker(reason: &SkipReason, use_color: bool) -> String {
    match reason {
        SkipReason::DuplicateName { .. } => marker("⚠", Color::Yellow, use_color),
        _ => marker("✗", Color::Red, use_color),
    }
}

impl OutputFormatter for RenameResult {
    fn format_summary(&self, use_color: bool) -> String {
        let mut output = String::new();

        match self {
            Self::NoFiles { directory, others } => {
                writeln!(
                    output,
                    "{} No files found in {}",
                    marker("⚠", Color::Yellow, use_color),
                    directory.display()
                )
                .unwrap();
                if others.is_empty() {
                    writeln!(output, "  Contents: empty").unwrap();
                } else {
                    writeln!(output, "  Contents: {}", others.join(", ")).unwrap();
                }
            },
            Self::Planned(plan) => {
                writeln!(
                    output,
                    "Plan for {} (prefix '{}'): {} to rename, {} to skip",
                    plan.directory.display(),
                    plan.prefix,
                    plan.planned_count(),
                    plan.conflict_count()
                )
                .unwrap();
                writeln!(output, "{}", render_table(plan, use_color)).unwrap();
            },
            Self::Applied { plan, outcome } => {
                writeln!(
                    output,
                    "Found {} file(s) to rename in {}",
                    plan.entries.len(),
                    plan.directory.display()
                )
                .unwrap();
                writeln!(output).unwrap();

                for record in &outcome.records {
                    match &record.status {
                        RecordStatus::Renamed { new_name } => writeln!(
                            output,
                            "{} Renamed '{}' -> '{}'",
                            marker("✓", Color::Green, use_color),
                            record.original_name,
                            new_name
                        )
                        .unwrap(),
                        RecordStatus::Skipped(reason) => writeln!(
                            output,
                            "{} Skipped '{}': {}",
                            skip_marker(reason, use_color),
                            record.original_name,
                            reason
                        )
                        .unwrap(),
                    }
                }

                writeln!(output).unwrap();
                writeln!(output, "{}", "=".repeat(RULE_WIDTH)).unwrap();
                if outcome.interrupted {
                    writeln!(
                        output,
                        "Interrupted after {} of {} file(s)",
                        outcome.records.len(),
                        plan.entries.len()
                    )
                    .unwrap();
                } else {
                    writeln!(output, "Done").unwrap();
                }
                writeln!(output, "  Renamed: {}", outcome.renamed_count()).unwrap();
                writeln!(output, "  Skipped: {}", outcome.skipped_count()).unwrap();

                if outcome.skipped_count() > 0 {
                    writeln!(output).unwrap();
                    writeln!(output, "Skipped files:").unwrap();
                    for (name, reason) in outcome.skipped() {
                        writeln!(output, "  - {}: {}", name, reason).unwrap();
                    }
                }
                writeln!(output, "{}", "=".repeat(RULE_WIDTH)).unwrap();
            },
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format_summary(&self, _use_color: bool) -> String {
        format!("{} {}", self.name, self.version)
    }
}
