#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod config;
pub mod error;
pub mod naming;
pub mod operations;
pub mod output;
pub mod plan;
pub mod preview;
pub mod request;

pub use apply::{apply_plan, ApplyOptions, RecordStatus, RenameOutcome, RenameRecord};
pub use config::Config;
pub use error::{RenameError, SkipReason};
pub use naming::{sequential_name, split_extension};
pub use operations::{plan_operation, rename_operation, RenameOptions};
pub use output::{OutputFormatter, RenameResult, VersionResult};
pub use plan::{list_directory, plan_renames, DirectoryListing, FileEntry, RenamePlan};
pub use preview::{render_table, should_use_color};
pub use request::{InvalidPrefix, RenameRequest, DEFAULT_PREFIX};
