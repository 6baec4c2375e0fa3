use anyhow::Result;
use seqrename_core::{rename_operation, OutputFormatter, RenameOptions, RenameRequest};
use std::sync::atomic::AtomicBool;

pub fn handle_rename(
    request: &RenameRequest,
    dry_run: bool,
    interrupted: &AtomicBool,
    use_color: bool,
    quiet: bool,
) -> Result<()> {
    // A dry run prints the same plan view as `plan`, header included
    if !quiet && !dry_run {
        println!("Directory: {}", request.directory().display());
        println!("Prefix: {}", request.prefix());
        println!();
    }

    let result = rename_operation(
        request,
        &RenameOptions {
            dry_run,
            interrupt: Some(interrupted),
        },
    )?;

    if !quiet {
        print!("{}", result.format_summary(use_color));
    }
    Ok(())
}
