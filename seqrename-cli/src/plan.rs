use anyhow::Result;
use seqrename_core::{plan_operation, OutputFormatter, RenameRequest};

pub fn handle_plan(request: &RenameRequest, use_color: bool, quiet: bool) -> Result<()> {
    let result = plan_operation(request)?;

    if !quiet {
        print!("{}", result.format_summary(use_color));
    }
    Ok(())
}
