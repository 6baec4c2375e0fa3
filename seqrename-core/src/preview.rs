use crate::error::SkipReason;
use crate::plan::RenamePlan;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color_with_detector<F>(use_color: Option<bool>, is_terminal: F) -> bool
where
    F: Fn() -> bool,
{
    match use_color {
        Some(explicit_color) => explicit_color,
        None => is_terminal(),
    }
}

pub fn should_use_color(use_color: Option<bool>) -> bool {
    should_use_color_with_detector(use_color, || io::stdout().is_terminal())
}

/// Render a plan as a table of original name, new name and status
pub fn render_table(plan: &RenamePlan, use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("File").fg(Color::Cyan),
            Cell::new("New name").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["#", "File", "New name", "Status"]);
    }

    for entry in &plan.entries {
        let new_name = entry.computed_new_name.as_deref().unwrap_or("-");
        let (status, color) = match &entry.conflict {
            None => ("rename".to_string(), Color::Green),
            Some(SkipReason::DuplicateName { .. }) => ("skip: exists".to_string(), Color::Yellow),
            Some(reason) => (format!("skip: {}", reason), Color::Red),
        };

        let status_cell = if use_color {
            Cell::new(status).fg(color)
        } else {
            Cell::new(status)
        };

        table.add_row(vec![
            Cell::new(entry.index),
            Cell::new(&entry.original_name),
            Cell::new(new_name),
            status_cell,
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::plan_renames;
    use crate::request::RenameRequest;
    use std::ffi::OsString;
    use tempfile::TempDir;

    #[test]
    fn test_should_use_color_honors_explicit_choice() {
        assert!(should_use_color_with_detector(Some(true), || false));
        assert!(!should_use_color_with_detector(Some(false), || true));
        assert!(should_use_color_with_detector(None, || true));
        assert!(!should_use_color_with_detector(None, || false));
    }

    #[test]
    fn test_render_table_lists_every_entry() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("pic_1.png"), "x").unwrap();
        let request = RenameRequest::new(temp_dir.path(), Some("pic")).unwrap();
        let plan = plan_renames(
            &request,
            vec![OsString::from("cat.jpg"), OsString::from("dog.png")],
        );

        let table = render_table(&plan, false);

        assert!(table.contains("New name"));
        assert!(table.contains("cat.jpg"));
        assert!(table.contains("pic_0.jpg"));
        assert!(table.contains("dog.png"));
        assert!(table.contains("skip: exists"));
        assert!(!table.contains("\u{1b}["));
    }
}
